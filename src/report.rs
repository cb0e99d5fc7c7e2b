use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};

/// Default location of the error log.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Receives the message of a failed run. Reporting ends the run, so
/// [`report`](ErrorReporter::report) never returns.
pub trait ErrorReporter {
    fn report(&self, message: &str) -> !;
}

/// Prints the message to stderr, appends it to a log file and exits with
/// status 1.
#[derive(Debug, Clone)]
pub struct LogFileReporter {
    path: PathBuf,
}

impl LogFileReporter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry to the log file, creating the file if needed.
    ///
    /// # Errors
    /// Any I/O error from opening or writing the file.
    pub fn write_entry(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(format_entry(Local::now().naive_local(), message).as_bytes())
    }
}

impl Default for LogFileReporter {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl ErrorReporter for LogFileReporter {
    fn report(&self, message: &str) -> ! {
        eprintln!("{message}");
        if let Err(e) = self.write_entry(message) {
            log::error!("could not write to {}: {e}", self.path.display());
        }
        std::process::exit(1)
    }
}

/// Lays out one log entry, stamped with local wall-clock time.
fn format_entry(time: NaiveDateTime, message: &str) -> String {
    format!("{}:\n\nMetadata:\n    graph_gen version: {}\n\nMessage:\n{message}\n\nEND LOG\n",
            time.format("%Y-%m-%d %H:%M:%S%.6f"),
            env!("CARGO_PKG_VERSION"))
}
