use std::{fs, io, path::PathBuf};

use clap::Parser;
use graph_gen::{
    render::ListingRenderer,
    report::{DEFAULT_LOG_FILE, ErrorReporter, LogFileReporter},
    run,
};
use tracing_subscriber::EnvFilter;

/// graph-gen reads a diagram script and lists the points, lines, circles and
/// labels it describes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells graph-gen to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Where failed runs are logged.
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let reporter = LogFileReporter::new(args.log_file);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
            reporter.report(&format!("Failed to read the input file '{}': {e}", args.contents))
        })
    } else {
        args.contents
    };

    let mut renderer = ListingRenderer::new(io::stdout().lock());
    if let Err(e) = run(&script, &reporter, &mut renderer) {
        log::error!("could not write the listing: {e}");
        std::process::exit(1);
    }
}
