use crate::error::ScriptError;

#[derive(Debug, Clone, PartialEq)]
/// A [`ScriptError`] tagged with the line it happened on.
///
/// The display form is what gets handed to the error reporter:
///
/// ```text
/// Error at line 3: "circle one"
/// Invalid Expression: one (...)
/// ```
pub struct LineError {
    /// 1-based line number.
    pub line:        usize,
    /// The line exactly as it appeared in the input.
    pub source_line: String,
    /// What went wrong.
    pub error:       ScriptError,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at line {}: \"{}\"\n{}",
               self.line, self.source_line, self.error)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
