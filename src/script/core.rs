use crate::{
    error::LineError,
    script::{
        ScriptResult,
        annotation::{Circle, Label, Line, Point},
        command::dispatch,
        symbols::SymbolTable,
        tokenizer::{split_line, strip_comment},
    },
};

/// A fully parsed diagram: axis settings plus the annotations to draw, in the
/// order the script declared them.
///
/// A `Script` only comes out of [`Script::parse`], and nothing can change it
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub(in crate::script) xrange:    (f64, f64),
    pub(in crate::script) yrange:    (f64, f64),
    pub(in crate::script) xinterval: f64,
    pub(in crate::script) yinterval: f64,
    pub(in crate::script) points:    Vec<Point>,
    pub(in crate::script) lines:     Vec<Line>,
    pub(in crate::script) circles:   Vec<Circle>,
    pub(in crate::script) text:      Vec<Label>,
    pub(in crate::script) symbols:   SymbolTable,
}

impl Default for Script {
    fn default() -> Self {
        Self { xrange:    (-1.0, 1.0),
               yrange:    (-1.0, 1.0),
               xinterval: 0.2,
               yinterval: 0.2,
               points:    Vec::new(),
               lines:     Vec::new(),
               circles:   Vec::new(),
               text:      Vec::new(),
               symbols:   SymbolTable::new(), }
    }
}

impl Script {
    /// Parses a whole script.
    ///
    /// Lines are numbered from 1. Each one is trimmed, cut at the first
    /// unescaped `%`, skipped if nothing is left, then tokenized and
    /// dispatched. The first failing line stops the run.
    ///
    /// # Errors
    /// A [`LineError`] naming the failing line and carrying the raw line text.
    ///
    /// # Example
    /// ```
    /// use graph_gen::script::Script;
    ///
    /// let script = Script::parse("xrange -2, 2\npoint [0,0]!blue % origin").unwrap();
    /// assert_eq!(script.xrange(), (-2.0, 2.0));
    /// assert_eq!(script.points().len(), 1);
    ///
    /// let err = Script::parse("point [0,0]\nfoo 1,2").unwrap_err();
    /// assert_eq!(err.line, 2);
    /// ```
    pub fn parse(source: &str) -> Result<Self, LineError> {
        let mut script = Self::default();

        for (index, raw_line) in source.lines().enumerate() {
            if let Err(error) = script.feed_line(raw_line) {
                let error = LineError { line: index + 1,
                                        source_line: raw_line.to_string(),
                                        error };
                log::warn!("aborting script: {error}");
                return Err(error);
            }
        }

        Ok(script)
    }

    fn feed_line(&mut self, raw_line: &str) -> ScriptResult<()> {
        let line = strip_comment(raw_line.trim()).trim();
        if line.is_empty() {
            return Ok(());
        }
        dispatch(self, split_line(line)?)
    }

    /// Horizontal axis bounds, `(min, max)`.
    #[must_use]
    pub const fn xrange(&self) -> (f64, f64) {
        self.xrange
    }

    /// Vertical axis bounds, `(min, max)`.
    #[must_use]
    pub const fn yrange(&self) -> (f64, f64) {
        self.yrange
    }

    /// Tick spacing on the horizontal axis.
    #[must_use]
    pub const fn xinterval(&self) -> f64 {
        self.xinterval
    }

    /// Tick spacing on the vertical axis.
    #[must_use]
    pub const fn yinterval(&self) -> f64 {
        self.yinterval
    }

    /// Points in declaration order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Line segments in declaration order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Circles in declaration order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Text labels in declaration order.
    #[must_use]
    pub fn text(&self) -> &[Label] {
        &self.text
    }

    /// The variables the script defined.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ScriptError,
        interpreter::value::Coordinate,
        script::color::Color,
    };

    const DIAGRAM: &str = "xrange -2, 2
point [0,0]!blue
circle 1!red
variable a, [1,1]
line [0,0], @a
";

    #[test]
    fn defaults() {
        let script = Script::parse("").unwrap();
        assert_eq!(script.xrange(), (-1.0, 1.0));
        assert_eq!(script.yrange(), (-1.0, 1.0));
        assert_eq!(script.xinterval(), 0.2);
        assert_eq!(script.yinterval(), 0.2);
        assert!(script.points().is_empty());
        assert!(script.symbols().is_empty());
    }

    #[test]
    fn end_to_end() {
        let script = Script::parse(DIAGRAM).unwrap();

        assert_eq!(script.xrange(), (-2.0, 2.0));
        assert_eq!(script.points(),
                   [Point { at:    Coordinate::cartesian(0.0, 0.0),
                            color: Some(Color::new("blue").unwrap()), }]);
        assert_eq!(script.circles(),
                   [Circle { radius: 1.0,
                             color:  Some(Color::new("red").unwrap()), }]);
        assert_eq!(script.lines(),
                   [Line { from:  Coordinate::cartesian(0.0, 0.0),
                           to:    Coordinate::cartesian(1.0, 1.0),
                           color: None, }]);
        assert_eq!(script.symbols().fetch("a").unwrap(), Coordinate::cartesian(1.0, 1.0));
    }

    #[test]
    fn redefinition_halts_the_run() {
        let source = format!("{DIAGRAM}variable a, [2,2]\npoint [5,5]\n");
        let err = Script::parse(&source).unwrap_err();

        assert_eq!(err.line, 6);
        assert_eq!(err.source_line, "variable a, [2,2]");
        assert_eq!(err.error,
                   ScriptError::OverridingSymbol { name:  "a".to_string(),
                                                   value: Coordinate::cartesian(2.0, 2.0), });
    }

    #[test]
    fn unknown_command_is_reported_with_the_raw_line() {
        let err = Script::parse("\n  foo 1,2  % trailing note").unwrap_err();

        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(),
                   "Error at line 2: \"  foo 1,2  % trailing note\"\nUnknown command found: foo");
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let with_comment = Script::parse("% header\n\n   \npoint [0,0] % this is a note").unwrap();
        let without = Script::parse("point [0,0]").unwrap();
        assert_eq!(with_comment, without);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let script = Script::parse("point 1\npoint 2i\npoint [3,3]").unwrap();
        let at: Vec<_> = script.points().iter().map(|p| p.at.as_tuple()).collect();
        assert_eq!(at, [(1.0, 0.0), (0.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn windows_line_endings() {
        let script = Script::parse("xrange 0, 4\r\nyrange 0, 3\r\n").unwrap();
        assert_eq!(script.yrange(), (0.0, 3.0));
    }
}
