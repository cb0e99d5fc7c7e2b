use crate::script::{ScriptResult, color::Color};

/// One script line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    /// The command word, or the whole value on a shorthand line.
    pub command: String,
    /// The arguments, trimmed, in order.
    pub args:    Vec<String>,
    /// The validated color suffix, if any.
    pub color:   Option<Color>,
}

/// Removes everything from the first unescaped `%` onward.
///
/// `\%` does not start a comment and is left in place for the text decoder.
///
/// # Example
/// ```
/// use graph_gen::script::tokenizer::strip_comment;
///
/// assert_eq!(strip_comment("point [0,0] % origin"), "point [0,0] ");
/// assert_eq!(strip_comment(r#"text [0,0], "50\%""#), r#"text [0,0], "50\%""#);
/// ```
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (offset, c) in line.char_indices() {
        match c {
            '%' if !escaped => return &line[..offset],
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    line
}

/// Splits a comment-free line into command, arguments and color.
///
/// The line is scanned once, left to right:
/// - a space ends the command word, as long as no command has been read yet;
/// - a comma outside a literal ends the current argument;
/// - `[` and `"` enter a literal, `]` and a second `"` leave it (one shared
///   flag, no nesting);
/// - `!` outside a literal ends the last argument, and everything after it is
///   the color.
///
/// A line that never hits a space has no command word. Its single value
/// becomes the command and the argument list is empty.
///
/// # Errors
/// [`ScriptError::InvalidColor`](crate::error::ScriptError::InvalidColor) if
/// the color suffix is neither a named color nor a hex code.
///
/// # Example
/// ```
/// use graph_gen::script::tokenizer::split_line;
///
/// let line = split_line("point [1, 2]!red").unwrap();
/// assert_eq!(line.command, "point");
/// assert_eq!(line.args, ["[1, 2]"]);
/// assert_eq!(line.color.unwrap().as_str(), "red");
/// ```
pub fn split_line(line: &str) -> ScriptResult<TokenizedLine> {
    let mut command: Option<String> = None;
    let mut args = Vec::new();
    let mut buffer = String::new();
    let mut color = None;
    let mut outside_literal = true;

    for c in line.trim().chars() {
        if color.is_some() {
            buffer.push(c);
            continue;
        }
        match c {
            ' ' if command.is_none() => {
                command = Some(std::mem::take(&mut buffer));
                continue;
            },
            ',' if outside_literal => {
                args.push(take_arg(&mut buffer));
                continue;
            },
            '[' => outside_literal = false,
            ']' => outside_literal = true,
            '"' => outside_literal = !outside_literal,
            '!' if outside_literal => {
                args.push(take_arg(&mut buffer));
                color = Some(String::new());
                continue;
            },
            _ => {},
        }
        buffer.push(c);
    }

    let color = match color {
        Some(_) => Some(Color::new(buffer.trim())?),
        None => {
            args.push(take_arg(&mut buffer));
            None
        },
    };

    let command = match command {
        Some(command) => command,
        None => {
            let value = args.first().cloned().unwrap_or_default();
            args.clear();
            value
        },
    };

    log::trace!("tokenized {line:?} into command {command:?}, args {args:?}, color {color:?}");

    Ok(TokenizedLine { command, args, color })
}

fn take_arg(buffer: &mut String) -> String {
    let arg = buffer.trim().to_string();
    buffer.clear();
    arg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ScriptError,
        script::{Script, command::dispatch},
    };

    fn split(line: &str) -> (String, Vec<String>, Option<String>) {
        let TokenizedLine { command, args, color } = split_line(line).unwrap();
        (command, args, color.map(|c| c.as_str().to_string()))
    }

    #[test]
    fn point_with_color() {
        assert_eq!(split("point [1, 2]!red"),
                   ("point".to_string(), vec!["[1, 2]".to_string()], Some("red".to_string())));
    }

    #[test]
    fn text_with_quoted_comma_and_hex_color() {
        let (command, args, color) = split(r#"text [0,0], "hi, there"!#00FF00"#);
        assert_eq!(command, "text");
        assert_eq!(args, ["[0,0]", "\"hi, there\""]);
        assert_eq!(color.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn plain_arguments_without_color() {
        let (command, args, color) = split("  xrange -2,  2  ");
        assert_eq!(command, "xrange");
        assert_eq!(args, ["-2", "2"]);
        assert_eq!(color, None);
    }

    #[test]
    fn everything_after_the_bang_is_color() {
        let err = split_line("point [0,0]!red, blue").unwrap_err();
        assert_eq!(err, ScriptError::InvalidColor { color: "red, blue".to_string() });
    }

    #[test]
    fn bang_inside_a_literal_is_kept() {
        let (_, args, color) = split(r#"text [0,0], "hello!"!blue"#);
        assert_eq!(args[1], "\"hello!\"");
        assert_eq!(color.as_deref(), Some("blue"));
    }

    #[test]
    fn brackets_and_quotes_share_one_literal_flag() {
        let line = split_line(r#"text [0,0], "a [b], c""#).unwrap();
        assert_eq!(line.args, ["[0,0]", "\"a [b]", "c\""]);

        let err = dispatch(&mut Script::default(), line).unwrap_err();
        assert_eq!(err,
                   ScriptError::WrongNumberOfArguments { command:  "text",
                                                         expected: 2,
                                                         found:    3, });
    }

    #[test]
    fn shorthand_line_becomes_the_command() {
        let (command, args, color) = split("[1,2]");
        assert_eq!(command, "[1,2]");
        assert!(args.is_empty());
        assert_eq!(color, None);
    }

    #[test]
    fn shorthand_line_keeps_only_the_first_value() {
        let (command, args, _) = split("1,2");
        assert_eq!(command, "1");
        assert!(args.is_empty());

        let (command, args, _) = split("xrange");
        assert_eq!(command, "xrange");
        assert!(args.is_empty());
    }

    #[test]
    fn invalid_color_is_rejected() {
        assert_eq!(split_line("circle 1!Reddish").unwrap_err(),
                   ScriptError::InvalidColor { color: "reddish".to_string() });
        assert!(split_line("circle 1!").is_err());
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(split_line(strip_comment("point [0,0] % this is a note")),
                   split_line("point [0,0]"));
        assert_eq!(strip_comment("% whole line"), "");
        assert_eq!(strip_comment(r"a \\% b"), r"a \\");
    }
}
