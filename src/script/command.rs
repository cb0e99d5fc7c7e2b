use crate::{
    error::ScriptError,
    script::{
        Script, ScriptResult,
        annotation::{Circle, Label, Line, Point},
        color::Color,
        coordinate::convert_number,
        tokenizer::TokenizedLine,
    },
    util::num::parse_real,
};

/// Type alias for command handlers.
///
/// A handler receives the script being built, the arguments (already checked
/// against the arity) and the line's color.
type CommandFn = fn(&mut Script, &[String], Option<Color>) -> ScriptResult<()>;

/// Defines the script commands by generating a lookup table and a name list.
///
/// Each entry provides a name, the exact number of arguments and the handler.
macro_rules! commands {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                handler: $handler:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct CommandDef {
            name:    &'static str,
            arity:   usize,
            handler: CommandFn,
        }
        static COMMAND_TABLE: &[CommandDef] = &[
            $(
                CommandDef { name: $name, arity: $arity, handler: $handler },
            )*
        ];
        /// Names of every recognized command.
        pub const COMMANDS: &[&str] = &[
            $($name,)*
        ];
    };
}

commands! {
    "xrange"    => { arity: 2, handler: set_xrange },
    "yrange"    => { arity: 2, handler: set_yrange },
    "xinterval" => { arity: 1, handler: set_xinterval },
    "yinterval" => { arity: 1, handler: set_yinterval },
    "variable"  => { arity: 2, handler: set_variable },
    "point"     => { arity: 1, handler: set_point },
    "line"      => { arity: 2, handler: set_line },
    "text"      => { arity: 2, handler: set_text },
    "circle"    => { arity: 1, handler: set_circle },
}

/// Runs one tokenized line against the script being built.
///
/// # Errors
/// - `UnknownCommand` if the command is not in the table.
/// - `WrongNumberOfArguments` if the argument count does not match.
/// - Whatever the handler reports while resolving its arguments.
pub(in crate::script) fn dispatch(script: &mut Script, line: TokenizedLine) -> ScriptResult<()> {
    let TokenizedLine { command, args, color } = line;

    let def = COMMAND_TABLE.iter()
                           .find(|def| def.name == command)
                           .ok_or(ScriptError::UnknownCommand { command })?;

    if args.len() != def.arity {
        return Err(ScriptError::WrongNumberOfArguments { command:  def.name,
                                                         expected: def.arity,
                                                         found:    args.len(), });
    }

    log::debug!("{} {:?} color={:?}", def.name, args, color);
    (def.handler)(script, &args, color)
}

fn set_xrange(script: &mut Script, args: &[String], _: Option<Color>) -> ScriptResult<()> {
    script.xrange = (real(&args[0])?, real(&args[1])?);
    Ok(())
}

fn set_yrange(script: &mut Script, args: &[String], _: Option<Color>) -> ScriptResult<()> {
    script.yrange = (real(&args[0])?, real(&args[1])?);
    Ok(())
}

fn set_xinterval(script: &mut Script, args: &[String], _: Option<Color>) -> ScriptResult<()> {
    script.xinterval = real(&args[0])?;
    Ok(())
}

fn set_yinterval(script: &mut Script, args: &[String], _: Option<Color>) -> ScriptResult<()> {
    script.yinterval = real(&args[0])?;
    Ok(())
}

fn set_variable(script: &mut Script, args: &[String], _: Option<Color>) -> ScriptResult<()> {
    let value = convert_number(&args[1], &script.symbols)?;
    script.symbols.add(&args[0], value)
}

fn set_point(script: &mut Script, args: &[String], color: Option<Color>) -> ScriptResult<()> {
    let at = convert_number(&args[0], &script.symbols)?;
    script.points.push(Point { at, color });
    Ok(())
}

fn set_line(script: &mut Script, args: &[String], color: Option<Color>) -> ScriptResult<()> {
    let from = convert_number(&args[0], &script.symbols)?;
    let to = convert_number(&args[1], &script.symbols)?;
    script.lines.push(Line { from, to, color });
    Ok(())
}

fn set_text(script: &mut Script, args: &[String], color: Option<Color>) -> ScriptResult<()> {
    let at = convert_number(&args[0], &script.symbols)?;
    script.text.push(Label { at,
                             text: decode_text(&args[1]),
                             color: color.unwrap_or_else(Color::black) });
    Ok(())
}

fn set_circle(script: &mut Script, args: &[String], color: Option<Color>) -> ScriptResult<()> {
    let radius = real(&args[0])?;
    script.circles.push(Circle { radius, color });
    Ok(())
}

fn real(arg: &str) -> ScriptResult<f64> {
    parse_real(arg).map_err(|cause| ScriptError::InvalidExpression { expression: arg.trim()
                                                                                    .to_string(),
                                                                     cause })
}

/// Strips the surrounding quotes and expands `\n`, `\t` and `\%`.
///
/// Any other backslash is kept as written.
fn decode_text(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix('"')
                 .and_then(|rest| rest.strip_suffix('"'))
                 .unwrap_or(raw);

    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('%') => text.push('%'),
            _ => {
                text.push('\\');
                continue;
            },
        }
        chars.next();
    }
    text
}
