use crate::{
    error::ScriptError,
    interpreter::{number::clean_number, value::Coordinate},
    script::{ScriptResult, symbols::SymbolTable},
};

/// Resolves one command argument into a coordinate.
///
/// - `[x, y]` evaluates both components and keeps their real parts.
/// - `@name` looks `name` up in `symbols`.
/// - Anything else is a single complex expression placed at
///   `(real, imaginary)`.
///
/// # Errors
/// - [`ScriptError::ImproperCoordinate`] for `[` without a closing `]`.
/// - [`ScriptError::WrongNumberOfCommas`] unless the brackets hold exactly two
///   components.
/// - [`ScriptError::FetchingNonexistentSymbol`] for an unbound `@name`.
/// - [`ScriptError::InvalidExpression`] for a component that does not
///   evaluate.
///
/// # Example
/// ```
/// use graph_gen::{
///     interpreter::value::Coordinate,
///     script::{coordinate::convert_number, symbols::SymbolTable},
/// };
///
/// let symbols = SymbolTable::new();
/// assert_eq!(convert_number("[1, 2]", &symbols).unwrap(), Coordinate::cartesian(1.0, 2.0));
/// assert_eq!(convert_number("3 - i", &symbols).unwrap(), Coordinate::cartesian(3.0, -1.0));
/// assert!(convert_number("[1, 2", &symbols).is_err());
/// ```
pub fn convert_number(arg: &str, symbols: &SymbolTable) -> ScriptResult<Coordinate> {
    let arg = arg.trim();

    if let Some(inner) = arg.strip_prefix('[') {
        let inner = inner.strip_suffix(']')
                         .ok_or_else(|| ScriptError::ImproperCoordinate { coordinate: arg.to_string() })?;
        return cartesian(inner);
    }

    if let Some(name) = arg.strip_prefix('@') {
        return symbols.fetch(name.trim());
    }

    clean_number(arg).map(Coordinate::imaginary)
}

fn cartesian(inner: &str) -> ScriptResult<Coordinate> {
    let components = split_components(inner);

    let [x, y] = components.as_slice() else {
        return Err(ScriptError::WrongNumberOfCommas { coordinate: inner.to_string(),
                                                      found:      components.len(), });
    };

    Ok(Coordinate::cartesian(clean_number(x)?.real, clean_number(y)?.real))
}

/// Splits on commas that are not nested inside parentheses or brackets.
fn split_components(inner: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (offset, c) in inner.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                components.push(&inner[start..offset]);
                start = offset + 1;
            },
            _ => {},
        }
    }
    components.push(&inner[start..]);

    components
}
