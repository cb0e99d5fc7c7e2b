/// Arithmetic dispatch.
///
/// Routes `+ - * /` and hands powers to [`power`].
pub mod core;

/// Exponentiation.
pub mod power;
