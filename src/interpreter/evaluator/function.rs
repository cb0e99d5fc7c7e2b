/// The builtin lookup table.
///
/// Maps names to implementations and checks argument counts.
pub mod core;
/// The `sqrt` (square root) function implementation.
///
/// Real square root of a non-negative real value.
pub mod sqrt;
