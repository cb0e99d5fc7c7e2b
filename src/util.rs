/// Numeric conversion helpers.
///
/// Safe conversion from `f64` to integers for exact integer powers, and the
/// reader used for plain float arguments such as `xrange -2, 2`.
pub mod num;
