/// Complex numbers.
///
/// Every numeric expression evaluates to a [`ComplexNumber`]; purely real
/// values simply carry a zero imaginary part.
pub mod complex;
/// Coordinates on the plane.
///
/// A [`Coordinate`] is what ends up in the script: built either from a
/// bracketed `[x, y]` pair or from the real and imaginary parts of a complex
/// value.
pub mod coordinate;

pub use complex::ComplexNumber;
pub use coordinate::Coordinate;
