use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::interpreter::value::ComplexNumber;

/// A point on the plane.
///
/// The y axis doubles as the imaginary axis, so a complex value `a + bi` sits
/// at `(a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    /// Horizontal position, or the real part.
    pub x: f64,
    /// Vertical position, or the imaginary part.
    pub y: f64,
}

impl Coordinate {
    /// Builds a coordinate from a cartesian pair.
    #[must_use]
    pub const fn cartesian(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a coordinate from a complex number: real part to `x`, imaginary
    /// part to `y`.
    ///
    /// # Example
    /// ```
    /// use graph_gen::interpreter::value::{ComplexNumber, Coordinate};
    ///
    /// let c = Coordinate::imaginary(ComplexNumber::new(0.0, 2.0));
    /// assert_eq!(c, Coordinate::cartesian(0.0, 2.0));
    /// ```
    #[must_use]
    pub const fn imaginary(value: ComplexNumber) -> Self {
        Self { x: value.real,
               y: value.imaginary, }
    }

    /// The coordinate as an `(x, y)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.x) == OrderedFloat(other.x) && OrderedFloat(self.y) == OrderedFloat(other.y)
    }
}

impl Eq for Coordinate {}
