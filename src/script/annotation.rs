use crate::{interpreter::value::Coordinate, script::color::Color};

/// A dot drawn at a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub at:    Coordinate,
    /// `None` leaves the choice to the renderer.
    pub color: Option<Color>,
}

/// A segment between two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from:  Coordinate,
    pub to:    Coordinate,
    pub color: Option<Color>,
}

/// A circle centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub color:  Option<Color>,
}

/// Text anchored at a coordinate. Labels always carry a color; black when the
/// script gives none.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub at:    Coordinate,
    pub text:  String,
    pub color: Color,
}
