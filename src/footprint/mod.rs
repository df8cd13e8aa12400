//! Footprint geometry model.
//!
//! A [`Footprint`] holds everything that ends up in the generated document:
//! the silkscreen outline, the pin-1 marker and the pads. Coordinates are in
//! millimetres with the origin at the package centre and Y growing downwards,
//! as in KiCad.
//!
//! The only package family is the dual-row layout in [`dual_row`].

pub mod dual_row;

use serde::Serialize;

/// Silkscreen stroke width for the outline and marker (mm).
pub const SILKSCREEN_WIDTH: f64 = 0.12954;

/// A complete footprint ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Footprint {
    /// Module name.
    pub name: String,

    /// Body outline: bottom, right, top, left edges.
    pub outline: [Line; 4],

    /// Pin-1 orientation marker.
    pub marker: Circle,

    /// Pads in emission order.
    pub pads: Vec<Pad>,
}

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A silkscreen line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }
}

/// A silkscreen circle, stored as KiCad does: centre plus a point on the
/// circumference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    /// Centre point.
    pub center: Point,
    /// Point on the circumference.
    pub end: Point,
}

impl Circle {
    /// Creates a circle whose end point sits `radius` past the centre along Y.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            end: Point::new(center.x, center.y + radius),
        }
    }

    #[cfg(test)]
    pub(crate) fn radius(&self) -> f64 {
        (self.end.x - self.center.x).hypot(self.end.y - self.center.y)
    }
}

/// A rectangular SMD pad on F.Cu, F.Paste and F.Mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pad {
    /// Pin number.
    pub number: u32,
    /// Pad centre.
    pub at: Point,
    /// Size along X (mm).
    pub width: f64,
    /// Size along Y (mm).
    pub height: f64,
}

impl Pad {
    /// Creates a new rectangular pad.
    #[must_use]
    pub const fn rectangular(number: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            number,
            at: Point::new(x, y),
            width,
            height,
        }
    }
}
