//! Closed shape model with per-variant area.
//!
//! Purpose
//! - Provide a sealed set of planar shapes as one enum so that every
//!   consumer matching on it is forced to handle all variants. Adding a
//!   variant is a visible, compile-time change everywhere it matters.
//!
//! Why this design
//! - `area` uses an exhaustive `match` with no default arm; the compiler,
//!   not a runtime check, enforces the closed world.
//! - Dimensions are validated once at construction. A constructed `Shape`
//!   is immutable (`Copy`) and `area` is total over it.
//!
//! Code cross-refs: `rand::draw_shape`, `container::OrderedContainer`

use std::fmt;

/// Errors surfaced by shape construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeError {
    /// A dimension is negative. Zero is allowed (degenerate, area 0).
    NegativeDimension { name: &'static str, value: f64 },
    /// A dimension is NaN or infinite.
    NonFiniteDimension { name: &'static str, value: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NegativeDimension { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            ShapeError::NonFiniteDimension { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// A planar shape. The variant set is closed: matches stay exhaustive.
///
/// Invariants:
/// - Values built via [`circle`](Shape::circle) / [`rectangle`](Shape::rectangle)
///   have finite, non-negative dimensions. Literal construction bypasses
///   that check; prefer the constructors outside of tests.
/// - Values are immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    /// Circle of the given radius.
    ///
    /// Rejects NaN, infinite, and negative radii; nothing is clamped.
    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        check_dimension("radius", radius)?;
        Ok(Shape::Circle { radius })
    }

    /// Axis-aligned rectangle with the given side lengths.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Shape::Rectangle { width, height })
    }

    /// Area of the shape. Total and pure: finite for every constructed
    /// `Shape`, never fails.
    #[inline]
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }
}

#[inline]
fn check_dimension(name: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFiniteDimension { name, value });
    }
    if value < 0.0 {
        return Err(ShapeError::NegativeDimension { name, value });
    }
    Ok(())
}
