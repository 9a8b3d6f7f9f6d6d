//! Geometric primitives for chord diagram layout.
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The nut sits at the top of a chord diagram, so higher fret numbers have
//! larger Y values.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use chordbox_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// assert_eq!(origin.x(), 10.0);
/// assert_eq!(origin.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point moved by `dx` horizontally and `dy` vertically.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordbox_core::geometry::Point;
    /// let marker = Point::new(30.0, 40.0).offset(-4.0, 5.0);
    /// assert_eq!(marker, Point::new(26.0, 45.0));
    /// ```
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

}
