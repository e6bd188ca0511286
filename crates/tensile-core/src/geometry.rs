//! Geometric primitives for the particle simulation.
//!
//! This module provides the two geometric types the layout engine is built on.
//!
//! # Overview
//!
//! - [`Vector`] - A 2D quantity: a position, a velocity or a force
//! - [`Rect`] - A rectangle described by its four sides, used as the
//!   optional simulation boundary
//!
//! # Coordinate System
//!
//! Tensile uses the mathematical convention, with the Y axis pointing up:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     └──────────► +X
//!   (0,0)
//! ```
//!
//! A [`Rect`] is therefore valid when `top > bottom` and `right > left`.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::GeometryError;

/// A 2D vector with `f64` components.
///
/// Vectors are used for particle positions, velocities and accumulated forces.
///
/// # Examples
///
/// ```
/// # use tensile_core::geometry::Vector;
/// let a = Vector::new(3.0, 4.0);
/// let b = Vector::new(1.0, 1.0);
///
/// assert_eq!(a.hypot(), 5.0);
/// assert_eq!(a - b, Vector::new(2.0, 3.0));
/// assert_eq!(b.scale(2.0), Vector::new(2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Creates a new vector with the specified components
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x component
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y component
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new vector with the specified x component
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new vector with the specified y component
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Checks if both components are exactly zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both components are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculates the Euclidean length of the vector
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared Euclidean length, avoids the square root
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Multiplies both components by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Vector) -> f64 {
        (self - other).hypot()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// A rectangle described by its four sides.
///
/// The sides are listed clockwise starting from the top, the same order used
/// when a boundary is configured from a list of numbers. See
/// [`Rect::from_clockwise`] for how shorter lists are expanded.
///
/// A rectangle is only usable for clamping when it is [valid](Rect::is_valid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Rect {
    /// Creates a rectangle from its four sides.
    ///
    /// No validation is performed; use [`Rect::is_valid`] to check it.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Builds a rectangle from one to four clockwise values.
    ///
    /// - `[top, right, bottom, left]` is used as given
    /// - `[top, right, bottom]` mirrors the right side: `left = -right`
    /// - `[vertical, horizontal]` gives `top = v`, `bottom = -v`,
    ///   `right = h`, `left = -h`
    /// - `[side]` gives a square centred on the origin
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBoundsArity`] for an empty slice or
    /// more than four values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tensile_core::geometry::Rect;
    /// let square = Rect::from_clockwise(&[10.0]).unwrap();
    /// assert_eq!(square, Rect::new(10.0, 10.0, -10.0, -10.0));
    ///
    /// let wide = Rect::from_clockwise(&[5.0, 20.0]).unwrap();
    /// assert_eq!(wide, Rect::new(5.0, 20.0, -5.0, -20.0));
    ///
    /// assert!(Rect::from_clockwise(&[]).is_err());
    /// ```
    pub fn from_clockwise(values: &[f64]) -> Result<Self, GeometryError> {
        match *values {
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            [top, right, bottom] => Ok(Self::new(top, right, bottom, -right)),
            [vertical, horizontal] => Ok(Self::new(vertical, horizontal, -vertical, -horizontal)),
            [side] => Ok(Self::new(side, side, -side, -side)),
            _ => Err(GeometryError::InvalidBoundsArity(values.len())),
        }
    }

    /// Returns the top side (largest y)
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Returns the right side (largest x)
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bottom side (smallest y)
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the left side (smallest x)
    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Whether the rectangle is non-degenerate: `top > bottom` and
    /// `right > left`. NaN sides are never valid.
    pub fn is_valid(&self) -> bool {
        self.top > self.bottom && self.right > self.left
    }

    /// Checks whether the point lies inside the rectangle, sides included.
    pub fn contains(&self, point: Vector) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    /// Clamps a point into the rectangle, one axis at a time.
    ///
    /// The upper side is applied first, then the lower one, so the result of
    /// clamping against an invalid rectangle is still well defined.
    pub fn clamp(&self, point: Vector) -> Vector {
        Vector::new(
            point.x.min(self.right).max(self.left),
            point.y.min(self.top).max(self.bottom),
        )
    }
}
