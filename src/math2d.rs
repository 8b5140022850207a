//! 2D Math Utilities
//!
//! A small value-type vector used for positions, directions and offsets.
//! Screen space: x grows to the right, y grows downward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Unit vector pointing towards the top of the screen
pub const UP: Vec2 = Vec2::new(0.0, -1.0);
/// Unit vector pointing towards the bottom of the screen
pub const DOWN: Vec2 = Vec2::new(0.0, 1.0);
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector with the same direction.
    /// The zero vector has no direction and normalises to itself.
    #[inline]
    pub fn normalise(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Scale to `magnitude` while keeping the direction
    #[inline]
    pub fn set_magnitude(&self, magnitude: f32) -> Self {
        self.normalise() * magnitude
    }

    /// Rotate by `theta` radians, preserving the magnitude.
    ///
    /// Clockwise with respect to y-up axes, so on screen (y down) `UP.rotate(PI / 2)`
    /// ends up pointing `LEFT`.
    #[inline]
    pub fn rotate(&self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: self.x * cos + self.y * sin,
            y: -self.x * sin + self.y * cos,
        }
    }

    /// Round both components to the nearest whole number
    #[inline]
    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (the determinant of the two vectors)
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).magnitude()
    }

    /// Signed angle from `other` to `self` as a raw `atan2` difference.
    /// Not wrapped: the result lies in (-2π, 2π).
    #[inline]
    pub fn angle_between(&self, other: &Self) -> f32 {
        self.y.atan2(self.x) - other.y.atan2(other.x)
    }

    /// Approximate equality check for floating point comparison
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(&b)
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:.2}, {:.2}}}", self.x, self.y)
    }
}
