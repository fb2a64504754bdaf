use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Circle enclosing a body, queried from the body every step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BoundingSphere {
    /// Center of the sphere in world space
    pub center: Vector2,

    /// Radius of the sphere, never negative
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere. Negative radii are clamped to zero.
    #[inline]
    pub fn new(center: Vector2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Checks if a point lies inside or on the sphere
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.center.distance_squared(&point) <= self.radius * self.radius
    }
}
