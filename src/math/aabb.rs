use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// 2D axis-aligned box, stored as a center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb2 {
    /// Center of the box
    pub center: Vector2,

    /// Half the size of the box along each axis
    pub half_extents: Vector2,
}

impl Aabb2 {
    /// Creates a box centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector2, half_extents: Vector2) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Checks if this box contains a point. Points on an edge count as inside.
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extents.x
            && (point.y - self.center.y).abs() <= self.half_extents.y
    }

    /// Radius of the smallest circle around the center that encloses the box
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.half_extents.length()
    }
}
