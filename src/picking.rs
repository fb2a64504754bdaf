//! Point picking against axis-aligned boxes.
//!
//! Picking works on a read-only projection of the scene assembled by the
//! caller; it is independent of the [`Body`](crate::core::Body) contract used
//! for scheduling.

use crate::math::{Aabb2, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The minimal view of a body needed for picking
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PickBox {
    /// Id of the body this box stands for
    pub id: String,

    /// Center of the box
    pub center: Vector2,

    /// Half the size of the box along each axis
    pub half_extents: Vector2,
}

impl PickBox {
    /// Creates a new pick box
    pub fn new(id: impl Into<String>, center: Vector2, half_extents: Vector2) -> Self {
        Self {
            id: id.into(),
            center,
            half_extents,
        }
    }

    /// Checks if the box contains `point`, edges included
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        Aabb2 {
            center: self.center,
            half_extents: self.half_extents,
        }
        .contains_point(point)
    }
}

/// Returns the first box, in the given order, that contains `point`.
///
/// Overlapping boxes resolve to whichever comes first, so callers pass boxes
/// topmost first.
pub fn pick_body_at_point<'a, I>(point: Vector2, bodies: I) -> Option<&'a PickBox>
where
    I: IntoIterator<Item = &'a PickBox>,
{
    bodies.into_iter().find(|body| body.contains_point(point))
}
