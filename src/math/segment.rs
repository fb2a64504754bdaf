use crate::math::{clamp, Vector2};

/// A line segment between two points, used to describe the path a body's
/// center traced during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    /// Where the segment starts (the center at the start of the step)
    pub start: Vector2,

    /// Where the segment ends (the center after the step)
    pub end: Vector2,
}

impl Segment2 {
    /// Creates a new segment
    #[inline]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Returns the segment's direction vector (end - start)
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns true if both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction().length_squared() == 0.0
    }

    /// Returns the point on the segment closest to `point`.
    ///
    /// A degenerate segment collapses to its start point.
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        if self.is_degenerate() {
            return self.start;
        }

        let ab = self.direction();
        let t = clamp((point - self.start).dot(&ab) / ab.length_squared(), 0.0, 1.0);
        self.start + ab * t
    }

    /// Squared distance from `point` to the closest point on the segment
    #[inline]
    pub fn distance_squared_to_point(&self, point: Vector2) -> f32 {
        self.closest_point(point).distance_squared(&point)
    }

    /// Checks whether the segment passes within `radius` of `center`
    /// (boundary contact counts as an intersection).
    ///
    /// This is the swept-sphere test: a sphere of radius `r1` moving along the
    /// segment touches a resting sphere of radius `r2` iff the segment comes
    /// within `r1 + r2` of the resting center.
    #[inline]
    pub fn intersects_sphere(&self, center: Vector2, radius: f32) -> bool {
        self.distance_squared_to_point(center) <= radius * radius
    }
}
