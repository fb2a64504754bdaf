mod vector;
mod aabb;
mod sphere;
mod segment;

pub use vector::Vector2;
pub use aabb::Aabb2;
pub use sphere::BoundingSphere;
pub use segment::Segment2;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
