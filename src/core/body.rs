use crate::math::{BoundingSphere, Vector2};

/// Optional capability for bodies that can be woken by a pointer.
///
/// Each body decides for itself what "inside" means; the scheduler performs
/// no geometry when routing pointer notifications.
pub trait PointerWake {
    /// Wakes the body if `point` lies within its activation bounds.
    /// Returns true if the body woke up.
    fn wake_if_point_inside(&mut self, point: Vector2) -> bool;
}

/// The contract every simulated object satisfies to be scheduled.
///
/// Implementations own their simulation state and their sleep flag. The
/// scheduler and world only ever call these methods; they never inspect what
/// `update` does or cache the bounding sphere across steps.
pub trait Body {
    /// Identifier, unique within a world. Must not change while registered.
    fn id(&self) -> &str;

    /// Current bounding sphere of the body
    fn get_bounding_sphere(&self) -> BoundingSphere;

    /// Advances the body's own simulation by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Returns whether the body is currently sleeping
    fn is_sleeping(&self) -> bool;

    /// Marks the body as awake
    fn wake(&mut self);

    /// Marks the body as sleeping
    fn sleep(&mut self);

    /// Returns the pointer-wake capability if this body has one
    fn as_pointer_wake(&mut self) -> Option<&mut dyn PointerWake> {
        None
    }
}
