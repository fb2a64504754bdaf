use log::trace;
use crate::bodies::{track_rest, BodyFlags};
use crate::core::{Body, SleepConfig};
use crate::math::{Aabb2, BoundingSphere, Vector2};
use crate::picking::PickBox;

/// An axis-aligned rigid box that drifts with a constant velocity.
///
/// Boxes have no pointer-wake capability; a sleeping box wakes only when
/// something sweeps through it or it is woken explicitly.
#[derive(Debug, Clone)]
pub struct BoxBody {
    id: String,
    center: Vector2,
    half_extents: Vector2,
    velocity: Vector2,
    flags: BodyFlags,
    sleeping_time: f32,
    sleep_config: SleepConfig,
}

impl BoxBody {
    /// Creates an awake, motionless box
    pub fn new(id: impl Into<String>, center: Vector2, half_extents: Vector2) -> Self {
        Self {
            id: id.into(),
            center,
            half_extents: half_extents.abs(),
            velocity: Vector2::zero(),
            flags: BodyFlags::CAN_SLEEP,
            sleeping_time: 0.0,
            sleep_config: SleepConfig::default(),
        }
    }

    /// Creates a box that starts out asleep
    pub fn new_sleeping(id: impl Into<String>, center: Vector2, half_extents: Vector2) -> Self {
        let mut body = Self::new(id, center, half_extents);
        body.sleep();
        body
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the sleep behaviour
    pub fn with_sleep_config(mut self, config: SleepConfig) -> Self {
        self.sleep_config = config;
        self
    }

    /// Returns the center
    pub fn get_center(&self) -> Vector2 {
        self.center
    }

    /// Returns the half extents
    pub fn get_half_extents(&self) -> Vector2 {
        self.half_extents
    }

    /// Returns the velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the velocity, waking the box
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
        self.wake();
    }

    /// Returns the box's bounds in world space
    pub fn get_aabb(&self) -> Aabb2 {
        Aabb2::from_center_half_extents(self.center, self.half_extents)
    }

    /// Returns the read-only projection used for picking
    pub fn get_pick_box(&self) -> PickBox {
        PickBox::new(self.id.clone(), self.center, self.half_extents)
    }
}

impl Body for BoxBody {
    fn id(&self) -> &str {
        &self.id
    }

    fn get_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.get_aabb().bounding_radius())
    }

    fn update(&mut self, dt: f32) {
        if self.is_sleeping() {
            return;
        }

        self.center += self.velocity * dt;

        let speed = self.velocity.length();
        if track_rest(&mut self.flags, &mut self.sleeping_time, speed, dt, &self.sleep_config) {
            self.velocity = Vector2::zero();
            trace!("box '{}' fell asleep at {}", self.id, self.center);
        }
    }

    fn is_sleeping(&self) -> bool {
        self.flags.contains(BodyFlags::SLEEPING)
    }

    fn wake(&mut self) {
        if self.is_sleeping() {
            self.flags.remove(BodyFlags::SLEEPING);
            self.sleeping_time = 0.0;
        }
    }

    fn sleep(&mut self) {
        self.flags.insert(BodyFlags::SLEEPING);
        self.velocity = Vector2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounding_sphere_encloses_corners() {
        let body = BoxBody::new("b", Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        let sphere = body.get_bounding_sphere();

        assert_eq!(sphere.center, Vector2::new(1.0, 2.0));
        assert_relative_eq!(sphere.radius, 5.0);
        let aabb = body.get_aabb();
        assert!(sphere.contains_point(aabb.center + aabb.half_extents));
        assert!(sphere.contains_point(aabb.center - aabb.half_extents));
    }

    #[test]
    fn test_box_has_no_pointer_capability() {
        let mut body = BoxBody::new_sleeping("b", Vector2::zero(), Vector2::new(1.0, 1.0));
        assert!(body.as_pointer_wake().is_none());
    }

    #[test]
    fn test_pick_box_mirrors_body() {
        let body = BoxBody::new("crate", Vector2::new(0.5, -0.5), Vector2::new(0.25, 0.75));
        let pick = body.get_pick_box();

        assert_eq!(pick.id, "crate");
        assert_eq!(pick.center, body.get_center());
        assert_eq!(pick.half_extents, body.get_half_extents());
    }

    #[test]
    fn test_sleeping_box_does_not_move() {
        let mut body = BoxBody::new_sleeping("b", Vector2::zero(), Vector2::new(1.0, 1.0));
        body.update(1.0);
        assert_eq!(body.get_center(), Vector2::zero());

        body.set_velocity(Vector2::new(1.0, 0.0));
        assert!(!body.is_sleeping());
        body.update(1.0);
        assert_eq!(body.get_center(), Vector2::new(1.0, 0.0));
    }
}
