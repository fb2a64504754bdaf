use log::trace;
use crate::bodies::{track_rest, BodyFlags};
use crate::core::{Body, PointerWake, SleepConfig};
use crate::math::{BoundingSphere, Vector2};

/// A round point mass, such as a single cloth particle.
///
/// Integrates its own velocity with semi-implicit Euler, falls asleep after
/// resting for long enough, and can be woken by a pointer landing within its
/// radius.
#[derive(Debug, Clone)]
pub struct ParticleBody {
    id: String,

    /// Position of the particle in world space
    position: Vector2,

    velocity: Vector2,

    /// Constant acceleration applied while awake
    gravity: Vector2,

    /// Fraction of velocity removed per second
    linear_damping: f32,

    radius: f32,

    flags: BodyFlags,

    /// How long the particle has been resting
    sleeping_time: f32,

    sleep_config: SleepConfig,
}

impl ParticleBody {
    /// Creates an awake, motionless particle
    pub fn new(id: impl Into<String>, position: Vector2, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Vector2::zero(),
            gravity: Vector2::zero(),
            linear_damping: 0.0,
            radius: radius.max(0.0),
            flags: BodyFlags::CAN_SLEEP | BodyFlags::POINTER_WAKE,
            sleeping_time: 0.0,
            sleep_config: SleepConfig::default(),
        }
    }

    /// Creates a particle that starts out asleep
    pub fn new_sleeping(id: impl Into<String>, position: Vector2, radius: f32) -> Self {
        let mut particle = Self::new(id, position, radius);
        particle.sleep();
        particle
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the constant acceleration
    pub fn with_gravity(mut self, gravity: Vector2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the linear damping
    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping.max(0.0);
        self
    }

    /// Sets the sleep behaviour
    pub fn with_sleep_config(mut self, config: SleepConfig) -> Self {
        self.sleep_config = config;
        self
    }

    /// Enables or disables waking by pointer
    pub fn with_pointer_wake(mut self, enabled: bool) -> Self {
        self.flags.set(BodyFlags::POINTER_WAKE, enabled);
        self
    }

    /// Returns the position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Moves the particle, waking it
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.wake();
    }

    /// Returns the velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the velocity, waking the particle
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
        self.wake();
    }

    /// Returns the radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the flags
    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns how long the particle has been resting
    pub fn get_sleeping_time(&self) -> f32 {
        self.sleeping_time
    }
}

impl Body for ParticleBody {
    fn id(&self) -> &str {
        &self.id
    }

    fn get_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.radius)
    }

    fn update(&mut self, dt: f32) {
        if self.is_sleeping() {
            return;
        }

        self.velocity += self.gravity * dt;
        if self.linear_damping > 0.0 {
            self.velocity *= 1.0 / (1.0 + dt * self.linear_damping);
        }
        self.position += self.velocity * dt;

        let speed = self.velocity.length();
        if track_rest(&mut self.flags, &mut self.sleeping_time, speed, dt, &self.sleep_config) {
            self.velocity = Vector2::zero();
            trace!("particle '{}' fell asleep at {}", self.id, self.position);
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

    fn as_pointer_wake(&mut self) -> Option<&mut dyn PointerWake> {
        if self.flags.contains(BodyFlags::POINTER_WAKE) {
            Some(self)
        } else {
            None
        }
    }
}

impl PointerWake for ParticleBody {
    fn wake_if_point_inside(&mut self, point: Vector2) -> bool {
        if !self.get_bounding_sphere().contains_point(point) {
            return false;
        }

        let was_sleeping = self.is_sleeping();
        self.wake();
        was_sleeping
    }
}
