use log::{debug, trace};
use crate::core::{Body, BodyStorage};
use crate::math::Vector2;

/// Advances awake bodies and routes pointer notifications to sleeping ones.
///
/// The scheduler is a best-effort registry: it does not validate ids, and every
/// operation on an unknown id is a no-op. It never changes a body's sleep state
/// on its own; only the bodies (or explicit wake calls) do.
#[derive(Default)]
pub struct Scheduler {
    bodies: BodyStorage,
}

impl Scheduler {
    /// Creates an empty scheduler
    pub fn new() -> Self {
        Self {
            bodies: BodyStorage::new(),
        }
    }

    /// Registers a body under its id.
    ///
    /// A body already registered under the same id is replaced and returned.
    pub fn add_body(&mut self, body: Box<dyn Body>) -> Option<Box<dyn Body>> {
        self.bodies.insert(body)
    }

    /// Deregisters a body, handing it back to the caller
    pub fn remove_body(&mut self, id: &str) -> Option<Box<dyn Body>> {
        self.bodies.remove(id)
    }

    /// Wakes a body by id
    pub fn wake_body(&mut self, id: &str) {
        if let Some(body) = self.bodies.get_mut(id) {
            body.wake();
        }
    }

    /// Updates every awake body by `dt`, in registration order
    pub fn step(&mut self, dt: f32) {
        let mut updated = 0usize;
        for body in self.bodies.iter_mut() {
            if body.is_sleeping() {
                continue;
            }

            body.update(dt);
            updated += 1;
        }

        trace!("scheduler step dt={} updated={}/{}", dt, updated, self.bodies.len());
    }

    /// Offers `point` to every sleeping body that can be woken by a pointer.
    ///
    /// Returns how many bodies reported waking up.
    pub fn notify_pointer(&mut self, point: Vector2) -> usize {
        let mut woken = 0;
        for body in self.bodies.iter_mut() {
            if !body.is_sleeping() {
                continue;
            }

            let woke = body
                .as_pointer_wake()
                .map_or(false, |target| target.wake_if_point_inside(point));

            if woke {
                debug!("body '{}' woken by pointer at {}", body.id(), point);
                woken += 1;
            }
        }
        woken
    }

    /// Removes every body
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Gets a reference to a body by id
    pub fn get_body(&self, id: &str) -> Option<&dyn Body> {
        self.bodies.get(id)
    }

    /// Gets a mutable reference to a body by id
    pub fn get_body_mut(&mut self, id: &str) -> Option<&mut (dyn Body + 'static)> {
        self.bodies.get_mut(id)
    }

    /// Returns whether a body with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains(id)
    }

    /// Returns the number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns whether no bodies are registered
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the number of registered bodies that are sleeping
    pub fn sleeping_count(&self) -> usize {
        self.bodies.iter().filter(|body| body.is_sleeping()).count()
    }

    /// Returns the ids of all registered bodies in iteration order
    pub fn body_ids(&self) -> Vec<String> {
        self.bodies.ids()
    }

    pub(crate) fn storage(&self) -> &BodyStorage {
        &self.bodies
    }

    pub(crate) fn storage_mut(&mut self) -> &mut BodyStorage {
        &mut self.bodies
    }
}
