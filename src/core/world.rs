use std::collections::HashMap;
use log::{debug, trace, warn};
use crate::core::{Body, BodyStorage, Scheduler, WorldConfig};
use crate::error::PhysicsError;
use crate::math::{BoundingSphere, Segment2, Vector2};
use crate::Result;

/// Manages body lifecycles on top of a [`Scheduler`] and wakes sleeping bodies
/// that a moving body swept through during a step.
///
/// The scheduler only ever looks at one body at a time, so it cannot notice a
/// fast body passing clean through a sleeping one between two steps. The world
/// remembers where every body's center was at the start of the last step and,
/// once the step has run, tests each mover's path against every sleeping body.
pub struct World {
    /// The registry that advances awake bodies
    scheduler: Scheduler,

    /// Bounding-sphere centers captured at the start of the most recent step
    previous_centers: HashMap<String, Vector2>,

    /// Configuration for the world
    config: WorldConfig,

    /// Time not yet consumed by fixed steps in `advance`
    accumulator: f32,

    /// The total elapsed simulation time
    time: f32,

    /// Number of completed steps
    step_count: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a new world with default settings
    pub fn new() -> Self {
        Self::from_parts(WorldConfig::default())
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: WorldConfig) -> Self {
        Self {
            scheduler: Scheduler::new(),
            previous_centers: HashMap::new(),
            config,
            accumulator: 0.0,
            time: 0.0,
            step_count: 0,
        }
    }

    /// Returns a reference to the configuration
    pub fn get_config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the number of steps run since creation or the last `clear`
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Registers a body.
    ///
    /// Fails with [`PhysicsError::DuplicateId`] if a body with the same id is
    /// already registered; in that case the registered body is left untouched
    /// and `body` is not added.
    pub fn add_body(&mut self, body: Box<dyn Body>) -> Result<()> {
        let id = body.id().to_owned();
        if self.scheduler.contains(&id) {
            warn!("rejected body with duplicate id '{}'", id);
            return Err(PhysicsError::DuplicateId(id));
        }

        let center = body.get_bounding_sphere().center;
        self.scheduler.add_body(body);
        debug!("registered body '{}' at {}", id, center);
        self.previous_centers.insert(id, center);

        Ok(())
    }

    /// Deregisters a body and forgets its snapshot.
    ///
    /// The body is handed back to the caller; `None` if the id is unknown.
    pub fn remove_body(&mut self, id: &str) -> Option<Box<dyn Body>> {
        self.previous_centers.remove(id);
        let body = self.scheduler.remove_body(id);
        if body.is_some() {
            debug!("removed body '{}'", id);
        }
        body
    }

    /// Wakes a body by id. Unknown ids are ignored.
    pub fn wake_body(&mut self, id: &str) {
        self.scheduler.wake_body(id);
    }

    /// Forwards a pointer position to the scheduler.
    ///
    /// Returns how many sleeping bodies woke up.
    pub fn notify_pointer(&mut self, point: Vector2) -> usize {
        self.scheduler.notify_pointer(point)
    }

    /// Removes every body and snapshot and resets the clock
    pub fn clear(&mut self) {
        self.scheduler.clear();
        self.previous_centers.clear();
        self.accumulator = 0.0;
        self.time = 0.0;
        self.step_count = 0;
    }

    /// Runs one step of `dt` seconds.
    ///
    /// Snapshots every body's center, updates the awake bodies, then wakes
    /// any sleeping body that a mover's path came within reach of.
    pub fn step(&mut self, dt: f32) {
        for body in self.scheduler.storage().iter() {
            let center = body.get_bounding_sphere().center;
            match self.previous_centers.get_mut(body.id()) {
                Some(previous) => *previous = center,
                None => {
                    self.previous_centers.insert(body.id().to_owned(), center);
                }
            }
        }

        self.scheduler.step(dt);

        if self.config.sweep_wake {
            let woken = self.wake_swept_bodies();
            if woken > 0 {
                trace!("sweep pass woke {} bodies", woken);
            }
        }

        self.time += dt;
        self.step_count += 1;
    }

    /// Feeds `elapsed` seconds into the fixed-step accumulator and runs as many
    /// `time_step` steps as it holds, up to `max_substeps`.
    ///
    /// Whole steps beyond the cap are dropped. Returns the number of steps run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let time_step = self.config.time_step;
        let mut steps = 0;
        while self.accumulator >= time_step && steps < self.config.max_substeps {
            self.step(time_step);
            self.accumulator -= time_step;
            steps += 1;
        }

        if self.accumulator >= time_step {
            warn!(
                "advance hit max_substeps ({}), dropping {:.4}s of simulation time",
                self.config.max_substeps,
                self.accumulator - self.accumulator % time_step
            );
            self.accumulator %= time_step;
        }

        steps
    }

    /// Returns the snapshot of a body's center from the start of the last step
    pub fn get_previous_center(&self, id: &str) -> Option<Vector2> {
        self.previous_centers.get(id).copied()
    }

    /// Gets a reference to a body by id
    pub fn get_body(&self, id: &str) -> Option<&dyn Body> {
        self.scheduler.get_body(id)
    }

    /// Gets a mutable reference to a body by id
    pub fn get_body_mut(&mut self, id: &str) -> Option<&mut (dyn Body + 'static)> {
        self.scheduler.get_body_mut(id)
    }

    /// Returns whether a body with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.scheduler.contains(id)
    }

    /// Returns the number of registered bodies
    pub fn body_count(&self) -> usize {
        self.scheduler.body_count()
    }

    /// Returns whether no bodies are registered
    pub fn is_empty(&self) -> bool {
        self.scheduler.is_empty()
    }

    /// Returns the number of registered bodies that are sleeping
    pub fn sleeping_count(&self) -> usize {
        self.scheduler.sleeping_count()
    }

    /// Returns the ids of all registered bodies in registration order
    pub fn body_ids(&self) -> Vec<String> {
        self.scheduler.body_ids()
    }

    /// Tests every ordered pair of distinct bodies and wakes swept targets.
    /// Returns the number of wakes issued.
    fn wake_swept_bodies(&mut self) -> usize {
        let storage = self.scheduler.storage_mut();
        let count = storage.len();
        if count < 2 {
            return 0;
        }

        let swept: Vec<SweptBody> = storage
            .iter()
            .map(|body| SweptBody {
                previous: self.previous_centers.get(body.id()).copied(),
                sphere: body.get_bounding_sphere(),
            })
            .collect();

        let mut woken = 0;
        for a in 0..count {
            for b in (a + 1)..count {
                if check_sweep(storage, &swept, a, b) {
                    woken += 1;
                }
                if check_sweep(storage, &swept, b, a) {
                    woken += 1;
                }
            }
        }
        woken
    }
}

/// Per-body data gathered once after the scheduler step
struct SweptBody {
    previous: Option<Vector2>,
    sphere: BoundingSphere,
}

/// Wakes `target` if it is asleep and `mover`'s path this step came within
/// reach of it. Returns true if `wake` was called.
fn check_sweep(storage: &mut BodyStorage, swept: &[SweptBody], mover: usize, target: usize) -> bool {
    let Some(target_body) = storage.get_index_mut(target) else {
        return false;
    };
    if !target_body.is_sleeping() {
        return false;
    }

    let mover_data = &swept[mover];
    let Some(previous) = mover_data.previous else {
        return false;
    };

    if sweep_intersects(previous, &mover_data.sphere, &swept[target].sphere) {
        target_body.wake();
        debug!("body '{}' woken by a swept body", target_body.id());
        return true;
    }

    false
}

/// Checks whether a sphere that moved from `previous` to `mover.center` passed
/// within touching distance of `target`.
///
/// A mover that did not move degenerates to a plain overlap test at `previous`.
pub fn sweep_intersects(previous: Vector2, mover: &BoundingSphere, target: &BoundingSphere) -> bool {
    let combined = mover.radius + target.radius;
    Segment2::new(previous, mover.center).intersects_sphere(target.center, combined)
}
