use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for a [`World`](crate::core::World)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// The fixed time step used by `World::advance`
    pub time_step: f32,

    /// The maximum number of fixed steps a single `advance` call may run
    pub max_substeps: u32,

    /// Whether to run the pairwise swept-wake pass after each step
    pub sweep_wake: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            max_substeps: 10,
            sweep_wake: true,
        }
    }
}

impl WorldConfig {
    /// Checks that the configuration can drive a fixed-step loop
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "time_step must be positive and finite, got {}",
                self.time_step
            )));
        }

        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_substeps must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Sleep behaviour for the reference bodies in [`crate::bodies`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SleepConfig {
    /// Whether bodies may fall asleep at all
    pub allow_sleeping: bool,

    /// The speed below which a body counts as resting
    pub linear_sleep_threshold: f32,

    /// How long a body must rest before it falls asleep, in seconds
    pub sleep_time_threshold: f32,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            allow_sleeping: true,
            linear_sleep_threshold: 0.01,
            sleep_time_threshold: 0.5,
        }
    }
}
