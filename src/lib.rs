pub mod math;
pub mod core;
pub mod bodies;
pub mod picking;

/// Re-export common types for easier usage
pub use crate::core::{Body, PointerWake, Scheduler, World, WorldConfig, SleepConfig};
pub use crate::bodies::{BoxBody, ParticleBody, BodyFlags};
pub use crate::picking::{pick_body_at_point, PickBox};
pub use crate::math::{BoundingSphere, Vector2};

/// Error types for the scheduler
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum PhysicsError {
        #[error("A body with id '{0}' is already registered")]
        DuplicateId(String),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
