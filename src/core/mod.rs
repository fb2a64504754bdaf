mod body;
pub mod config;
pub mod storage;
mod scheduler;
pub mod world;

pub use self::body::{Body, PointerWake};
pub use self::config::{SleepConfig, WorldConfig};
pub use self::storage::BodyStorage;
pub use self::scheduler::Scheduler;
pub use self::world::{sweep_intersects, World};
