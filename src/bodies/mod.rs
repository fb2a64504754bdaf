mod particle;
mod box_body;

pub use self::particle::ParticleBody;
pub use self::box_body::BoxBody;
pub use self::body_flags::BodyFlags;

use crate::core::SleepConfig;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of the reference bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct BodyFlags: u32 {
            /// Body can go to sleep when inactive
            const CAN_SLEEP = 0x01;

            /// Body is currently sleeping
            const SLEEPING = 0x02;

            /// Body wakes when a pointer lands inside it
            const POINTER_WAKE = 0x04;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            Self::CAN_SLEEP
        }
    }
}

/// Accumulates rest time for a body moving at `speed` and puts it to sleep once
/// it has rested long enough. Returns true if the body fell asleep this call.
pub(crate) fn track_rest(
    flags: &mut BodyFlags,
    sleeping_time: &mut f32,
    speed: f32,
    dt: f32,
    config: &SleepConfig,
) -> bool {
    if !config.allow_sleeping || !flags.contains(BodyFlags::CAN_SLEEP) {
        *sleeping_time = 0.0;
        return false;
    }

    if speed > config.linear_sleep_threshold {
        *sleeping_time = 0.0;
        return false;
    }

    *sleeping_time += dt;
    if *sleeping_time >= config.sleep_time_threshold && !flags.contains(BodyFlags::SLEEPING) {
        flags.insert(BodyFlags::SLEEPING);
        return true;
    }

    false
}
