//! # Race configuration.
//!
//! [`RaceConfig`] centralizes the knobs a [`Race`](crate::Race) is built
//! with: event bus capacity and the step-delay policy shared by every
//! runner entered through the race.
//!
//! ## Field semantics
//! - `bus_capacity`: event bus ring buffer size (min 1; clamped by the Bus)
//! - `pace`: per-step delay policy (`Pace::default()` = up to 100ms random)

use crate::runners::Pace;

/// Configuration for a race.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use dograce::{Pace, RaceConfig};
///
/// let mut cfg = RaceConfig::default();
/// cfg.bus_capacity = 256;
/// cfg.pace = Pace::new(Duration::from_millis(50));
///
/// assert_eq!(cfg.pace.max_step_delay(), Duration::from_millis(50));
/// ```
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events
    /// skip older items.
    pub bus_capacity: usize,

    /// Step-delay policy applied to every runner entered into the race.
    pub pace: Pace,
}

impl Default for RaceConfig {
    /// Provides a default configuration:
    /// - `bus_capacity = 1024`
    /// - `pace` = random delay up to 100ms per step
    fn default() -> Self {
        Self {
            bus_capacity: 1024,
            pace: Pace::default(),
        }
    }
}
