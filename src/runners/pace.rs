//! # Per-step pacing.
//!
//! [`Pace`] picks how long a runner sleeps after each step, modeling
//! variable speed. The randomness comes from a [`DelaySource`]: a
//! thread-safe provider returning an integer in `[0, bound)`. The default
//! source is [`RandomDelay`] over the thread-local generator; tests inject
//! deterministic sources instead.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

/// Provider of bounded non-negative delays.
///
/// `next(bound)` must return a value in `[0, bound)` — never `bound`
/// itself — and must be safe to call from many tasks concurrently with no
/// shared mutable state races. `bound == 0` returns 0.
pub trait DelaySource: Send + Sync + 'static {
    /// Returns a value in `[0, bound)` (0 when `bound` is 0).
    fn next(&self, bound: u64) -> u64;
}

/// Default delay source backed by the thread-local random generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDelay;

impl DelaySource for RandomDelay {
    fn next(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::rng().random_range(0..bound)
    }
}

/// Step-delay policy: a maximum delay plus the source that draws from it.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use dograce::Pace;
///
/// let pace = Pace::new(Duration::from_millis(100));
/// assert!(pace.next_delay() < Duration::from_millis(100));
///
/// let still = Pace::new(Duration::ZERO);
/// assert_eq!(still.next_delay(), Duration::ZERO);
/// ```
#[derive(Clone)]
pub struct Pace {
    /// Exclusive upper bound on the per-step delay.
    max_step_delay: Duration,
    source: Arc<dyn DelaySource>,
}

impl Pace {
    /// Creates a pace with the given maximum step delay and the default
    /// random source.
    pub fn new(max_step_delay: Duration) -> Self {
        Self {
            max_step_delay,
            source: Arc::new(RandomDelay),
        }
    }

    /// Replaces the delay source (deterministic pacing for tests, seeded
    /// generators, etc).
    pub fn with_source(mut self, source: Arc<dyn DelaySource>) -> Self {
        self.source = source;
        self
    }

    /// Exclusive upper bound on the per-step delay.
    pub fn max_step_delay(&self) -> Duration {
        self.max_step_delay
    }

    /// Draws the next step delay, strictly below the configured maximum.
    pub fn next_delay(&self) -> Duration {
        let bound = self.max_step_delay.as_millis().min(u64::MAX as u128) as u64;
        Duration::from_millis(self.source.next(bound))
    }
}

impl Default for Pace {
    /// Maximum step delay of 100ms with the default random source.
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl fmt::Debug for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pace")
            .field("max_step_delay", &self.max_step_delay)
            .finish_non_exhaustive()
    }
}
