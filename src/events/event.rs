//! # Race events emitted by runners and the race controller.
//!
//! [`EventKind`] classifies events across two categories:
//! - **Runner lifecycle**: starting, step advanced, finished, canceled
//! - **Race control**: paused, resumed
//!
//! [`Event`] carries additional metadata: wall-clock timestamp, the runner
//! name, the step index, the assigned finish position, or an error message.
//!
//! ## Ordering
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore publication order when events are
//! observed out of order by a lagging subscriber.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of race events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A runner is entering its race loop.
    ///
    /// Sets: `runner`.
    RunnerStarting,

    /// A runner advanced one step along its track.
    ///
    /// Sets: `runner`, `step` (0-based index of the completed step).
    StepAdvanced,

    /// A runner completed its track and registered an arrival.
    ///
    /// Sets: `runner`, `position` (1-based finish rank).
    RunnerFinished,

    /// A runner was cancelled mid-race; no arrival was registered.
    ///
    /// Sets: `runner`, `error`.
    RunnerCanceled,

    /// The race controller paused the gate.
    RacePaused,

    /// The race controller resumed the gate.
    RaceResumed,
}

/// A race event with payload metadata.
///
/// # Example
/// ```
/// use dograce::{Event, EventKind};
///
/// let ev = Event::now(EventKind::RunnerFinished)
///     .with_runner("Rex")
///     .with_position(1);
///
/// assert_eq!(ev.kind, EventKind::RunnerFinished);
/// assert_eq!(ev.runner.as_deref(), Some("Rex"));
/// assert_eq!(ev.position, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Event {
    /// Event classification.
    pub kind: EventKind,
    /// Wall-clock timestamp at creation.
    pub at: SystemTime,
    /// Global monotonic sequence number.
    pub seq: u64,
    /// Runner name, when the event concerns one runner.
    pub runner: Option<String>,
    /// 0-based step index for [`EventKind::StepAdvanced`].
    pub step: Option<usize>,
    /// 1-based finish rank for [`EventKind::RunnerFinished`].
    pub position: Option<u32>,
    /// Error message for [`EventKind::RunnerCanceled`].
    pub error: Option<String>,
}

impl Event {
    /// Creates an event stamped with the current time and the next sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            kind,
            at: SystemTime::now(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            runner: None,
            step: None,
            position: None,
            error: None,
        }
    }

    /// Attaches a runner name.
    pub fn with_runner(mut self, name: impl Into<String>) -> Self {
        self.runner = Some(name.into());
        self
    }

    /// Attaches a step index.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Attaches a finish position.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Attaches an error message.
    pub fn with_error(mut self, msg: impl Into<String>) -> Self {
        self.error = Some(msg.into());
        self
    }
}
