//! # Runner: the per-competitor race loop.
//!
//! A [`Runner`] owns its [`Track`] exclusively and references the shared
//! [`PauseGate`] and [`ArrivalRegistry`] through their public contracts
//! only. Its loop, per step:
//!
//! ```text
//! loop over 0..track.len() {
//!   ├─► gate.wait_if_paused(ctx)      (suspends while paused; cancellable)
//!   ├─► track.set_step_mark(step)
//!   ├─► track.display_progress(step + 1)
//!   ├─► publish StepAdvanced
//!   └─► sleep(pace.next_delay())     (cancellable)
//! }
//! track.mark_finished()
//! registry.register_arrival(name)    (exactly once)
//! ```
//!
//! Cancellation — whether delivered while parked at the gate or mid-sleep —
//! terminates the runner early: it neither advances further nor registers
//! an arrival, and it leaves the gate fully usable for other waiters.

use std::sync::Arc;

use tokio::{select, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use crate::{
    control::PauseGate,
    error::RaceError,
    events::{Bus, Event, EventKind},
    registry::{Arrival, ArrivalRegistry},
    runners::{Pace, Track},
};

/// One competitor advancing along its own track.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tokio_util::sync::CancellationToken;
/// use dograce::{ArrivalRegistry, Lane, PauseGate, Runner};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let gate = PauseGate::new();
/// let registry = Arc::new(ArrivalRegistry::new());
///
/// let runner = Runner::new("Rex", Lane::new(3, "Lane1"), gate, Arc::clone(&registry));
/// let arrival = runner.run(CancellationToken::new()).await.unwrap();
///
/// assert_eq!(arrival.position, 1);
/// assert_eq!(registry.winner(), Some("Rex".to_string()));
/// # }
/// ```
pub struct Runner {
    name: String,
    track: Box<dyn Track>,
    gate: PauseGate,
    registry: Arc<ArrivalRegistry>,
    pace: Pace,
    bus: Option<Bus>,
}

impl Runner {
    /// Creates a runner wired to the shared gate and registry.
    ///
    /// Uses the default [`Pace`] and no event bus; see
    /// [`with_pace`](Self::with_pace) and [`with_bus`](Self::with_bus).
    pub fn new(
        name: impl Into<String>,
        track: impl Track,
        gate: PauseGate,
        registry: Arc<ArrivalRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            track: Box::new(track),
            gate,
            registry,
            pace: Pace::default(),
            bus: None,
        }
    }

    /// Replaces the step-delay policy.
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Attaches an event bus for progress events.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Runner name, as it will appear in the arrival registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes the race loop to completion or cancellation.
    ///
    /// On normal completion the runner marks the finish indicator and
    /// registers its arrival exactly once, returning the assigned
    /// [`Arrival`]. On cancellation it returns [`RaceError::Canceled`]
    /// without registering anything.
    pub async fn run(mut self, ctx: CancellationToken) -> Result<Arrival, RaceError> {
        self.publish(Event::now(EventKind::RunnerStarting).with_runner(&self.name));

        for step in 0..self.track.len() {
            if let Err(err) = self.gate.wait_if_paused(&ctx).await {
                return Err(self.bow_out(err));
            }

            self.track.set_step_mark(step);
            self.track.display_progress(step + 1);
            self.publish(
                Event::now(EventKind::StepAdvanced)
                    .with_runner(&self.name)
                    .with_step(step),
            );

            let sleep = time::sleep(self.pace.next_delay());
            tokio::pin!(sleep);
            select! {
                _ = &mut sleep => {}
                _ = ctx.cancelled() => return Err(self.bow_out(RaceError::Canceled)),
            }
        }

        self.track.mark_finished();
        let arrival = self.registry.register_arrival(&self.name)?;
        self.publish(
            Event::now(EventKind::RunnerFinished)
                .with_runner(&self.name)
                .with_position(arrival.position),
        );
        Ok(arrival)
    }

    /// Spawns the runner on the tokio runtime under a child token of
    /// `parent` and returns its start/join handle.
    pub fn spawn(self, parent: &CancellationToken) -> RunnerHandle {
        let cancel = parent.child_token();
        let name = self.name.clone();
        let token = cancel.clone();
        let join = tokio::spawn(async move { self.run(token).await });
        RunnerHandle { name, cancel, join }
    }

    fn publish(&self, ev: Event) {
        if let Some(bus) = &self.bus {
            bus.publish(ev);
        }
    }

    /// Publishes the cancellation event and hands the error back.
    fn bow_out(&self, err: RaceError) -> RaceError {
        self.publish(
            Event::now(EventKind::RunnerCanceled)
                .with_runner(&self.name)
                .with_error(err.as_message()),
        );
        err
    }
}

/// Start/join lifecycle handle for a spawned [`Runner`].
pub struct RunnerHandle {
    name: String,
    cancel: CancellationToken,
    join: JoinHandle<Result<Arrival, RaceError>>,
}

impl RunnerHandle {
    /// Name of the runner behind this handle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requests cancellation of the runner. Safe to call repeatedly.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the runner's task has finished (successfully or not).
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the runner to terminate and returns its outcome.
    pub async fn join(self) -> Result<Arrival, RaceError> {
        match self.join.await {
            Ok(res) => res,
            // A panicked runner never registered an arrival; report it as
            // cancelled rather than resuming the panic here.
            Err(_join) => Err(RaceError::Canceled),
        }
    }
}
