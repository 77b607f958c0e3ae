//! # Race: wiring and lifecycle for a set of runners.
//!
//! [`Race`] owns the shared pieces — one [`PauseGate`], one
//! [`ArrivalRegistry`], one event [`Bus`], one root cancellation token —
//! and hands each entered runner a child token plus clones of the shared
//! handles.
//!
//! ```text
//! Race::new(config)
//!   ├─► PauseGate           (shared flag, broadcast wake)
//!   ├─► ArrivalRegistry     (linearizable positions, winner slot)
//!   ├─► Bus                 (broadcast events)
//!   └─► root CancellationToken
//!
//! race.enter(name, track)
//!   └─► Runner::spawn(child token) ──► RunnerHandle { cancel, join }
//!
//! race.pause() / race.resume()       (controller, any task, any time)
//! race.finish().await ──► Vec<Placement>
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    config::RaceConfig,
    control::PauseGate,
    error::RaceError,
    events::{Bus, Event, EventKind},
    registry::{Arrival, ArrivalRegistry},
    runners::{Runner, RunnerHandle, Track},
    subscribers::Subscribe,
};

/// Final outcome of one runner, in entry order.
#[derive(Debug)]
pub struct Placement {
    /// Runner name.
    pub runner: String,
    /// The arrival it registered, or the error that terminated it.
    pub outcome: Result<Arrival, RaceError>,
}

/// A race in progress: shared control surfaces plus the spawned runners.
///
/// # Example
/// ```
/// use dograce::{Lane, Race, RaceConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut race = Race::new(RaceConfig::default());
/// race.enter("Rex", Lane::new(3, "Lane1"));
/// race.enter("Fido", Lane::new(3, "Lane2"));
///
/// let placements = race.finish().await;
/// assert_eq!(placements.len(), 2);
/// # }
/// ```
pub struct Race {
    config: RaceConfig,
    gate: PauseGate,
    registry: Arc<ArrivalRegistry>,
    bus: Bus,
    token: CancellationToken,
    handles: Vec<RunnerHandle>,
}

impl Race {
    /// Creates an empty race from the given configuration.
    pub fn new(config: RaceConfig) -> Self {
        let bus = Bus::new(config.bus_capacity);
        Self {
            config,
            gate: PauseGate::new(),
            registry: Arc::new(ArrivalRegistry::new()),
            bus,
            token: CancellationToken::new(),
            handles: Vec::new(),
        }
    }

    /// Clone of the shared pause gate.
    pub fn gate(&self) -> PauseGate {
        self.gate.clone()
    }

    /// Handle to the shared arrival registry.
    pub fn registry(&self) -> Arc<ArrivalRegistry> {
        Arc::clone(&self.registry)
    }

    /// Clone of the event bus.
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Enters a competitor: builds a runner wired to the race's gate,
    /// registry, bus and pace, and starts it immediately.
    ///
    /// Pause the gate first to line runners up at the start.
    pub fn enter(&mut self, name: impl Into<String>, track: impl Track) {
        let runner = Runner::new(name, track, self.gate.clone(), Arc::clone(&self.registry))
            .with_pace(self.config.pace.clone())
            .with_bus(self.bus.clone());
        self.handles.push(runner.spawn(&self.token));
    }

    /// Pauses all runners at their next gate check.
    pub fn pause(&self) {
        self.gate.pause();
        self.bus.publish(Event::now(EventKind::RacePaused));
    }

    /// Resumes the race, releasing every runner parked at the gate.
    pub fn resume(&self) {
        self.gate.resume();
        self.bus.publish(Event::now(EventKind::RaceResumed));
    }

    /// Current paused state of the gate.
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Names of all entered runners, in entry order.
    pub fn runners(&self) -> Vec<String> {
        self.handles.iter().map(|h| h.name().to_string()).collect()
    }

    /// Cancels one runner by name. Returns false if no such runner entered.
    pub fn cancel(&self, name: &str) -> bool {
        match self.handles.iter().find(|h| h.name() == name) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancels every runner in the race.
    pub fn cancel_all(&self) {
        self.token.cancel();
    }

    /// Position the next arrival would receive.
    pub fn next_position(&self) -> u32 {
        self.registry.next_position()
    }

    /// Winner name once any runner has arrived.
    pub fn winner(&self) -> Option<String> {
        self.registry.winner()
    }

    /// Spawns a listener task feeding `subscriber` from the event bus.
    ///
    /// The listener drains remaining events and exits once the race is
    /// finished (bus closed) or cancelled. Lagged receivers skip older
    /// events and keep going.
    pub fn attach(&self, subscriber: Arc<dyn Subscribe>) {
        let mut rx = self.bus.subscribe();
        let token = self.token.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => subscriber.on_event(&ev).await,
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    }
                }
            }
        });
    }

    /// Waits for every runner to terminate and returns the placements in
    /// entry order.
    ///
    /// A paused race never finishes on its own; resume or cancel first.
    pub async fn finish(self) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            let runner = handle.name().to_string();
            let outcome = handle.join().await;
            placements.push(Placement { runner, outcome });
        }
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    use crate::runners::{DelaySource, Lane, Pace};

    struct Fixed(u64);
    impl DelaySource for Fixed {
        fn next(&self, _bound: u64) -> u64 {
            self.0
        }
    }

    /// Deterministic pacing: every step sleeps exactly `ms`.
    fn fixed_pace(ms: u64) -> Pace {
        Pace::new(Duration::from_millis(ms + 1)).with_source(Arc::new(Fixed(ms)))
    }

    fn config_with_pace(pace: Pace) -> RaceConfig {
        RaceConfig {
            bus_capacity: 1024,
            pace,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shortest_track_wins_among_five() {
        let mut race = Race::new(config_with_pace(fixed_pace(40)));

        race.enter("Swift", Lane::new(3, "Lane1"));
        race.enter("Dog2", Lane::new(5, "Lane2"));
        race.enter("Dog3", Lane::new(5, "Lane3"));
        race.enter("Dog4", Lane::new(5, "Lane4"));
        race.enter("Dog5", Lane::new(5, "Lane5"));

        let registry = race.registry();
        let placements = timeout(Duration::from_secs(10), race.finish())
            .await
            .expect("race must finish");

        assert_eq!(placements.len(), 5);
        let swift = placements
            .iter()
            .find(|p| p.runner == "Swift")
            .expect("Swift entered");
        assert_eq!(
            swift.outcome.as_ref().map(|a| a.position),
            Ok(1),
            "the runner with the shortest track must take position 1"
        );
        assert_eq!(registry.winner(), Some("Swift".to_string()));
        assert_eq!(registry.next_position(), 6);
    }

    #[tokio::test]
    async fn test_pause_before_start_holds_runner() {
        let mut race = Race::new(config_with_pace(fixed_pace(5)));
        race.pause();
        race.enter("Held", Lane::new(10, "Lane1"));

        // Ten 5ms steps take ~50ms unpaused; wait far longer than that.
        sleep(Duration::from_millis(400)).await;
        assert_eq!(race.next_position(), 1, "paused runner must not arrive");
        assert_eq!(race.winner(), None);

        race.resume();
        let registry = race.registry();
        let placements = timeout(Duration::from_secs(5), race.finish())
            .await
            .expect("race must finish after resume");

        assert_eq!(placements.len(), 1);
        assert_eq!(
            placements[0].outcome.as_ref().map(|a| a.position),
            Ok(1)
        );
        assert_eq!(registry.winner(), Some("Held".to_string()));
        assert_eq!(registry.next_position(), 2);
    }

    #[tokio::test]
    async fn test_single_runner_single_step() {
        let mut race = Race::new(config_with_pace(fixed_pace(0)));
        race.enter("Solo", Lane::new(1, "Lane1"));

        let registry = race.registry();
        let placements = timeout(Duration::from_secs(5), race.finish())
            .await
            .expect("race must finish");

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].runner, "Solo");
        assert_eq!(registry.winner(), Some("Solo".to_string()));
        assert_eq!(registry.next_position(), 2);
    }

    #[tokio::test]
    async fn test_cancel_while_paused_leaves_registry_untouched() {
        let mut race = Race::new(config_with_pace(fixed_pace(5)));
        race.pause();
        race.enter("Doomed", Lane::new(5, "Lane1"));

        sleep(Duration::from_millis(50)).await;
        assert!(race.cancel("Doomed"));
        assert!(!race.cancel("NoSuchRunner"));

        let registry = race.registry();
        let placements = timeout(Duration::from_secs(2), race.finish())
            .await
            .expect("cancelled runner must terminate while paused");

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].outcome, Err(RaceError::Canceled));
        assert_eq!(registry.next_position(), 1);
        assert_eq!(registry.winner(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_pause_resume_mid_race_all_finish() {
        let mut race = Race::new(config_with_pace(fixed_pace(10)));
        for i in 0..6 {
            race.enter(format!("Dog{i}"), Lane::new(8, "Lane"));
        }

        sleep(Duration::from_millis(20)).await;
        race.pause();
        assert!(race.is_paused());
        sleep(Duration::from_millis(50)).await;
        race.resume();
        assert!(!race.is_paused());

        let registry = race.registry();
        let placements = timeout(Duration::from_secs(10), race.finish())
            .await
            .expect("race must finish");

        let mut positions: Vec<u32> = placements
            .iter()
            .map(|p| p.outcome.as_ref().expect("all runners finish").position)
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, (1..=6).collect::<Vec<_>>());
        assert_eq!(registry.next_position(), 7);
    }

    #[tokio::test]
    async fn test_cancel_all_terminates_every_runner() {
        let mut race = Race::new(config_with_pace(fixed_pace(5)));
        race.pause();
        race.enter("Dog1", Lane::new(5, "Lane1"));
        race.enter("Dog2", Lane::new(5, "Lane2"));
        assert_eq!(race.runners(), vec!["Dog1", "Dog2"]);

        sleep(Duration::from_millis(30)).await;
        race.cancel_all();

        let placements = timeout(Duration::from_secs(2), race.finish())
            .await
            .expect("cancel_all must terminate the race");
        assert!(placements.iter().all(|p| p.outcome == Err(RaceError::Canceled)));
    }

    #[tokio::test]
    async fn test_subscriber_observes_race_events() {
        struct Counter {
            finishes: AtomicUsize,
            pauses: AtomicUsize,
        }

        #[async_trait::async_trait]
        impl Subscribe for Counter {
            async fn on_event(&self, event: &Event) {
                match event.kind {
                    EventKind::RunnerFinished => {
                        self.finishes.fetch_add(1, Ordering::SeqCst);
                    }
                    EventKind::RacePaused => {
                        self.pauses.fetch_add(1, Ordering::SeqCst);
                    }
                    _ => {}
                }
            }
        }

        let counter = Arc::new(Counter {
            finishes: AtomicUsize::new(0),
            pauses: AtomicUsize::new(0),
        });

        let mut race = Race::new(config_with_pace(fixed_pace(0)));
        race.attach(counter.clone());
        race.pause();
        race.enter("Dog1", Lane::new(2, "Lane1"));
        race.enter("Dog2", Lane::new(2, "Lane2"));
        race.resume();

        timeout(Duration::from_secs(5), race.finish())
            .await
            .expect("race must finish");

        // Give the listener a moment to drain the bus after the race ends.
        sleep(Duration::from_millis(100)).await;
        assert_eq!(counter.finishes.load(Ordering::SeqCst), 2);
        assert_eq!(counter.pauses.load(Ordering::SeqCst), 1);
    }
}
