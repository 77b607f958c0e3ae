//! # dograce
//!
//! **dograce** is a concurrent race simulation library: N independent
//! runners advance step-by-step along fixed-length tracks, competing to
//! finish first, while a shared controller can pause and resume all of
//! them at once.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Runner #1   │   │  Runner #2   │   │  Runner #N   │
//!     │ (own track)  │   │ (own track)  │   │ (own track)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ every step       │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  PauseGate (shared flag; broadcast wake on resume)        │◄── pause()/resume()
//! └───────────────────────────────────────────────────────────┘    (controller)
//!            │ on crossing the finish line (exactly once)
//!            ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  ArrivalRegistry (linearizable positions 1..K;            │
//! │  position 1 fixes the winner permanently)                 │
//! └───────────────────────────────────────────────────────────┘
//!            │ progress/lifecycle events
//!            ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Bus (broadcast channel) ──► Subscribe impls (LogWriter…) │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Runner lifecycle
//! ```text
//! Race::enter(name, track) ──► Runner::spawn(child token)
//!
//! loop over steps {
//!   ├─► gate.wait_if_paused(ctx)   (suspends while paused; cancellable)
//!   ├─► track.set_step_mark(i) + display_progress(i + 1)
//!   └─► sleep(pace.next_delay())   (cancellable)
//! }
//! track.mark_finished()
//! registry.register_arrival(name) ──► Arrival { position, winner }
//! ```
//!
//! ## Guarantees
//! - **Broadcast wake**: `resume()` releases every parked runner, with no
//!   missed-wakeup window — a waiter arriving between `pause()` and
//!   `resume()` always observes the resume.
//! - **Linearizable arrivals**: concurrent finishers receive positions that
//!   are exactly `1..=K`, no gaps, no duplicates; position 1 determines the
//!   permanent winner.
//! - **Clean cancellation**: a cancelled runner unblocks promptly, never
//!   registers an arrival, and never corrupts the gate for other waiters.
//!
//! ## Features
//! | Area           | Description                                        | Key types                       |
//! |----------------|----------------------------------------------------|---------------------------------|
//! | **Control**    | Pause/resume all runners at once.                  | [`PauseGate`]                   |
//! | **Arrivals**   | Finish positions and first-arrival-wins.           | [`ArrivalRegistry`], [`Arrival`]|
//! | **Runners**    | Cancellable per-competitor race loops.             | [`Runner`], [`RunnerHandle`]    |
//! | **Tracks**     | Rendering contract plus an in-memory lane.         | [`Track`], [`Lane`]             |
//! | **Pacing**     | Bounded random per-step delays.                    | [`Pace`], [`DelaySource`]       |
//! | **Wiring**     | One-call setup, lifecycle, placements.             | [`Race`], [`RaceConfig`]        |
//! | **Events**     | Progress/lifecycle broadcast and subscribers.      | [`Bus`], [`Event`], [`Subscribe`]|
//! | **Errors**     | Typed terminal outcomes.                           | [`RaceError`]                   |
//!
//! ## Example
//! ```rust
//! use dograce::{Lane, Race, RaceConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut race = Race::new(RaceConfig::default());
//!
//!     race.pause(); // line everyone up at the start
//!     race.enter("Rex", Lane::new(5, "Lane1"));
//!     race.enter("Fido", Lane::new(5, "Lane2"));
//!     race.resume(); // and they're off
//!
//!     let placements = race.finish().await;
//!     for p in &placements {
//!         println!("{}: {:?}", p.runner, p.outcome);
//!     }
//! }
//! ```

mod config;
mod control;
mod error;
mod events;
mod race;
mod registry;
mod runners;
mod subscribers;

// ---- Public re-exports ----

pub use config::RaceConfig;
pub use control::PauseGate;
pub use error::RaceError;
pub use events::{Bus, Event, EventKind};
pub use race::{Placement, Race};
pub use registry::{Arrival, ArrivalRegistry};
pub use runners::{DelaySource, Lane, Pace, RandomDelay, Runner, RunnerHandle, Track};
pub use subscribers::{LogWriter, Subscribe};
