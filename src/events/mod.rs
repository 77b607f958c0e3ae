//! Race events: types and broadcast bus.
//!
//! Groups the event **data model** and the **bus** used to publish and
//! subscribe to progress events emitted by runners and the race controller.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: [`Runner`](crate::Runner) (starting/step/finished/
//!   canceled) and [`Race`](crate::Race) (paused/resumed).
//! - **Consumers**: listener tasks spawned by [`Race::attach`](crate::Race::attach),
//!   which feed [`Subscribe`](crate::Subscribe) implementations.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
