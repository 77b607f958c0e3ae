//! Finish-line bookkeeping: arrival positions and the winner slot.

mod arrivals;

pub use arrivals::{Arrival, ArrivalRegistry};
