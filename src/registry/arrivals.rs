//! # Arrival registry: linearizable finish positions and first-arrival-wins.
//!
//! [`ArrivalRegistry`] assigns strictly increasing, duplicate-free finish
//! positions under arbitrary concurrent completion. The call that obtains
//! position 1 fixes the winner permanently; every later caller (and every
//! read-side accessor) observes that same winner.
//!
//! The position counter and the winner slot live in **one** lock-protected
//! record, so a caller can never see a torn pair (a fresh position with a
//! stale winner, or vice versa). Each `register_arrival` call is a single
//! atomic step: no retries, no partial failure.

use std::sync::{Mutex, PoisonError};

use crate::error::RaceError;

/// Immutable snapshot returned by [`ArrivalRegistry::register_arrival`].
///
/// Carries the position assigned to the caller and the (now permanent)
/// winner name as observed by that same atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// 1-based finish rank assigned to the caller.
    pub position: u32,
    /// Name of the runner that took position 1.
    pub winner: String,
}

/// Internal record guarded by one mutex.
#[derive(Debug)]
struct Ledger {
    next_position: u32,
    winner: Option<String>,
}

/// Thread-safe registry of race arrivals.
///
/// One instance per race, shared across all runners (typically behind an
/// [`Arc`](std::sync::Arc)).
///
/// # Example
/// ```
/// use dograce::ArrivalRegistry;
///
/// let registry = ArrivalRegistry::new();
/// assert_eq!(registry.next_position(), 1);
/// assert_eq!(registry.winner(), None);
///
/// let first = registry.register_arrival("Rex").unwrap();
/// assert_eq!(first.position, 1);
/// assert_eq!(first.winner, "Rex");
///
/// let second = registry.register_arrival("Fido").unwrap();
/// assert_eq!(second.position, 2);
/// assert_eq!(second.winner, "Rex");
/// ```
#[derive(Debug)]
pub struct ArrivalRegistry {
    ledger: Mutex<Ledger>,
}

impl ArrivalRegistry {
    /// Creates an empty registry: next position 1, no winner yet.
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                next_position: 1,
                winner: None,
            }),
        }
    }

    /// Registers an arrival and returns its position plus the winner.
    ///
    /// Linearizable: concurrent calls behave as if serialized in some order,
    /// and that order determines the positions and the winner. Across all
    /// calls the returned positions are exactly `1..=K` with no gaps or
    /// duplicates.
    ///
    /// # Errors
    /// [`RaceError::InvalidName`] if `name` is empty; the registry state is
    /// left untouched.
    pub fn register_arrival(&self, name: &str) -> Result<Arrival, RaceError> {
        if name.is_empty() {
            return Err(RaceError::InvalidName);
        }

        // No user code runs under the lock, so a poisoned mutex still holds
        // a consistent record; recover instead of failing the arrival.
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let position = ledger.next_position;
        ledger.next_position += 1;
        let winner = ledger
            .winner
            .get_or_insert_with(|| name.to_string())
            .clone();
        Ok(Arrival { position, winner })
    }

    /// Returns the position the next arrival would receive.
    ///
    /// Equals the count of arrivals so far plus one; monotonically
    /// non-decreasing.
    pub fn next_position(&self) -> u32 {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_position
    }

    /// Returns the winner name once any arrival has been registered.
    pub fn winner(&self) -> Option<String> {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .winner
            .clone()
    }
}

impl Default for ArrivalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_first_arrival_is_winner() {
        let registry = ArrivalRegistry::new();
        let snapshot = registry.register_arrival("Rex").unwrap();

        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.winner, "Rex");
        assert_eq!(registry.winner(), Some("Rex".to_string()));
    }

    #[test]
    fn test_consecutive_positions() {
        let registry = ArrivalRegistry::new();
        let first = registry.register_arrival("Rex").unwrap();
        let second = registry.register_arrival("Fido").unwrap();
        let third = registry.register_arrival("Toby").unwrap();

        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);
        assert_eq!(third.position, 3);

        assert_eq!(first.winner, "Rex");
        assert_eq!(second.winner, "Rex");
        assert_eq!(third.winner, "Rex");
    }

    #[test]
    fn test_winner_is_permanent() {
        let registry = ArrivalRegistry::new();
        registry.register_arrival("Winner").unwrap();
        registry.register_arrival("Second").unwrap();
        registry.register_arrival("Third").unwrap();

        assert_eq!(registry.winner(), Some("Winner".to_string()));
    }

    #[test]
    fn test_next_position_progression() {
        let registry = ArrivalRegistry::new();
        assert_eq!(registry.next_position(), 1);

        registry.register_arrival("Rex").unwrap();
        assert_eq!(registry.next_position(), 2);

        registry.register_arrival("Fido").unwrap();
        assert_eq!(registry.next_position(), 3);
    }

    #[test]
    fn test_empty_name_rejected_without_mutation() {
        let registry = ArrivalRegistry::new();
        let res = registry.register_arrival("");

        assert_eq!(res, Err(RaceError::InvalidName));
        assert_eq!(registry.next_position(), 1);
        assert_eq!(registry.winner(), None);
    }

    #[test]
    fn test_single_participant() {
        let registry = ArrivalRegistry::new();
        let snapshot = registry.register_arrival("OnlyOne").unwrap();

        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.winner, "OnlyOne");
        assert_eq!(registry.next_position(), 2);
    }

    #[test]
    fn test_concurrent_arrivals_get_unique_contiguous_positions() {
        let registry = Arc::new(ArrivalRegistry::new());
        let participants = 10usize;
        let barrier = Arc::new(Barrier::new(participants));

        let handles: Vec<_> = (0..participants)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let name = format!("Dog{i}");
                    let snapshot = registry.register_arrival(&name).unwrap();
                    (name, snapshot)
                })
            })
            .collect();

        let mut results: Vec<(String, Arrival)> = handles
            .into_iter()
            .map(|h| h.join().expect("arrival thread must not panic"))
            .collect();
        results.sort_by_key(|(_, s)| s.position);

        let positions: Vec<u32> = results.iter().map(|(_, s)| s.position).collect();
        assert_eq!(positions, (1..=participants as u32).collect::<Vec<_>>());

        // Every call observed the same winner: the position-1 name.
        let winner_name = &results[0].0;
        for (_, snapshot) in &results {
            assert_eq!(&snapshot.winner, winner_name);
        }
        assert_eq!(registry.winner(), Some(winner_name.clone()));
        assert_eq!(registry.next_position(), participants as u32 + 1);
    }

    #[test]
    fn test_many_concurrent_arrivals_leave_no_gaps() {
        let registry = Arc::new(ArrivalRegistry::new());
        let participants = 100usize;
        let barrier = Arc::new(Barrier::new(participants));

        let handles: Vec<_> = (0..participants)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.register_arrival(&format!("Dog{i}")).unwrap().position
                })
            })
            .collect();

        let mut positions: Vec<u32> = handles
            .into_iter()
            .map(|h| h.join().expect("arrival thread must not panic"))
            .collect();
        positions.sort_unstable();

        assert_eq!(positions, (1..=participants as u32).collect::<Vec<_>>());
        assert_eq!(registry.next_position(), participants as u32 + 1);
        assert!(registry.winner().is_some());
    }
}
