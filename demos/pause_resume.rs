//! # Example: pause_resume
//!
//! Demonstrates the broadcast pause gate: a controller task freezes the
//! whole field mid-race, verifies that nobody arrives while paused, then
//! releases everyone at once.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► enter 3 runners (they start immediately)
//!   │
//!   └─► controller
//!         ├─► sleep 150ms (let them run)
//!         ├─► race.pause()     ──► all runners park at the gate
//!         ├─► sleep 500ms, record next_position twice
//!         ├─► assert no arrivals happened while paused
//!         └─► race.resume()    ──► broadcast wake, race continues
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example pause_resume
//! ```

use std::time::Duration;

use dograce::{Lane, Pace, Race, RaceConfig};
use tokio::time::sleep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== pause_resume example ===\n");

    let cfg = RaceConfig {
        bus_capacity: 256,
        pace: Pace::new(Duration::from_millis(40)),
    };
    let mut race = Race::new(cfg);

    race.enter("Rex", Lane::new(20, "Lane1"));
    race.enter("Fido", Lane::new(20, "Lane2"));
    race.enter("Toby", Lane::new(20, "Lane3"));
    println!("[controller] runners off: {:?}", race.runners());

    // Let them run a bit, then freeze the field.
    sleep(Duration::from_millis(150)).await;
    race.pause();
    println!("[controller] paused (is_paused={})", race.is_paused());

    let frozen_at = race.next_position();
    sleep(Duration::from_millis(500)).await;
    let still_frozen_at = race.next_position();
    println!("[controller] arrivals while paused: {}", still_frozen_at - frozen_at);
    assert_eq!(frozen_at, still_frozen_at, "nobody may arrive while paused");

    race.resume();
    println!("[controller] resumed, waiting for the field...\n");

    let placements = race.finish().await;
    for p in &placements {
        match &p.outcome {
            Ok(arrival) => println!("{} finished #{} (winner: {})", p.runner, arrival.position, arrival.winner),
            Err(e) => println!("{} did not finish: {e}", p.runner),
        }
    }

    println!("\n=== example completed ===");
    Ok(())
}
