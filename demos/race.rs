//! # Example: race
//!
//! Five runners on tracks of different lengths, with a log subscriber
//! printing every event. The shortest track usually wins, but the random
//! per-step pacing keeps it interesting.
//!
//! ## Run
//! ```bash
//! cargo run --example race
//! ```

use std::sync::Arc;
use std::time::Duration;

use dograce::{Lane, LogWriter, Pace, Race, RaceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== race example ===\n");

    // 1. Configure: up to 30ms of random delay per step
    let cfg = RaceConfig {
        bus_capacity: 256,
        pace: Pace::new(Duration::from_millis(30)),
    };

    // 2. Create the race and attach the stdout log writer
    let mut race = Race::new(cfg);
    race.attach(Arc::new(LogWriter));

    // 3. Line runners up behind the gate, then release them together
    race.pause();
    race.enter("Rex", Lane::new(8, "Lane1"));
    race.enter("Fido", Lane::new(10, "Lane2"));
    race.enter("Toby", Lane::new(10, "Lane3"));
    race.enter("Luna", Lane::new(10, "Lane4"));
    race.enter("Nala", Lane::new(10, "Lane5"));
    race.resume();

    // 4. Wait for everyone and print the final standings
    let placements = race.finish().await;

    println!("\n--- standings ---");
    let mut standings: Vec<_> = placements
        .iter()
        .filter_map(|p| p.outcome.as_ref().ok().map(|a| (a.position, &p.runner)))
        .collect();
    standings.sort_by_key(|(position, _)| *position);
    for (position, runner) in &standings {
        println!("  {position}. {runner}");
    }

    println!("\n=== example completed ===");
    Ok(())
}
