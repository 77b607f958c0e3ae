//! # Example: cancel_runner
//!
//! Demonstrates cancelling one runner mid-race while the field is paused.
//! The cancelled runner terminates promptly without registering an arrival;
//! the rest of the field is unaffected.
//!
//! ## Run
//! ```bash
//! cargo run --example cancel_runner
//! ```

use std::sync::Arc;
use std::time::Duration;

use dograce::{Lane, LogWriter, Pace, Race, RaceConfig, RaceError};
use tokio::time::sleep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== cancel_runner example ===\n");

    let cfg = RaceConfig {
        bus_capacity: 256,
        pace: Pace::new(Duration::from_millis(30)),
    };
    let mut race = Race::new(cfg);
    race.attach(Arc::new(LogWriter));

    race.enter("Rex", Lane::new(15, "Lane1"));
    race.enter("Quitter", Lane::new(15, "Lane2"));

    // Freeze the field, then pull one runner while it is parked at the gate.
    sleep(Duration::from_millis(100)).await;
    race.pause();
    println!("\n[controller] paused; cancelling 'Quitter' while parked");
    let found = race.cancel("Quitter");
    assert!(found, "Quitter should be in the race");

    sleep(Duration::from_millis(100)).await;
    race.resume();

    let registry = race.registry();
    let placements = race.finish().await;

    println!();
    for p in &placements {
        match &p.outcome {
            Ok(arrival) => println!("{} finished #{}", p.runner, arrival.position),
            Err(RaceError::Canceled) => println!("{} was cancelled, no arrival registered", p.runner),
            Err(e) => println!("{} failed: {e}", p.runner),
        }
    }

    assert_eq!(registry.winner(), Some("Rex".to_string()));
    assert_eq!(registry.next_position(), 2, "only Rex arrived");

    println!("\n=== example completed ===");
    Ok(())
}
