//! Rolls a real die a few times.

use std::error::Error;

use randomock_core::ThreadRandomizer;
use randomock_dice::Dice;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Read configuration from environment.
    let sides: isize = std::env::var("DICE_SIDES")
        .unwrap_or_else(|_| "6".to_string())
        .parse()
        .map_err(|e| format!("DICE_SIDES must be a valid integer: {e}"))?;
    let rolls: usize = std::env::var("DICE_ROLLS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .map_err(|e| format!("DICE_ROLLS must be a valid count: {e}"))?;

    let mut dice = Dice::new(sides, ThreadRandomizer)?;
    tracing::info!(sides, rolls, "rolling dice");

    for attempt in 0..rolls {
        let result = dice.roll();
        println!("Rolling dice attempt {attempt}.... got {result}");
    }

    Ok(())
}
