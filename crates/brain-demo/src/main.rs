//! Guard demo binary.
//!
//! Runs the patrolling guard scenario with the strategy chosen in the
//! environment and prints one summary line per run.
//!
//! # Examples
//!
//! ```bash
//! BRAIN_STRATEGY=tree BRAIN_TICKS=200 cargo run -p brain-demo
//! RUST_LOG=debug cargo run -p brain-demo
//! ```

use anyhow::Result;
use brain_demo::{DemoConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = DemoConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        "Starting guard demo: strategy={} ticks={} rate={}Hz",
        config.strategy,
        config.ticks,
        config.tick_rate
    );

    for summary in brain_demo::run(&config)? {
        println!(
            "{:<5} ticks={} catches={} position={:.2} stamina={:.2} last={}",
            summary.strategy.as_ref(),
            summary.ticks,
            summary.catches,
            summary.position,
            summary.stamina,
            summary.last
        );
    }

    Ok(())
}
