//! Checkpoint and Resume
//!
//! This example configures a store from TOML, dispatches actions, saves a
//! checkpoint to disk and resumes a fresh store from it.
//!
//! Key concepts:
//! - TOML configuration with accumulated validation errors
//! - JSON checkpoints written atomically (temp file, then rename)
//! - Resume validates the checkpoint by replaying its history
//!
//! Run with: cargo run --example checkpoint_resume

use std::fs;
use tally::{Checkpoint, CounterAction, CounterReducer, CounterState, CounterStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    println!("=== Checkpoint and Resume Example ===\n");

    // A broken configuration reports every problem at once
    let broken = StoreConfig::from_toml_str("record_history = false\nhistory_limit = 0")?;
    if let Err(e) = broken.validate() {
        println!("Rejected config: {}", e);
    }

    let config = StoreConfig::from_toml_str("initial_value = 1\nhistory_limit = 16")?;
    let mut store = CounterStore::from_config(&config)?;

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::IncrementBy(5));
    println!("Value before checkpoint: {}", store.value());

    let dir = std::env::temp_dir().join("tally-checkpoint-demo");
    fs::create_dir_all(&dir)?;
    let path = dir.join("counter.json");
    let temp_path = dir.join("counter.json.tmp");

    fs::write(&temp_path, store.checkpoint().to_json_pretty()?)?;
    fs::rename(&temp_path, &path)?;
    println!("[Checkpoint] Saved to {}", path.display());
    drop(store);

    let json = fs::read_to_string(&path)?;
    let checkpoint = Checkpoint::<CounterState, CounterAction>::from_json(&json)?;
    let mut resumed = CounterStore::resume(CounterReducer, checkpoint)?;
    println!("[Checkpoint] Resumed at value {}", resumed.value());

    resumed.dispatch(CounterAction::Decrement);
    println!("Value after resume: {}", resumed.value());
    println!("History: {:?}", resumed.history().get_path());

    fs::remove_dir_all(&dir)?;
    println!("\n=== Example Complete ===");
    Ok(())
}
