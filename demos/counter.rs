//! Counter Store
//!
//! This example drives the counter store the way a UI would: buttons
//! dispatch actions, a selector reads the value, and a subscriber re-renders.
//!
//! Key concepts:
//! - Pure reducer behind an owned store
//! - Typed and raw (JSON) actions
//! - Subscribers notified after every applied action
//!
//! Run with: RUST_LOG=tally=debug cargo run --example counter

use tally::{CounterAction, CounterStore, RawAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() {
    init_logging();
    println!("=== Counter Store Example ===\n");

    let mut store = CounterStore::counter();
    store.subscribe(|change| {
        println!(
            "  render: {} -> {} ({:?})",
            change.previous.value, change.current.value, change.action
        );
    });

    println!("Initial value: {}", store.select(|s| s.value));

    // "+1", "-1" and "+5" buttons
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);
    store.dispatch(CounterAction::IncrementBy(5));

    // Actions arriving as JSON from elsewhere
    for json in [
        r#"{"type":"counter/inc"}"#,
        r#"{"type":"counter/reset"}"#,
    ] {
        match serde_json::from_str::<RawAction>(json) {
            Ok(raw) => println!("{} -> {:?}", json, store.dispatch_raw(&raw)),
            Err(e) => println!("{} -> not an action: {}", json, e),
        }
    }

    println!("\nFinal value: {}", store.value());
    println!("Dispatched: {}", store.metadata().dispatch_count);
    println!("Ignored: {}", store.metadata().ignored_count);

    println!("\n=== Example Complete ===");
}
