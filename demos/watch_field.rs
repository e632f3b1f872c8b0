//! Example demonstrating change detection on an in-memory field.
//!
//! This example shows how to:
//! - Register a field and bind a watcher to it
//! - Observe event-driven and polling-based detection
//! - Subscribe local callbacks to detected changes
//!
//! Run with: cargo run --example watch_field

use std::sync::Arc;
use std::time::Duration;
use textwatch::dom::InputSignal;
use textwatch::notify::ChannelNotifier;
use textwatch::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Change Detection Example ===\n");

    // The "page": a registry of fields keyed by element id
    let registry = FieldRegistry::new();
    let field = Arc::new(InMemoryField::new("first draft"));
    registry.register("quote", Arc::clone(&field));

    // Deliver notifications in-process so we can print them
    let (notifier, mut notifications) = ChannelNotifier::new();

    let watcher = ChangeWatcher::builder()
        .with_element_id("quote")
        .with_callback_url("/page/refresh?component=quote")
        .with_timer(true)
        .with_poll_interval(Duration::from_millis(50))
        .with_notifier(Arc::new(notifier))
        .bind(&registry)?;

    println!("Watching '{}', notifying {}\n", watcher.element_id(), watcher.callback_url());

    // A local subscriber sees each new value before the remote delivery
    let _handle = watcher
        .subscribe(|value| println!("[subscriber] field is now {value:?}"))
        .await;

    // Event-driven detection: a user edit raises the `input` signal
    println!("Simulating a user edit...");
    field.input("second draft");
    println!("[notifier]   GET {}\n", notifications.recv().await.unwrap());

    // A signal with no value change is a no-op
    println!("Dispatching keyup without changing the value (no-op)...");
    field.dispatch(InputSignal::KeyUp);

    // Polling fallback: a programmatic change raises no signal at all
    println!("Changing the value programmatically (no signal)...");
    field.set_value("third draft, set by code");
    println!("[notifier]   GET {}\n", notifications.recv().await.unwrap());

    println!("Changes detected: {}", watcher.change_count());
    Ok(())
}
