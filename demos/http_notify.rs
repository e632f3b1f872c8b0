//! Example demonstrating HTTP notification delivery.
//!
//! This example shows how to:
//! - Bind a watcher with the default HTTP notifier
//! - Observe the best-effort delivery policy via an error hook
//!
//! Run with: cargo run --example http_notify --features http

use std::sync::Arc;
use std::time::Duration;
use textwatch::notify::HttpNotifier;
use textwatch::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== HTTP Notification Example ===\n");

    let registry = FieldRegistry::new();
    let field = Arc::new(InMemoryField::new(""));
    registry.register("search", Arc::clone(&field));

    // NOTE: This is a mock endpoint. In a real application, point this at the
    // component that wants to hear about the change.
    let watcher = ChangeWatcher::builder()
        .with_element_id("search")
        .with_callback_url("http://localhost:8080/notify")
        .with_notifier(Arc::new(HttpNotifier::with_timeout(Duration::from_secs(2))?))
        .on_notify_error(|err| {
            // Delivery is best-effort: the watcher drops this outcome, the
            // hook just makes it visible
            println!("[hook] notification dropped: {err}");
        })
        .bind(&registry)?;

    println!("Watching '{}', notifying {}", watcher.element_id(), watcher.callback_url());
    println!("Each change issues GET {}?tval=<value>\n", watcher.callback_url());

    field.input("rust change detection");

    // Give the fire-and-forget request a moment before the process exits;
    // with nothing listening on the endpoint the hook fires instead
    tokio::time::sleep(Duration::from_secs(3)).await;

    println!("\nChanges detected: {} (delivery success is not tracked)", watcher.change_count());
    Ok(())
}
