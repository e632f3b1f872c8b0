//! Integration tests for the notification wire contract.

use std::sync::Arc;
use std::time::Duration;
use textwatch::dom::{FieldRegistry, InMemoryField};
use textwatch::notify::{CallbackUrl, ChannelNotifier, extract_value};
use textwatch::prelude::*;
use tokio::sync::mpsc;
use tokio::time::timeout;

async fn watch_and_edit(callback_url: &str, new_value: &str) -> String {
    let registry = FieldRegistry::new();
    let field = Arc::new(InMemoryField::new("initial"));
    registry.register("field", Arc::clone(&field));

    let (notifier, mut rx) = ChannelNotifier::new();
    let _watcher = ChangeWatcher::builder()
        .with_element_id("field")
        .with_callback_url(callback_url)
        .with_notifier(Arc::new(notifier))
        .bind(&registry)
        .unwrap();

    field.input(new_value);
    next_notification(&mut rx).await
}

async fn next_notification(rx: &mut mpsc::UnboundedReceiver<String>) -> String {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a notification")
        .expect("notification channel closed")
}

#[tokio::test]
async fn test_value_is_query_encoded() {
    let url = watch_and_edit("/notify", "hello world").await;
    assert_eq!(url, "/notify?tval=hello%20world");
}

#[tokio::test]
async fn test_existing_query_string_switches_separator() {
    let url = watch_and_edit("/notify?x=1", "a").await;
    assert_eq!(url, "/notify?x=1&tval=a");
}

#[tokio::test]
async fn test_empty_value_is_still_notified() {
    let url = watch_and_edit("/notify", "").await;
    assert_eq!(url, "/notify?tval=");
}

#[tokio::test]
async fn test_non_ascii_value_roundtrips() {
    let url = watch_and_edit("/notify", "héllo & gøodbye?").await;
    assert_eq!(extract_value(&url), Some("héllo & gøodbye?".to_string()));
}

#[tokio::test]
async fn test_received_url_decodes_to_the_field_value() {
    let url = watch_and_edit("/callback/endpoint", "25% of the time").await;
    assert!(url.starts_with("/callback/endpoint?tval="));
    assert_eq!(extract_value(&url), Some("25% of the time".to_string()));
}

#[test]
fn test_callback_url_matches_watcher_output() {
    // The watcher builds its URLs through CallbackUrl; the two must agree
    let callback = CallbackUrl::new("/notify?x=1");
    assert_eq!(callback.with_value("a"), "/notify?x=1&tval=a");
}

#[cfg(feature = "http")]
#[tokio::test]
async fn test_default_bind_uses_the_http_notifier() {
    let registry = FieldRegistry::new();
    registry.register("field", Arc::new(InMemoryField::new("")));

    // The reference construction contract: (element_id, callback_url, timer)
    let watcher = ChangeWatcher::bind(&registry, "field", "http://127.0.0.1:9/notify", false)
        .unwrap();
    assert!(watcher.is_active());
    assert_eq!(watcher.callback_url(), "http://127.0.0.1:9/notify");
}
