//! Local subscriber callbacks for detected changes.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Handle for a subscription that can be dropped to unsubscribe.
///
/// When the handle is dropped, the subscription is automatically removed.
pub struct SubscriptionHandle {
    id: usize,
    subscribers: Arc<RwLock<ChangeSubscribersInner>>,
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        let id = self.id;
        let subscribers = Arc::clone(&self.subscribers);
        tokio::spawn(async move {
            let mut inner = subscribers.write().await;
            inner.callbacks.retain(|(sub_id, _)| *sub_id != id);
        });
    }
}

type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Internal subscriber state.
struct ChangeSubscribersInner {
    callbacks: Vec<(usize, ChangeCallback)>,
    next_id: usize,
}

/// Registry of local callbacks invoked with each newly observed value.
///
/// This is the in-process counterpart to the remote notification: callbacks
/// run synchronously inside the detection check, in subscription order,
/// before the fire-and-forget delivery is spawned.
///
/// # Examples
///
/// ```rust,no_run
/// use textwatch::watch::ChangeSubscribers;
///
/// # async fn example() {
/// let subscribers = ChangeSubscribers::new();
///
/// let handle = subscribers.subscribe(|value| {
///     println!("field is now {value:?}");
/// }).await;
///
/// subscribers.notify_all("hello").await;
///
/// // Unsubscribe by dropping the handle
/// drop(handle);
/// # }
/// ```
pub struct ChangeSubscribers {
    inner: Arc<RwLock<ChangeSubscribersInner>>,
}

impl ChangeSubscribers {
    /// Create an empty subscriber registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ChangeSubscribersInner {
                callbacks: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe a callback to detected changes.
    ///
    /// The callback receives each new value exactly once per detected change.
    /// Returns a handle that can be dropped to unsubscribe.
    pub async fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, Box::new(callback)));

        SubscriptionHandle {
            id,
            subscribers: Arc::clone(&self.inner),
        }
    }

    /// Invoke every callback with a newly observed value.
    pub async fn notify_all(&self, value: &str) {
        let inner = self.inner.read().await;
        for (_id, callback) in &inner.callbacks {
            callback(value);
        }
    }

    /// Number of active subscribers.
    pub async fn subscriber_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.callbacks.len()
    }
}

impl Default for ChangeSubscribers {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ChangeSubscribers {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_subscribe_and_notify() {
        let subscribers = ChangeSubscribers::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        let _handle = subscribers
            .subscribe(move |value| {
                seen_clone.lock().unwrap().push(value.to_string());
            })
            .await;

        subscribers.notify_all("first").await;
        subscribers.notify_all("second").await;

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_see_the_same_value() {
        let subscribers = ChangeSubscribers::new();
        let seen1 = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::new(Mutex::new(Vec::new()));

        let seen1_clone = Arc::clone(&seen1);
        let _handle1 = subscribers
            .subscribe(move |value| seen1_clone.lock().unwrap().push(value.to_string()))
            .await;

        let seen2_clone = Arc::clone(&seen2);
        let _handle2 = subscribers
            .subscribe(move |value| seen2_clone.lock().unwrap().push(value.to_string()))
            .await;

        subscribers.notify_all("hello").await;

        assert_eq!(*seen1.lock().unwrap(), vec!["hello"]);
        assert_eq!(*seen2.lock().unwrap(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_unsubscribe_by_dropping_handle() {
        let subscribers = ChangeSubscribers::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        let handle = subscribers
            .subscribe(move |value| seen_clone.lock().unwrap().push(value.to_string()))
            .await;

        subscribers.notify_all("before").await;
        drop(handle);

        // Give the drop task time to complete
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        subscribers.notify_all("after").await;
        assert_eq!(*seen.lock().unwrap(), vec!["before"]);
    }

    #[tokio::test]
    async fn test_subscriber_count() {
        let subscribers = ChangeSubscribers::new();
        assert_eq!(subscribers.subscriber_count().await, 0);

        let _handle1 = subscribers.subscribe(|_| {}).await;
        let _handle2 = subscribers.subscribe(|_| {}).await;
        assert_eq!(subscribers.subscriber_count().await, 2);

        drop(_handle1);
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        assert_eq!(subscribers.subscriber_count().await, 1);
    }
}
