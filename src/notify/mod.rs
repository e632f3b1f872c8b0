//! Outbound change notification.
//!
//! Builds the request URL for a changed value and delivers it through a
//! [`Notifier`]. Delivery is best-effort: the watcher discards every outcome
//! after logging it, so implementations report failures through `Result`
//! instead of retrying internally.

mod callback;
mod channel;
#[cfg(feature = "http")]
mod http;
mod notifier;

pub use callback::{CallbackUrl, VALUE_PARAM, extract_value};
pub use channel::ChannelNotifier;
#[cfg(feature = "http")]
pub use http::HttpNotifier;
pub use notifier::Notifier;
