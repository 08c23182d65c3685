//! Notifications

use std::fmt;

use tracing::info;

/// Transient user-facing notification surface (toast or alert).
pub trait Notifier: fmt::Debug + Send + Sync {
    /// Show a transient message to the user.
    fn notify(&self, message: &str);
}

/// Notifier that forwards messages to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "marula::notify", "{message}");
    }
}
