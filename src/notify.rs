//! Deny-path user notifications.
//!
//! Fire-and-forget: the guard emits, nobody acknowledges. The trait seam lets
//! the host wire in its toast UI; the shipped sink logs through `tracing`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One user-facing toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Error }
    }
}

/// Where deny-path notifications go.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the `tracing` log.
#[derive(Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => {
                tracing::warn!(title = %notification.title, description = %notification.description, "notification");
            }
            Severity::Info | Severity::Success => {
                tracing::info!(title = %notification.title, description = %notification.description, "notification");
            }
        }
    }
}
