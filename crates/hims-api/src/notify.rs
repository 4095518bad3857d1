//! User notifications.
//!
//! The normalizer's only user-visible side effect is a toast-style
//! notification. The surface that displays it is an external collaborator
//! behind the [`Notifier`] trait; the normalizer fires and forgets.

use tracing::{info, warn};

/// Notification severity. The dashboard's toast surface knows exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

impl Severity {
    /// Returns the severity as a string, for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A fire-and-forget notification event.
///
/// Not stored, not acknowledged; consumed by the notification surface and
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// How the toast should present.
    pub severity: Severity,
    /// The user-facing message.
    pub message: String,
}

impl Notification {
    /// A success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// An error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// The notification surface consumed by the normalizer.
///
/// Implementations must not block and must not fail observably; no return
/// value is consumed.
pub trait Notifier: Send + Sync {
    /// Displays the notification.
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// A [`Notifier`] that writes to the tracing log instead of a UI.
///
/// Useful for headless contexts (tests of page logic, background jobs)
/// where there is no toast surface but the one-notification-per-call
/// contract should still leave a trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!(message = %notification.message, "notification"),
            Severity::Error => warn!(message = %notification.message, "notification"),
        }
    }
}
