//! Test doubles for the API layer.
//!
//! Shipped as a public module so downstream crates can assert on
//! notification behavior without a real toast surface.

use crate::{Notification, Notifier, Severity};
use parking_lot::Mutex;

/// A [`Notifier`] that records every notification instead of displaying
/// it.
///
/// # Example
///
/// ```
/// use hims_api::testing::RecordingNotifier;
/// use hims_api::{Notification, Notifier};
///
/// let notifier = RecordingNotifier::default();
/// notifier.notify(Notification::error("Network down"));
/// assert_eq!(notifier.errors(), vec!["Network down".to_string()]);
/// assert_eq!(notifier.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Returns every recorded notification, in order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Returns the messages of recorded success notifications.
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.messages_with(Severity::Success)
    }

    /// Returns the messages of recorded error notifications.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages_with(Severity::Error)
    }

    /// Returns the total number of notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    /// Returns `true` if nothing was notified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }

    fn messages_with(&self, severity: Severity) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
