//! Test doubles for the access layer.
//!
//! Shipped as a public module (not behind `cfg(test)`) so downstream
//! crates can drive gates in their own tests without wiring a real router.

use crate::Navigator;
use hims_types::Destination;
use parking_lot::Mutex;

/// A [`Navigator`] that records every redirect instead of navigating.
///
/// # Example
///
/// ```
/// use hims_access::testing::RecordingNavigator;
/// use hims_access::Navigator;
/// use hims_types::Destination;
///
/// let nav = RecordingNavigator::default();
/// nav.redirect(Destination::Login);
/// assert_eq!(nav.redirects(), vec![Destination::Login]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<Destination>>,
}

impl RecordingNavigator {
    /// Returns the recorded redirects, in order.
    #[must_use]
    pub fn redirects(&self) -> Vec<Destination> {
        self.redirects.lock().clone()
    }

    /// Returns the number of redirects performed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.redirects.lock().len()
    }

    /// Returns `true` if no redirect has been performed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.redirects.lock().is_empty()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, destination: Destination) {
        self.redirects.lock().push(destination);
    }
}
