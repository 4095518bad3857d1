//! Access-layer errors.
//!
//! Authorization denial is **not** an error: it resolves to a redirect
//! outcome and never surfaces as an exception. The only failure this layer
//! can observe is the session feed ending underneath a watcher.

use hims_types::ErrorCode;
use thiserror::Error;

/// Errors from the gate watch machinery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    /// The [`SessionSource`](crate::SessionSource) was dropped; no further
    /// session transitions will ever arrive.
    #[error("session source closed; no further session updates")]
    SessionClosed,
}

impl ErrorCode for GateError {
    fn code(&self) -> &'static str {
        match self {
            Self::SessionClosed => "GATE_SESSION_CLOSED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A dropped source never comes back; the app is tearing down.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hims_types::assert_error_code;

    #[test]
    fn codes_follow_conventions() {
        assert_error_code(&GateError::SessionClosed, "GATE_");
    }

    #[test]
    fn session_closed_is_terminal() {
        assert!(!GateError::SessionClosed.is_recoverable());
    }

    #[test]
    fn display_names_the_feed() {
        let msg = GateError::SessionClosed.to_string();
        assert!(msg.contains("session source closed"), "got: {msg}");
    }
}
