//! The tri-state operation outcome.

use crate::TransportError;

/// The outcome of one normalized remote operation.
///
/// # Variants
///
/// - `Ok`: the backend reported success; carries the unwrapped payload
/// - `Failed`: the backend explicitly reported failure (`success = false`);
///   carries the user-facing message
/// - `Errored`: the transport failed (network, decode, rejection)
///
/// # The Null Collapse
///
/// Dashboard call sites consume outcomes through
/// [`into_value`](Self::into_value), which collapses `Failed` and
/// `Errored` into `None`. Callers genuinely cannot distinguish an
/// application failure from a transport error today — they only observe
/// that the operation did not succeed and stop their own chain. This is a
/// known expressiveness gap carried over deliberately; the full enum is
/// public so a future caller *can* branch on the kind.
///
/// # Example
///
/// ```
/// use hims_api::OperationResult;
///
/// let ok: OperationResult<u32> = OperationResult::Ok(7);
/// assert_eq!(ok.into_value(), Some(7));
///
/// let failed: OperationResult<u32> = OperationResult::Failed("taken".into());
/// assert_eq!(failed.into_value(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T> {
    /// The operation succeeded with this payload.
    Ok(T),
    /// The backend reported failure with this message.
    Failed(String),
    /// The transport failed.
    Errored(TransportError),
}

impl<T> OperationResult<T> {
    /// Returns `true` on success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` on an application-level failure.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` on a transport error.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }

    /// Returns the failure message, for `Failed` outcomes.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the transport error, for `Errored` outcomes.
    #[must_use]
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Errored(error) => Some(error),
            _ => None,
        }
    }

    /// Collapses the outcome into the caller contract: the payload on
    /// success, `None` otherwise. See the type-level docs for why the two
    /// failure kinds are indistinguishable here.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) | Self::Errored(_) => None,
        }
    }

    /// Returns the outcome class as a string, for logs.
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::Failed(_) => "failed",
            Self::Errored(_) => "errored",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportErrorKind;

    #[test]
    fn ok_helpers() {
        let outcome: OperationResult<&str> = OperationResult::Ok("payload");
        assert!(outcome.is_ok());
        assert!(!outcome.is_failed());
        assert!(!outcome.is_errored());
        assert_eq!(outcome.status_str(), "ok");
        assert_eq!(outcome.into_value(), Some("payload"));
    }

    #[test]
    fn failed_helpers() {
        let outcome: OperationResult<()> = OperationResult::Failed("Duplicate username".into());
        assert!(outcome.is_failed());
        assert_eq!(outcome.failure_message(), Some("Duplicate username"));
        assert_eq!(outcome.status_str(), "failed");
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn errored_helpers() {
        let outcome: OperationResult<()> =
            OperationResult::Errored(TransportError::new(TransportErrorKind::Timeout));
        assert!(outcome.is_errored());
        assert_eq!(
            outcome.transport_error().map(TransportError::kind),
            Some(TransportErrorKind::Timeout)
        );
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn collapse_loses_the_failure_kind() {
        // Both non-success kinds collapse to the same None; this is the
        // documented caller contract.
        let failed: OperationResult<u8> = OperationResult::Failed("x".into());
        let errored: OperationResult<u8> =
            OperationResult::Errored(TransportError::message("x"));
        assert_eq!(failed.into_value(), errored.into_value());
    }
}
