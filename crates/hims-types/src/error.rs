//! Unified error-code interface.
//!
//! Every error type in this workspace implements [`ErrorCode`] so logs and
//! monitoring see one stable, machine-readable vocabulary regardless of
//! which crate produced the error.

/// Machine-readable error code and recoverability, implemented by every
/// error type in the workspace.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, e.g. `"API_TIMEOUT"`
/// - Prefixed with the owning domain (`"GATE_"`, `"API_"`)
/// - Stable once published; changing a code is a breaking change
///
/// # Recoverability
///
/// An error is recoverable when retrying or user action can succeed
/// (timeouts, transient network failures). It is not recoverable when a
/// retry cannot change the answer (malformed response, closed session
/// feed).
///
/// # Example
///
/// ```
/// use hims_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum FetchError {
///     Timeout,
///     BadPayload,
/// }
///
/// impl ErrorCode for FetchError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::Timeout => "FETCH_TIMEOUT",
///             Self::BadPayload => "FETCH_BAD_PAYLOAD",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         matches!(self, Self::Timeout)
///     }
/// }
///
/// assert_eq!(FetchError::Timeout.code(), "FETCH_TIMEOUT");
/// ```
pub trait ErrorCode {
    /// Returns the machine-readable code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether a retry or user action can succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code follows the workspace conventions.
///
/// Intended for tests covering every variant of an error enum.
///
/// # Panics
///
/// Panics with a descriptive message when the code is empty, lacks the
/// expected prefix, or is not UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use hims_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Closed;
///
/// impl ErrorCode for Closed {
///     fn code(&self) -> &'static str { "GATE_SESSION_CLOSED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Closed, "GATE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();
    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Checks UPPER_SNAKE_CASE: uppercase/digits/underscore, no leading,
/// trailing, or doubled underscores.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl ErrorCode for TestError {
        fn code(&self) -> &'static str {
            match self {
                Self::Transient => "TEST_TRANSIENT",
                Self::Permanent => "TEST_PERMANENT",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Transient)
        }
    }

    #[test]
    fn trait_surface() {
        assert_eq!(TestError::Transient.code(), "TEST_TRANSIENT");
        assert!(TestError::Transient.is_recoverable());
        assert!(!TestError::Permanent.is_recoverable());
    }

    #[test]
    fn assert_accepts_conforming_codes() {
        assert_error_code(&TestError::Transient, "TEST_");
        assert_error_code(&TestError::Permanent, "TEST_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_rejects_wrong_prefix() {
        assert_error_code(&TestError::Transient, "OTHER_");
    }

    #[test]
    fn upper_snake_case_rules() {
        assert!(is_upper_snake_case("GATE_SESSION_CLOSED"));
        assert!(is_upper_snake_case("API_HTTP_500"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("gate_closed"));
        assert!(!is_upper_snake_case("_GATE"));
        assert!(!is_upper_snake_case("GATE_"));
        assert!(!is_upper_snake_case("GATE__CLOSED"));
    }
}
