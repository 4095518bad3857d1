//! Wire shapes of the generated API client.
//!
//! The backend wraps every response body in a standard envelope
//! (`{success, message, data}`), and the generated client wraps that again
//! in a result object that carries either the parsed body or a transport
//! error. Both layers are reproduced here so the normalizer can see
//! exactly what a page's call site sees.

use crate::TransportError;
use serde::Deserialize;

/// The backend's standard response body.
///
/// `success` is authoritative: a `200 OK` carrying `success = false` is an
/// application-level failure, not a transport one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable message, set on failures and some successes.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload; may be absent even on success (e.g. bare POST acks).
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// A success envelope carrying a payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A success envelope with no payload (bare acknowledgment).
    #[must_use]
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    /// A failure envelope with the backend's message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// What a generated-client call resolves to: a parsed envelope, a
/// transport error, or (in one under-specified corner) neither.
///
/// The neither case (`data: None, error: None`) represents a response that
/// carried no recognizable body yet raised no error. The normalizer maps
/// it to a silent non-success; see
/// [`ResultNormalizer`](crate::ResultNormalizer).
#[derive(Debug, Clone, PartialEq)]
pub struct RawOutcome<T> {
    /// The parsed response envelope, when the call produced one.
    pub data: Option<ApiEnvelope<T>>,
    /// The transport error, when the call failed without rejecting.
    pub error: Option<TransportError>,
}

impl<T> RawOutcome<T> {
    /// An outcome carrying a parsed envelope.
    #[must_use]
    pub fn data(envelope: ApiEnvelope<T>) -> Self {
        Self {
            data: Some(envelope),
            error: None,
        }
    }

    /// An outcome carrying a transport error.
    #[must_use]
    pub fn error(error: TransportError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// The ambiguous outcome: no envelope, no error.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}
