//! Transport errors and message probing.
//!
//! A rejected call can carry its human-readable message at any of several
//! conventional locations, depending on which HTTP stack produced it:
//!
//! 1. `response.data.message` — axios-style structured rejection
//! 2. `body.message` — generated-client rejection
//! 3. the error's own message — a bare exception
//!
//! [`TransportError::user_message`] probes them in that order and falls
//! back to the caller-supplied (then generic) default, so every error
//! shape resolves to one user-facing message.

use hims_types::ErrorCode;
use thiserror::Error;

/// Coarse classification of how the transport failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Request timed out.
    Timeout,
    /// Could not reach the backend (DNS, refused connection, TLS).
    Connect,
    /// The response body could not be decoded.
    Decode,
    /// The backend answered with a non-success HTTP status.
    Status(u16),
    /// The call completed with neither a body nor an error. See the
    /// ambiguous branch in [`ResultNormalizer`](crate::ResultNormalizer).
    EmptyResponse,
    /// Anything else.
    Other,
}

impl TransportErrorKind {
    /// Returns the kind as a string, for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Decode => "decode",
            Self::Status(_) => "status",
            Self::EmptyResponse => "empty_response",
            Self::Other => "other",
        }
    }
}

/// An error raised by the transport collaborator.
///
/// Carries the optional structured bodies the probing order looks into;
/// absent fields simply fall through to the next candidate.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("transport error ({}): {}", self.kind.as_str(), self.probe().unwrap_or("no message"))]
pub struct TransportError {
    kind: TransportErrorKind,
    /// The error's own message, when it had one.
    message: Option<String>,
    /// Structured `response.data` body, when present.
    response_data: Option<serde_json::Value>,
    /// Structured error body, when present.
    body: Option<serde_json::Value>,
}

impl TransportError {
    /// Creates an error of the given kind with no message or bodies.
    #[must_use]
    pub fn new(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            message: None,
            response_data: None,
            body: None,
        }
    }

    /// A bare error carrying only its own message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Other,
            message: Some(message.into()),
            response_data: None,
            body: None,
        }
    }

    /// The marker for a call that completed with neither body nor error.
    #[must_use]
    pub fn empty_response() -> Self {
        Self::new(TransportErrorKind::EmptyResponse)
    }

    /// Attaches the error's own message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a structured `response.data` body.
    #[must_use]
    pub fn with_response_data(mut self, data: serde_json::Value) -> Self {
        self.response_data = Some(data);
        self
    }

    /// Attaches a structured error body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// Probes the conventional message locations in order; `None` when no
    /// shape carried one.
    #[must_use]
    pub fn probe(&self) -> Option<&str> {
        if let Some(msg) = self.response_data.as_ref().and_then(extract_message) {
            return Some(msg);
        }
        if let Some(msg) = self.body.as_ref().and_then(extract_message) {
            return Some(msg);
        }
        self.message.as_deref()
    }

    /// Returns the message to show the user, with the caller's fallback.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.probe().unwrap_or(fallback).to_string()
    }
}

/// Pulls a non-empty `message` string out of a structured body.
fn extract_message(value: &serde_json::Value) -> Option<&str> {
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}

impl ErrorCode for TransportError {
    fn code(&self) -> &'static str {
        match self.kind {
            TransportErrorKind::Timeout => "API_TIMEOUT",
            TransportErrorKind::Connect => "API_CONNECT",
            TransportErrorKind::Decode => "API_DECODE",
            TransportErrorKind::Status(_) => "API_HTTP_STATUS",
            TransportErrorKind::EmptyResponse => "API_EMPTY_RESPONSE",
            TransportErrorKind::Other => "API_TRANSPORT",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self.kind {
            // Transient: retrying the operation may succeed.
            TransportErrorKind::Timeout | TransportErrorKind::Connect => true,
            TransportErrorKind::Status(status) => status >= 500,
            TransportErrorKind::Decode
            | TransportErrorKind::EmptyResponse
            | TransportErrorKind::Other => false,
        }
    }
}
