//! The result normalizer: one outcome, at most one notification, per call.

use crate::{ApiEnvelope, Notification, Notifier, OperationResult, RawOutcome, TransportError};
use std::future::Future;
use tracing::{debug, warn};

/// Default message for an application-level failure with no message of its
/// own and no caller fallback.
const GENERIC_FAILURE: &str = "Operation failed";

/// Default message for a transport error that carried no message anywhere.
const GENERIC_ERROR: &str = "An unexpected error occurred.";

/// Per-call configuration: messages and callbacks.
///
/// All fields are optional; `CallOptions::new()` is the common case of
/// "notify me on error with whatever message the backend sent".
///
/// # Callbacks
///
/// - `on_success` receives the payload (`None` for bare acknowledgments
///   where the backend sent `success = true` with no data).
/// - `on_error` receives the resolved user-facing message, for both
///   application failures and transport errors.
///
/// Callbacks run synchronously inside the normalizer, after the
/// notification, before the outcome is returned.
pub struct CallOptions<T> {
    success_message: Option<String>,
    error_message: Option<String>,
    on_success: Option<Box<dyn FnOnce(Option<&T>) + Send>>,
    on_error: Option<Box<dyn FnOnce(&str) + Send>>,
}

impl<T> CallOptions<T> {
    /// Creates empty options: no success toast, backend/generic error
    /// messages, no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            success_message: None,
            error_message: None,
            on_success: None,
            on_error: None,
        }
    }

    /// Requests a success notification with this message.
    ///
    /// Without it, a successful call emits no notification at all — pages
    /// opt in per operation ("Patient saved", "Visit created").
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    /// Sets the fallback error message, used when neither the envelope nor
    /// the transport error carries one.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Sets the success callback.
    #[must_use]
    pub fn on_success(mut self, callback: impl FnOnce(Option<&T>) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Sets the error callback.
    #[must_use]
    pub fn on_error(mut self, callback: impl FnOnce(&str) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }
}

impl<T> Default for CallOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CallOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallOptions")
            .field("success_message", &self.success_message)
            .field("error_message", &self.error_message)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Converts raw transport outcomes into [`OperationResult`]s, emitting the
/// associated notification and callback as side effects.
///
/// One normalizer serves the whole dashboard; it holds only the
/// notification surface and no per-call state. Overlapping calls do not
/// coordinate — each is classified independently.
///
/// # The Ambiguous Branch
///
/// A call that completes with neither an envelope nor an error (possible
/// with the generated client's result object) is classified as
/// `Errored(empty_response)` but emits **no** notification and invokes no
/// callback: the caller sees a silent `None`. No contract pins this case
/// down, so the normalizer stays silent rather than guess at a message.
pub struct ResultNormalizer {
    notifier: Box<dyn Notifier>,
}

impl ResultNormalizer {
    /// Creates a normalizer over the given notification surface.
    #[must_use]
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self {
            notifier: Box::new(notifier),
        }
    }

    /// Executes a call and collapses the outcome to the caller contract:
    /// the payload on success, `None` otherwise.
    ///
    /// This is what page logic uses; [`normalize`](Self::normalize) is the
    /// same pipeline with the full outcome exposed.
    pub async fn run<T, F>(&self, call: F, options: CallOptions<T>) -> Option<T>
    where
        F: Future<Output = Result<RawOutcome<T>, TransportError>>,
    {
        self.normalize(call, options).await.into_value().flatten()
    }

    /// Executes a call and classifies its outcome.
    ///
    /// The payload position is `Option<T>` because the backend may answer
    /// `success = true` with no data (bare acknowledgments); that is still
    /// a success, toast included.
    pub async fn normalize<T, F>(
        &self,
        call: F,
        options: CallOptions<T>,
    ) -> OperationResult<Option<T>>
    where
        F: Future<Output = Result<RawOutcome<T>, TransportError>>,
    {
        let raw = call.await;
        let (outcome, notification) = self.classify(raw, &options);

        if let Some(notification) = notification {
            self.notifier.notify(notification);
        }

        match &outcome {
            OperationResult::Ok(payload) => {
                if let Some(callback) = options.on_success {
                    callback(payload.as_ref());
                }
            }
            OperationResult::Failed(message) => {
                if let Some(callback) = options.on_error {
                    callback(message);
                }
            }
            OperationResult::Errored(error) => {
                // The silent ambiguous branch skips the callback too.
                if error.kind() != crate::TransportErrorKind::EmptyResponse {
                    if let Some(callback) = options.on_error {
                        let fallback = options.error_message.as_deref().unwrap_or(GENERIC_ERROR);
                        callback(&error.user_message(fallback));
                    }
                }
            }
        }

        outcome
    }

    /// Pure classification: raw outcome in, `(outcome, notification)` out.
    fn classify<T>(
        &self,
        raw: Result<RawOutcome<T>, TransportError>,
        options: &CallOptions<T>,
    ) -> (OperationResult<Option<T>>, Option<Notification>) {
        match raw {
            Ok(RawOutcome {
                data: Some(envelope),
                ..
            }) => self.classify_envelope(envelope, options),
            // The client reported an error without rejecting; same path as
            // a rejection.
            Ok(RawOutcome {
                data: None,
                error: Some(error),
            }) => self.classify_error(error, options),
            Ok(RawOutcome {
                data: None,
                error: None,
            }) => {
                warn!("call completed with neither envelope nor error");
                (
                    OperationResult::Errored(TransportError::empty_response()),
                    None,
                )
            }
            Err(error) => self.classify_error(error, options),
        }
    }

    fn classify_envelope<T>(
        &self,
        envelope: ApiEnvelope<T>,
        options: &CallOptions<T>,
    ) -> (OperationResult<Option<T>>, Option<Notification>) {
        if envelope.success {
            debug!(status = "ok", "call normalized");
            let notification = options
                .success_message
                .as_ref()
                .map(|message| Notification::success(message.clone()));
            (OperationResult::Ok(envelope.data), notification)
        } else {
            let message = envelope
                .message
                .or_else(|| options.error_message.clone())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            debug!(status = "failed", message = %message, "call normalized");
            let notification = Some(Notification::error(message.clone()));
            (OperationResult::Failed(message), notification)
        }
    }

    fn classify_error<T>(
        &self,
        error: TransportError,
        options: &CallOptions<T>,
    ) -> (OperationResult<Option<T>>, Option<Notification>) {
        let fallback = options.error_message.as_deref().unwrap_or(GENERIC_ERROR);
        let message = error.user_message(fallback);
        warn!(status = "errored", kind = error.kind().as_str(), message = %message, "call normalized");
        (
            OperationResult::Errored(error),
            Some(Notification::error(message)),
        )
    }
}

impl std::fmt::Debug for ResultNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultNormalizer").finish_non_exhaustive()
    }
}
