//! API outcome normalization for the HIMS dashboard.
//!
//! Every remote operation in the dashboard funnels through
//! [`ResultNormalizer`], which turns the heterogeneous raw outcomes of the
//! generated API client into exactly one [`OperationResult`] and at most
//! one user [`Notification`].
//!
//! # Normalization Pipeline
//!
//! ```text
//! transport future ──► Result<RawOutcome<T>, TransportError>
//!                              │
//!            ResultNormalizer  ▼
//!   envelope success=true  ─► Ok(payload)        + success toast (opt-in)
//!   envelope success=false ─► Failed(message)    + error toast
//!   error / rejected call  ─► Errored(cause)     + error toast
//!   neither data nor error ─► Errored(empty)     + silence
//!                              │
//!                  into_value  ▼
//!                    Some(payload) | None
//! ```
//!
//! # Guarantees
//!
//! - **Exactly one outcome class per call** — the caller never sees a half
//!   success.
//! - **At most one notification per call** — success XOR error, never two;
//!   an error always notifies, a success notifies only when the caller
//!   asked for it.
//! - **Nothing rethrows** — every failure is caught, translated to a
//!   user-visible message, and returned as an absence of value. Callers
//!   treat `None` as "did not succeed" and stop their own chain.
//! - **No retained state** — no retries, no caching, no de-duplication;
//!   each call is independent.
//!
//! # Example
//!
//! ```
//! use hims_api::testing::RecordingNotifier;
//! use hims_api::{ApiEnvelope, CallOptions, RawOutcome, ResultNormalizer};
//! use std::sync::Arc;
//!
//! # #[derive(serde::Deserialize, Debug, Clone, PartialEq)]
//! # struct Patient { id: String }
//! # async fn demo() {
//! let notifier = Arc::new(RecordingNotifier::default());
//! let normalizer = ResultNormalizer::new(Arc::clone(&notifier));
//!
//! let call = async {
//!     Ok(RawOutcome::data(ApiEnvelope::ok(Patient { id: "42".into() })))
//! };
//! let patient = normalizer
//!     .run(call, CallOptions::new().with_success_message("Patient saved"))
//!     .await;
//!
//! assert_eq!(patient, Some(Patient { id: "42".into() }));
//! assert_eq!(notifier.successes().len(), 1);
//! # }
//! ```

mod envelope;
mod normalize;
mod notify;
mod outcome;
pub mod testing;
mod transport;

pub use envelope::{ApiEnvelope, RawOutcome};
pub use normalize::{CallOptions, ResultNormalizer};
pub use notify::{Notification, Notifier, Severity, TracingNotifier};
pub use outcome::OperationResult;
pub use transport::{TransportError, TransportErrorKind};
