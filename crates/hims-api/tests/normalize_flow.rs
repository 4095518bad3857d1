//! End-to-end normalization scenarios, driven the way dashboard pages
//! drive the layer: fire a call, collapse the outcome, check the toast.

use hims_api::testing::RecordingNotifier;
use hims_api::{
    ApiEnvelope, CallOptions, OperationResult, RawOutcome, ResultNormalizer, TransportError,
    TransportErrorKind,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Visit {
    id: String,
    patient: String,
}

fn normalizer() -> (ResultNormalizer, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (ResultNormalizer::new(Arc::clone(&notifier)), notifier)
}

/// A page saves a visit; the body comes off the wire as JSON.
#[tokio::test]
async fn save_flow_from_wire_body() {
    let (normalizer, notifier) = normalizer();

    let call = async {
        let body = r#"{"success": true, "data": {"id": "v1", "patient": "p9"}}"#;
        let envelope: ApiEnvelope<Visit> =
            serde_json::from_str(body).map_err(|e| TransportError::message(e.to_string()))?;
        Ok(RawOutcome::data(envelope))
    };

    let visit = normalizer
        .run(call, CallOptions::new().with_success_message("Visit created"))
        .await;

    assert_eq!(
        visit,
        Some(Visit {
            id: "v1".into(),
            patient: "p9".into()
        })
    );
    assert_eq!(notifier.successes(), vec!["Visit created".to_string()]);
    assert_eq!(notifier.len(), 1);
}

/// A validation failure surfaces the backend's message and stops the
/// page's chain with `None`.
#[tokio::test]
async fn validation_failure_flow() {
    let (normalizer, notifier) = normalizer();

    let call = async {
        let body = r#"{"success": false, "message": "Duplicate username"}"#;
        let envelope: ApiEnvelope<Visit> =
            serde_json::from_str(body).map_err(|e| TransportError::message(e.to_string()))?;
        Ok(RawOutcome::data(envelope))
    };

    let visit = normalizer
        .run(call, CallOptions::new().with_success_message("never shown"))
        .await;

    assert_eq!(visit, None);
    assert!(notifier.successes().is_empty());
    assert_eq!(notifier.errors(), vec!["Duplicate username".to_string()]);
}

/// A network outage reaches the user as the probed structured message.
#[tokio::test]
async fn outage_flow() {
    let (normalizer, notifier) = normalizer();

    let call = async {
        Err::<RawOutcome<Visit>, _>(
            TransportError::new(TransportErrorKind::Status(503))
                .with_response_data(json!({"message": "Network down"})),
        )
    };

    let visit = normalizer.run(call, CallOptions::new()).await;

    assert_eq!(visit, None);
    assert_eq!(notifier.errors(), vec!["Network down".to_string()]);
    assert_eq!(notifier.len(), 1);
}

/// Pages that need to branch on the failure kind can use the full
/// outcome instead of the collapsed view.
#[tokio::test]
async fn full_outcome_distinguishes_failure_kinds() {
    let (normalizer, _notifier) = normalizer();

    let call = async { Ok(RawOutcome::<Visit>::data(ApiEnvelope::failed("taken"))) };
    let outcome = normalizer.normalize(call, CallOptions::new()).await;
    assert_eq!(outcome.failure_message(), Some("taken"));

    let call = async {
        Err::<RawOutcome<Visit>, _>(TransportError::new(TransportErrorKind::Timeout))
    };
    let outcome = normalizer.normalize(call, CallOptions::new()).await;
    assert_eq!(
        outcome.transport_error().map(TransportError::kind),
        Some(TransportErrorKind::Timeout)
    );
}

/// A burst of mixed calls on one shared normalizer: every completed call
/// produces exactly one notification, except the ambiguous one.
#[tokio::test]
async fn shared_normalizer_notification_accounting() {
    let (normalizer, notifier) = normalizer();
    let normalizer = Arc::new(normalizer);

    // success with toast
    normalizer
        .run(
            async {
                Ok(RawOutcome::data(ApiEnvelope::ok(Visit {
                    id: "1".into(),
                    patient: "a".into(),
                })))
            },
            CallOptions::new().with_success_message("Saved"),
        )
        .await;

    // silent success
    normalizer
        .run(
            async {
                Ok(RawOutcome::data(ApiEnvelope::ok(Visit {
                    id: "2".into(),
                    patient: "b".into(),
                })))
            },
            CallOptions::<Visit>::new(),
        )
        .await;

    // failure
    normalizer
        .run(
            async { Ok(RawOutcome::<Visit>::data(ApiEnvelope::failed("no"))) },
            CallOptions::new(),
        )
        .await;

    // transport error
    normalizer
        .run(
            async { Err::<RawOutcome<Visit>, _>(TransportError::message("boom")) },
            CallOptions::new(),
        )
        .await;

    // ambiguous: silent
    normalizer
        .run(
            async { Ok(RawOutcome::<Visit>::empty()) },
            CallOptions::new(),
        )
        .await;

    assert_eq!(notifier.successes(), vec!["Saved".to_string()]);
    assert_eq!(
        notifier.errors(),
        vec!["no".to_string(), "boom".to_string()]
    );
    assert_eq!(notifier.len(), 3);
}

/// A delete returning a bare acknowledgment still classifies as success.
#[tokio::test]
async fn bare_ack_flow() {
    let (normalizer, notifier) = normalizer();

    let call = async { Ok(RawOutcome::<Visit>::data(ApiEnvelope::ok_empty())) };
    let outcome = normalizer
        .normalize(call, CallOptions::new().with_success_message("Deleted"))
        .await;

    assert_eq!(outcome, OperationResult::Ok(None));
    assert_eq!(notifier.successes(), vec!["Deleted".to_string()]);
}
