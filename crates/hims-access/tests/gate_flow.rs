//! End-to-end gate scenarios over a live session feed.

use hims_access::testing::RecordingNavigator;
use hims_access::{
    AccessGate, AccessRequirement, GateError, GateOutcome, GateWatcher, SessionSource,
};
use hims_types::{Department, Destination, Principal, SessionState};
use std::sync::Arc;

/// The full dashboard route table, one gate per protected section.
fn route_table() -> Vec<(&'static str, AccessGate)> {
    vec![
        ("admin", AccessGate::new(AccessRequirement::admin_only())),
        ("doctor", AccessGate::new(AccessRequirement::doctor_only())),
        ("patient", AccessGate::new(AccessRequirement::patient_only())),
        (
            "registration",
            AccessGate::new(AccessRequirement::registration_access()),
        ),
        (
            "pharmacy",
            AccessGate::new(AccessRequirement::pharmacy_access()),
        ),
        ("lab", AccessGate::new(AccessRequirement::lab_access())),
        (
            "cashier",
            AccessGate::new(AccessRequirement::cashier_access()),
        ),
    ]
}

#[test]
fn each_principal_renders_exactly_its_own_section() {
    let cases = [
        (Principal::admin(), "admin"),
        (Principal::doctor(), "doctor"),
        (Principal::patient(), "patient"),
        (Principal::staff(Department::Registration), "registration"),
        (Principal::staff(Department::Pharmacy), "pharmacy"),
        (Principal::staff(Department::Lab), "lab"),
        (Principal::staff(Department::Cashier), "cashier"),
    ];

    for (principal, own_section) in cases {
        let session = SessionState::Authenticated(principal);
        for (section, gate) in route_table() {
            let outcome = gate.evaluate(&session);
            if section == own_section {
                assert!(outcome.is_render(), "{section} should render");
            } else {
                assert!(
                    outcome.redirect().is_some(),
                    "{section} should redirect, got {outcome:?}"
                );
            }
        }
    }
}

#[test]
fn nested_gates_inner_is_authoritative() {
    // Outer: pharmacy section. Inner: an admin-only panel within it.
    let outer = AccessGate::new(AccessRequirement::pharmacy_access());
    let inner = AccessGate::new(AccessRequirement::admin_only());

    let pharmacist = SessionState::Authenticated(Principal::staff(Department::Pharmacy));

    // The pharmacist sees the outer subtree...
    assert_eq!(outer.evaluate(&pharmacist), GateOutcome::Render);
    // ...but not the admin panel inside it.
    assert_eq!(
        inner.evaluate(&pharmacist),
        GateOutcome::Redirect(Destination::PharmacyDashboard)
    );

    // An admin fails the outer gate outright; the inner gate is never
    // reached because its subtree does not render.
    let admin = SessionState::Authenticated(Principal::admin());
    assert_eq!(
        outer.evaluate(&admin),
        GateOutcome::Redirect(Destination::AdminDashboard)
    );
}

#[test]
fn no_content_flash_while_session_resolves() {
    let source = SessionSource::new();
    let gate = AccessGate::new(AccessRequirement::doctor_only());

    // Before resolution: wait, no redirect, no render.
    let outcome = gate.evaluate(&source.watch().current());
    assert_eq!(outcome, GateOutcome::Wait);

    // After resolution the same gate renders.
    source.resolve(Principal::doctor());
    assert_eq!(
        gate.evaluate(&source.watch().current()),
        GateOutcome::Render
    );
}

#[tokio::test]
async fn watcher_full_session_lifecycle() {
    let source = SessionSource::new();
    let nav = Arc::new(RecordingNavigator::default());
    let mut watcher = GateWatcher::new(
        AccessGate::new(AccessRequirement::cashier_access()),
        source.watch(),
        Arc::clone(&nav),
    );

    // Nothing resolved yet: first evaluation waits silently.
    assert_eq!(watcher.evaluate_now(), GateOutcome::Wait);
    assert!(nav.is_empty());

    // A lab tech resolves: wrong desk, redirected home.
    source.resolve(Principal::staff(Department::Lab));
    assert_eq!(
        watcher.evaluate_now(),
        GateOutcome::Redirect(Destination::LabDashboard)
    );
    assert_eq!(nav.redirects(), vec![Destination::LabDashboard]);

    // Feed ends: the run loop reports the closed session.
    drop(source);
    assert_eq!(watcher.run().await, Err(GateError::SessionClosed));
}

#[tokio::test]
async fn session_resolved_from_serialized_payload() {
    // Session payloads arrive as JSON from the profile endpoint; a gate
    // decision downstream must be identical to one built in code.
    let json = r#"{"id":"7f2c7d8e-3b4a-4a1d-9e5f-0c1b2a3d4e5f","role":"staff","department":"Laboratory"}"#;
    let principal: Principal = serde_json::from_str(json).expect("valid payload");

    let source = SessionSource::new();
    source.resolve(principal);

    let gate = AccessGate::new(AccessRequirement::lab_access());
    assert_eq!(
        gate.evaluate(&source.watch().current()),
        GateOutcome::Render
    );
}
