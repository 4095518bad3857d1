//! Route-level authorization for the HIMS dashboard.
//!
//! Every role-scoped subtree of the dashboard is wrapped in an
//! [`AccessGate`]. The gate consults the pure [`AccessPolicy`] with the
//! current [`SessionState`](hims_types::SessionState) and turns the decision
//! into exactly one of three render outcomes: wait, render, or redirect.
//!
//! # Decision Pipeline
//!
//! ```text
//! SessionSource ──watch──► SessionState
//!                              │
//!            AccessRequirement │
//!                    ▼         ▼
//!              AccessPolicy::decide ──► AccessDecision
//!                                          │
//!                              AccessGate  ▼
//!                    Pending ─► Wait (render nothing, no redirect)
//!                    Denied  ─► Redirect (login or own dashboard)
//!                    Granted ─► Render (children untouched)
//! ```
//!
//! # Design Principles
//!
//! - **Deny by default** — an unauthenticated session, an unsatisfiable
//!   requirement, or a missing department all deny. Nothing grants
//!   implicitly.
//! - **Pure decisions, effectful edges** — [`AccessPolicy`] is a pure
//!   function of `(SessionState, AccessRequirement)`. The redirect side
//!   effect happens only in [`GateWatcher`], after the decision.
//! - **Explicit session state** — no ambient globals; every decision takes
//!   the session snapshot as a parameter, so the policy is unit-testable
//!   without any rendering machinery.
//! - **Gates nest** — each gate evaluates its own requirement
//!   independently; the innermost gate is authoritative for its subtree.
//!
//! # Example
//!
//! ```
//! use hims_access::{AccessGate, AccessRequirement, GateOutcome};
//! use hims_types::{Department, Destination, Principal, SessionState};
//!
//! let gate = AccessGate::new(AccessRequirement::lab_access());
//!
//! let lab_tech = SessionState::Authenticated(Principal::staff(Department::Lab));
//! assert_eq!(gate.evaluate(&lab_tech), GateOutcome::Render);
//!
//! let patient = SessionState::Authenticated(Principal::patient());
//! assert_eq!(
//!     gate.evaluate(&patient),
//!     GateOutcome::Redirect(Destination::PatientDashboard),
//! );
//! ```

mod decision;
mod error;
mod gate;
mod policy;
mod requirement;
mod session;
pub mod testing;
mod watcher;

pub use decision::AccessDecision;
pub use error::GateError;
pub use gate::{AccessGate, GateOutcome};
pub use policy::{AccessPolicy, RolePolicy};
pub use requirement::AccessRequirement;
pub use session::{SessionSource, SessionWatch};
pub use watcher::{GateWatcher, Navigator};

// Re-export the session types gates are evaluated against.
pub use hims_types::{Principal, SessionState};
