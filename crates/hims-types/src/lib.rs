//! Core types for the HIMS dashboard.
//!
//! This crate provides the foundational identity and routing types shared
//! by the access-control layer (`hims-access`) and the API outcome layer
//! (`hims-api`).
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  hims-types     : Role, Department, Principal,          │
//! │                   SessionState, Destination  ◄── HERE   │
//! ├─────────────────────────────────────────────────────────┤
//! │  hims-access    : AccessRequirement, AccessPolicy,      │
//! │                   AccessGate, SessionSource             │
//! │  hims-api       : ApiEnvelope, OperationResult,         │
//! │                   ResultNormalizer, Notifier            │
//! ├─────────────────────────────────────────────────────────┤
//! │  dashboard pages (external): forms, tables, navigation  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Closed enumerations** — roles and departments are tagged unions, not
//!   free strings. An invalid role is a compile-time impossibility.
//! - **Identity only** — a [`Principal`] says *who* the session belongs to.
//!   Whether that principal may see a page is decided by `hims-access`;
//!   nothing here carries permission logic.
//! - **Value types** — everything is `Clone + PartialEq`, immutable for the
//!   duration of a render pass, and serde round-trippable against the
//!   backend's wire forms.
//!
//! # Example
//!
//! ```
//! use hims_types::{Department, Destination, Principal, Role, SessionState};
//!
//! let staff = Principal::staff(Department::Lab);
//! assert_eq!(staff.role(), Role::Staff);
//! assert_eq!(Destination::home_for(&staff), Destination::LabDashboard);
//!
//! let session = SessionState::Authenticated(staff);
//! assert!(session.is_authenticated());
//! ```

mod department;
mod error;
mod id;
mod principal;
mod role;
mod route;

pub use department::Department;
pub use error::{assert_error_code, ErrorCode};
pub use id::PrincipalId;
pub use principal::{Principal, SessionState};
pub use role::Role;
pub use route::Destination;
