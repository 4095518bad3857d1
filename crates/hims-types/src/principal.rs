//! Principal (session identity) types.
//!
//! A [`Principal`] is the resolved identity of the current session: who is
//! looking at the dashboard, with what role and (for staff) which
//! department. [`SessionState`] wraps it in the session lifecycle — the
//! session provider resolves exactly once, from [`Resolving`] to either
//! [`Authenticated`] or [`Unauthenticated`], and may later drop back to
//! [`Unauthenticated`] on logout.
//!
//! # Design Rationale
//!
//! Principal lives in `hims-types`, not `hims-access`, because:
//!
//! 1. **No policy logic** — Principal is pure identity; whether it may see a
//!    page is the access layer's business.
//! 2. **Shared by both layers** — the API layer logs the acting principal,
//!    the access layer decides for it. Neither should depend on the other.
//!
//! `SessionState` is one tagged union rather than separate user / loading /
//! authenticated fields, so an "authenticated but user is null" state is
//! unrepresentable.
//!
//! [`Resolving`]: SessionState::Resolving
//! [`Authenticated`]: SessionState::Authenticated
//! [`Unauthenticated`]: SessionState::Unauthenticated

use crate::{Department, PrincipalId, Role};
use serde::{Deserialize, Serialize};

/// The resolved identity of the current session.
///
/// Immutable value type. Only [`Role::Staff`] principals carry a department;
/// the constructors make invalid combinations impossible to build.
///
/// # Example
///
/// ```
/// use hims_types::{Department, Principal, Role};
///
/// let doctor = Principal::doctor();
/// assert_eq!(doctor.role(), Role::Doctor);
/// assert!(doctor.department().is_none());
///
/// let pharmacist = Principal::staff(Department::Pharmacy);
/// assert_eq!(pharmacist.department(), Some(Department::Pharmacy));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Backend user id.
    id: PrincipalId,
    /// The user's role.
    role: Role,
    /// The staff department; always `None` for non-staff roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    department: Option<Department>,
}

impl Principal {
    /// Creates a principal from session payload parts.
    ///
    /// Prefer the role-specific constructors in code; this is the seam for
    /// deserialized session payloads. A department on a non-staff role is
    /// dropped, mirroring the backend which only reads `department` for
    /// staff.
    #[must_use]
    pub fn new(id: PrincipalId, role: Role, department: Option<Department>) -> Self {
        Self {
            id,
            role,
            department: if role.is_staff() { department } else { None },
        }
    }

    /// Creates an admin principal with a fresh id.
    #[must_use]
    pub fn admin() -> Self {
        Self::new(PrincipalId::new(), Role::Admin, None)
    }

    /// Creates a doctor principal with a fresh id.
    #[must_use]
    pub fn doctor() -> Self {
        Self::new(PrincipalId::new(), Role::Doctor, None)
    }

    /// Creates a staff principal in the given department, with a fresh id.
    #[must_use]
    pub fn staff(department: Department) -> Self {
        Self::new(PrincipalId::new(), Role::Staff, Some(department))
    }

    /// Creates a patient principal with a fresh id.
    #[must_use]
    pub fn patient() -> Self {
        Self::new(PrincipalId::new(), Role::Patient, None)
    }

    /// Returns the backend user id.
    #[must_use]
    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the staff department, or `None` for non-staff roles.
    #[must_use]
    pub fn department(&self) -> Option<Department> {
        self.department
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.department {
            Some(dept) => write!(f, "{}:{}@{}", self.role, dept.route_key(), self.id.uuid()),
            None => write!(f, "{}@{}", self.role, self.id.uuid()),
        }
    }
}

/// The session lifecycle as seen by the access layer.
///
/// | State | Meaning | Gate behavior |
/// |-------|---------|---------------|
/// | `Resolving` | Session payload not yet fetched | wait, render nothing |
/// | `Unauthenticated` | No valid session | redirect to login |
/// | `Authenticated` | Principal resolved | evaluate the requirement |
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for `SessionState`.**
///
/// Defaulting to `Resolving` would let a forgotten wiring step silently
/// park every gate in the waiting state; defaulting to anything else would
/// fabricate an authentication fact. Construction must be explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// The session provider has not resolved yet.
    Resolving,
    /// There is no authenticated session.
    Unauthenticated,
    /// The session resolved to this principal.
    Authenticated(Principal),
}

impl SessionState {
    /// Returns `true` while the session payload is still being fetched.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    /// Returns `true` if a principal is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the principal, if authenticated.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolving => f.write_str("resolving"),
            Self::Unauthenticated => f.write_str("unauthenticated"),
            Self::Authenticated(principal) => write!(f, "authenticated:{principal}"),
        }
    }
}
