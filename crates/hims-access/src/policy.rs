//! Abstract access policy and the default role/department implementation.
//!
//! # Design
//!
//! Policy is separated from the types it judges:
//!
//! - [`SessionState`]: the session snapshot (resolving / anonymous /
//!   principal)
//! - [`AccessRequirement`]: the declarative constraint on a subtree
//! - [`AccessPolicy`]: decides whether the session satisfies the constraint
//!
//! This separation allows strict or permissive policies in tests, and
//! policy changes without touching the gate or the types.

use crate::{AccessDecision, AccessRequirement};
use hims_types::SessionState;

/// Abstract access policy for session-based route protection.
///
/// Implementations must be **pure**: same inputs, same decision, no I/O.
/// The gate recomputes the decision on every session change and every
/// requirement; nothing may be cached across calls.
///
/// # Example
///
/// ```
/// use hims_access::{AccessDecision, AccessPolicy, AccessRequirement};
/// use hims_types::SessionState;
///
/// /// Denies everything while the site is in maintenance.
/// struct MaintenancePolicy;
///
/// impl AccessPolicy for MaintenancePolicy {
///     fn decide(
///         &self,
///         _session: &SessionState,
///         _requirement: &AccessRequirement,
///     ) -> AccessDecision {
///         AccessDecision::Denied
///     }
/// }
/// ```
pub trait AccessPolicy: Send + Sync {
    /// Decides whether `session` satisfies `requirement`.
    fn decide(&self, session: &SessionState, requirement: &AccessRequirement) -> AccessDecision;
}

/// The default dashboard policy.
///
/// # Rules
///
/// 1. A resolving session is [`Pending`](AccessDecision::Pending),
///    regardless of the requirement.
/// 2. An unauthenticated session is [`Denied`](AccessDecision::Denied).
/// 3. The role axis grants when the principal's role is in the allowed set.
/// 4. The department axis grants when the principal carries a department
///    (staff only) that is in the allowed set. A principal without a
///    department automatically fails this axis.
/// 5. The axes combine **disjunctively**: either one grants. This is the
///    documented looseness of the route table ("any admin OR any pharmacy
///    staff"); a requirement that wants conjunction does not exist in
///    current policies.
/// 6. Anything else — including an empty requirement — is denied.
///
/// # Example
///
/// ```
/// use hims_access::{AccessDecision, AccessPolicy, AccessRequirement, RolePolicy};
/// use hims_types::{Department, Principal, SessionState};
///
/// let policy = RolePolicy;
/// let req = AccessRequirement::admin_only().or_department(Department::Pharmacy);
///
/// let pharmacist = SessionState::Authenticated(Principal::staff(Department::Pharmacy));
/// assert_eq!(policy.decide(&pharmacist, &req), AccessDecision::Granted);
///
/// let doctor = SessionState::Authenticated(Principal::doctor());
/// assert_eq!(policy.decide(&doctor, &req), AccessDecision::Denied);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn decide(&self, session: &SessionState, requirement: &AccessRequirement) -> AccessDecision {
        let principal = match session {
            SessionState::Resolving => return AccessDecision::Pending,
            SessionState::Unauthenticated => return AccessDecision::Denied,
            SessionState::Authenticated(principal) => principal,
        };

        if requirement.allows_role(principal.role()) {
            return AccessDecision::Granted;
        }

        if let Some(department) = principal.department() {
            if requirement.allows_department(department) {
                return AccessDecision::Granted;
            }
        }

        AccessDecision::Denied
    }
}
