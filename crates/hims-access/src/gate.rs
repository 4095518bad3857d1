//! The access gate: decision → render outcome.

use crate::{AccessDecision, AccessPolicy, AccessRequirement, RolePolicy};
use hims_types::{Destination, SessionState};
use std::sync::Arc;
use tracing::debug;

/// What the caller should do with the protected subtree for this render.
///
/// # Variants
///
/// - `Wait`: session still resolving — render a neutral waiting state, no
///   content, no redirect
/// - `Render`: access granted — render the children verbatim, the gate
///   imposes nothing else
/// - `Redirect`: access denied — navigate to the destination and render
///   nothing of the subtree
///
/// The redirect is data, not an action: the gate never navigates itself.
/// [`GateWatcher`](crate::GateWatcher) (or the caller's own effect hook)
/// performs it after the decision, so no protected child can run a side
/// effect first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render a neutral waiting state.
    Wait,
    /// Render the protected subtree.
    Render,
    /// Navigate away; render nothing of the subtree.
    Redirect(Destination),
}

impl GateOutcome {
    /// Returns `true` if the subtree should render.
    #[must_use]
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Returns `true` if the gate is waiting on session resolution.
    #[must_use]
    pub fn is_wait(&self) -> bool {
        matches!(self, Self::Wait)
    }

    /// Returns the redirect destination, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<Destination> {
        match self {
            Self::Redirect(dest) => Some(*dest),
            _ => None,
        }
    }
}

/// Wraps a protected subtree with an [`AccessRequirement`].
///
/// The gate owns no session state. [`evaluate`](Self::evaluate) is a pure
/// function of the session snapshot passed in, recomputed on every render
/// and every session transition — a logout flips the very next evaluation
/// from `Render` to `Redirect`.
///
/// # Redirect Targets
///
/// | Denied session | Destination |
/// |----------------|-------------|
/// | Unauthenticated | login page |
/// | Authenticated, explicit fallback set | the fallback |
/// | Authenticated, no fallback | the principal's own dashboard home |
///
/// A denied user goes to their own dashboard, not an error page: a lab
/// tech following a pharmacy link lands on the lab dashboard.
///
/// # Nesting
///
/// Gates compose by nesting. Each gate evaluates its own requirement
/// independently; a session satisfying an outer gate but not an inner one
/// renders the outer subtree with the inner subtree replaced by the inner
/// gate's redirect.
///
/// # Example
///
/// ```
/// use hims_access::{AccessGate, AccessRequirement, GateOutcome};
/// use hims_types::{Destination, SessionState};
///
/// let gate = AccessGate::new(AccessRequirement::doctor_only());
///
/// assert_eq!(gate.evaluate(&SessionState::Resolving), GateOutcome::Wait);
/// assert_eq!(
///     gate.evaluate(&SessionState::Unauthenticated),
///     GateOutcome::Redirect(Destination::Login),
/// );
/// ```
#[derive(Clone)]
pub struct AccessGate {
    requirement: AccessRequirement,
    fallback: Option<Destination>,
    policy: Arc<dyn AccessPolicy>,
}

impl AccessGate {
    /// Creates a gate for the given requirement, using the default
    /// [`RolePolicy`].
    #[must_use]
    pub fn new(requirement: AccessRequirement) -> Self {
        Self {
            requirement,
            fallback: None,
            policy: Arc::new(RolePolicy),
        }
    }

    /// Overrides the redirect target for denied-but-authenticated sessions.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Destination) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Replaces the decision policy. Intended for tests and staged
    /// rollouts of policy changes.
    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the gate's requirement.
    #[must_use]
    pub fn requirement(&self) -> &AccessRequirement {
        &self.requirement
    }

    /// Evaluates the gate against a session snapshot.
    ///
    /// Pure given the snapshot: no caching, no side effects. The redirect
    /// in the returned outcome has not been performed.
    #[must_use]
    pub fn evaluate(&self, session: &SessionState) -> GateOutcome {
        let decision = self.policy.decide(session, &self.requirement);
        let outcome = match decision {
            AccessDecision::Pending => GateOutcome::Wait,
            AccessDecision::Granted => GateOutcome::Render,
            AccessDecision::Denied => GateOutcome::Redirect(self.denied_destination(session)),
        };
        debug!(
            requirement = %self.requirement,
            session = %session,
            decision = decision.status_str(),
            "gate evaluated"
        );
        outcome
    }

    /// Picks where a denied session goes.
    fn denied_destination(&self, session: &SessionState) -> Destination {
        match session.principal() {
            None => Destination::Login,
            Some(principal) => self
                .fallback
                .unwrap_or_else(|| Destination::home_for(principal)),
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("requirement", &self.requirement)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessDecision;
    use hims_types::{Department, Principal};

    fn authed(principal: Principal) -> SessionState {
        SessionState::Authenticated(principal)
    }

    #[test]
    fn resolving_waits_without_redirect() {
        let gate = AccessGate::new(AccessRequirement::admin_only());
        let outcome = gate.evaluate(&SessionState::Resolving);
        assert!(outcome.is_wait());
        assert!(outcome.redirect().is_none());
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        let gate = AccessGate::new(AccessRequirement::admin_only());
        assert_eq!(
            gate.evaluate(&SessionState::Unauthenticated),
            GateOutcome::Redirect(Destination::Login)
        );
    }

    #[test]
    fn granted_renders_verbatim() {
        let gate = AccessGate::new(AccessRequirement::doctor_only());
        let outcome = gate.evaluate(&authed(Principal::doctor()));
        assert!(outcome.is_render());
    }

    #[test]
    fn denied_goes_to_own_dashboard_by_default() {
        let gate = AccessGate::new(AccessRequirement::admin_only());
        assert_eq!(
            gate.evaluate(&authed(Principal::staff(Department::Pharmacy))),
            GateOutcome::Redirect(Destination::PharmacyDashboard)
        );
        assert_eq!(
            gate.evaluate(&authed(Principal::patient())),
            GateOutcome::Redirect(Destination::PatientDashboard)
        );
    }

    #[test]
    fn explicit_fallback_wins_over_home() {
        let gate = AccessGate::new(AccessRequirement::admin_only())
            .with_fallback(Destination::Dashboard);
        assert_eq!(
            gate.evaluate(&authed(Principal::doctor())),
            GateOutcome::Redirect(Destination::Dashboard)
        );
    }

    #[test]
    fn fallback_does_not_apply_to_unauthenticated() {
        // Login always wins for missing sessions; the fallback targets
        // authenticated-but-wrong-role users only.
        let gate = AccessGate::new(AccessRequirement::admin_only())
            .with_fallback(Destination::Dashboard);
        assert_eq!(
            gate.evaluate(&SessionState::Unauthenticated),
            GateOutcome::Redirect(Destination::Login)
        );
    }

    #[test]
    fn logout_flips_render_to_redirect() {
        let gate = AccessGate::new(AccessRequirement::patient_only());
        let session = authed(Principal::patient());
        assert!(gate.evaluate(&session).is_render());
        // Same gate, next snapshot after logout.
        assert_eq!(
            gate.evaluate(&SessionState::Unauthenticated),
            GateOutcome::Redirect(Destination::Login)
        );
    }

    #[test]
    fn nested_gates_are_independent() {
        let outer = AccessGate::new(AccessRequirement::pharmacy_access());
        let inner = AccessGate::new(AccessRequirement::admin_only());
        let session = authed(Principal::staff(Department::Pharmacy));

        // Outer renders, inner redirects: the inner subtree does not render
        // while the rest of the outer subtree does.
        assert!(outer.evaluate(&session).is_render());
        assert_eq!(
            inner.evaluate(&session),
            GateOutcome::Redirect(Destination::PharmacyDashboard)
        );
    }

    #[test]
    fn custom_policy_is_consulted() {
        struct DenyAll;
        impl crate::AccessPolicy for DenyAll {
            fn decide(
                &self,
                _session: &SessionState,
                _requirement: &AccessRequirement,
            ) -> AccessDecision {
                AccessDecision::Denied
            }
        }

        let gate = AccessGate::new(AccessRequirement::admin_only())
            .with_policy(Arc::new(DenyAll));
        assert_eq!(
            gate.evaluate(&authed(Principal::admin())),
            GateOutcome::Redirect(Destination::AdminDashboard)
        );
    }
}
