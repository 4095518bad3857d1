//! Access decision tri-state.

/// The outcome of evaluating an
/// [`AccessRequirement`](crate::AccessRequirement) against a session.
///
/// # Variants
///
/// - `Granted`: the subtree may render
/// - `Denied`: the session lacks the required role/department
/// - `Pending`: the session has not resolved yet; decide nothing
///
/// `Pending` exists so a gate never flashes protected content (or a denial
/// redirect) while the session payload is still in flight. It is a decision
/// *about the input*, not a grant or a deny.
///
/// # Example
///
/// ```
/// use hims_access::AccessDecision;
///
/// let decision = AccessDecision::Denied;
/// assert!(decision.is_denied());
/// assert_eq!(decision.status_str(), "denied");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The requirement is satisfied; render the subtree.
    Granted,
    /// The requirement is not satisfied; the subtree must not render.
    Denied,
    /// The session is still resolving; render a neutral waiting state.
    Pending,
}

impl AccessDecision {
    /// Returns `true` if access was granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns `true` if access was denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Returns `true` if the session is still resolving.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the decision as a string, for logs.
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.status_str())
    }
}
