//! Post-decision effects: redirect on deny, re-evaluate on change.
//!
//! The gate itself only computes outcomes; performing the redirect is a
//! side effect that must happen *after* the decision and *before* any
//! protected child runs its own effects. [`GateWatcher`] owns that
//! sequencing: it evaluates once up front, then again on every session
//! transition, handing redirects to the injected [`Navigator`].

use crate::{AccessGate, GateError, GateOutcome, SessionWatch};
use hims_types::Destination;
use tracing::debug;

/// Fire-and-forget navigation surface.
///
/// The concrete implementation belongs to the routing layer (a browser
/// history push, a CLI screen switch). It must be cheap and must not
/// block; the watcher calls it at most once per session transition.
pub trait Navigator: Send + Sync {
    /// Navigates to the destination, replacing the current location.
    fn redirect(&self, destination: Destination);
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn redirect(&self, destination: Destination) {
        (**self).redirect(destination);
    }
}

/// Drives an [`AccessGate`] against a live session feed.
///
/// # Behavior
///
/// - Evaluates immediately on [`run`](Self::run) entry, then after every
///   session transition.
/// - `Redirect` outcomes are forwarded to the [`Navigator`] exactly once
///   per evaluation — a logout while rendered triggers the redirect on the
///   very next transition, unmounting semantics included.
/// - `Wait` and `Render` outcomes produce no navigation.
/// - Returns when the session source is dropped.
///
/// # Example
///
/// ```
/// use hims_access::{AccessGate, AccessRequirement, GateWatcher, Navigator, SessionSource};
/// use hims_types::{Destination, Principal};
///
/// #[derive(Debug)]
/// struct NoopNav;
/// impl Navigator for NoopNav {
///     fn redirect(&self, _destination: Destination) {}
/// }
///
/// # async fn demo() -> Result<(), hims_access::GateError> {
/// let source = SessionSource::new();
/// let gate = AccessGate::new(AccessRequirement::admin_only());
/// let mut watcher = GateWatcher::new(gate, source.watch(), NoopNav);
///
/// source.resolve(Principal::admin());
/// // Runs until `source` is dropped.
/// # drop(source);
/// watcher.run().await?;
/// # Ok(())
/// # }
/// ```
pub struct GateWatcher<N: Navigator> {
    gate: AccessGate,
    session: SessionWatch,
    navigator: N,
}

impl<N: Navigator> GateWatcher<N> {
    /// Creates a watcher over the gate, session feed, and navigator.
    #[must_use]
    pub fn new(gate: AccessGate, session: SessionWatch, navigator: N) -> Self {
        Self {
            gate,
            session,
            navigator,
        }
    }

    /// Evaluates the gate against the current session snapshot and
    /// performs the redirect effect if the outcome calls for one.
    ///
    /// Exposed for callers that drive re-evaluation themselves (e.g. a
    /// per-frame render loop) instead of running the watch loop.
    pub fn evaluate_now(&self) -> GateOutcome {
        self.apply(&self.session.current())
    }

    /// Runs until the session source is dropped.
    ///
    /// Session transitions coalesce: if several land between evaluations,
    /// only the latest state is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::SessionClosed`] when the feed ends; callers
    /// that treat teardown as normal shutdown can match on it.
    pub async fn run(&mut self) -> Result<(), GateError> {
        loop {
            let snapshot = self.session.latest();
            self.apply(&snapshot);
            self.session.changed().await?;
        }
    }

    fn apply(&self, snapshot: &hims_types::SessionState) -> GateOutcome {
        let outcome = self.gate.evaluate(snapshot);
        if let GateOutcome::Redirect(destination) = outcome {
            debug!(destination = %destination, "gate redirect");
            self.navigator.redirect(destination);
        }
        outcome
    }
}
