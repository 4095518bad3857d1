//! Session source: the publisher/subscriber pair for session state.
//!
//! The authentication provider (token storage + profile fetch) is an
//! external collaborator. It owns a [`SessionSource`]; everything that
//! needs the current session — gates, pages, the watcher — holds a
//! [`SessionWatch`].
//!
//! # Lifecycle
//!
//! ```text
//! SessionSource::new()            state = Resolving
//!     │
//!     ├── resolve(principal)      state = Authenticated   (at most once)
//!     ├── resolve_anonymous()     state = Unauthenticated (at most once)
//!     │
//!     └── logout()                state = Unauthenticated
//! ```
//!
//! Resolution happens exactly once per session lifetime; later profile
//! refreshes that change nothing are not broadcast (the watch channel
//! already deduplicates identical values on the consumer side via
//! `changed()` semantics only for actual sends, so the source itself skips
//! no-op publishes).

use crate::GateError;
use hims_types::{Principal, SessionState};
use tokio::sync::watch;
use tracing::{debug, warn};

/// The writable end of the session feed, owned by the authentication
/// provider.
///
/// # Example
///
/// ```
/// use hims_access::SessionSource;
/// use hims_types::{Principal, SessionState};
///
/// let source = SessionSource::new();
/// let watch = source.watch();
/// assert!(watch.current().is_resolving());
///
/// source.resolve(Principal::doctor());
/// assert!(watch.current().is_authenticated());
///
/// source.logout();
/// assert_eq!(watch.current(), SessionState::Unauthenticated);
/// ```
#[derive(Debug)]
pub struct SessionSource {
    tx: watch::Sender<SessionState>,
}

impl SessionSource {
    /// Creates a source in the [`Resolving`](SessionState::Resolving)
    /// state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Resolving);
        Self { tx }
    }

    /// Returns a new subscriber positioned at the current state.
    #[must_use]
    pub fn watch(&self) -> SessionWatch {
        SessionWatch {
            rx: self.tx.subscribe(),
        }
    }

    /// Resolves the session to an authenticated principal.
    ///
    /// Only valid from the `Resolving` state; a second resolution attempt
    /// is ignored with a warning, preserving resolve-once semantics.
    pub fn resolve(&self, principal: Principal) {
        self.transition_from_resolving(SessionState::Authenticated(principal));
    }

    /// Resolves the session as unauthenticated (no token, or the profile
    /// fetch failed).
    pub fn resolve_anonymous(&self) {
        self.transition_from_resolving(SessionState::Unauthenticated);
    }

    /// Drops the session. Valid from any state; every gate watching the
    /// feed re-evaluates immediately.
    pub fn logout(&self) {
        self.tx.send_if_modified(|state| {
            if *state == SessionState::Unauthenticated {
                return false;
            }
            debug!(from = %state, "session logout");
            *state = SessionState::Unauthenticated;
            true
        });
    }

    fn transition_from_resolving(&self, next: SessionState) {
        self.tx.send_if_modified(|state| {
            if !state.is_resolving() {
                warn!(current = %state, "session already resolved; ignoring");
                return false;
            }
            debug!(to = %next, "session resolved");
            *state = next;
            true
        });
    }
}

impl Default for SessionSource {
    fn default() -> Self {
        Self::new()
    }
}

/// The read end of the session feed.
///
/// Cheap to clone; every clone observes the same feed independently.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<SessionState>,
}

impl SessionWatch {
    /// Returns a snapshot of the current session state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// Returns the current state and marks it as seen, so a following
    /// [`changed`](Self::changed) waits for a genuinely newer transition.
    pub(crate) fn latest(&mut self) -> SessionState {
        self.rx.borrow_and_update().clone()
    }

    /// Waits for the next session transition.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::SessionClosed`] when the [`SessionSource`] has
    /// been dropped — there will never be another transition.
    pub async fn changed(&mut self) -> Result<(), GateError> {
        self.rx
            .changed()
            .await
            .map_err(|_| GateError::SessionClosed)
    }
}
