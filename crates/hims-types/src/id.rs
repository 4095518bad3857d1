//! Identifier types for the HIMS dashboard.
//!
//! Identifiers are UUID-based so they can be transmitted as-is between the
//! backend, the generated API client, and this layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a [`Principal`](crate::Principal) — the backend's user id.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for `PrincipalId`.**
///
/// A principal id always comes from the backend's user record. Minting one
/// implicitly would create an identity that no session can ever match.
/// Tests that need a fresh id call [`PrincipalId::new`] explicitly.
///
/// # Example
///
/// ```
/// use hims_types::PrincipalId;
///
/// let id = PrincipalId::new();
/// assert_ne!(id, PrincipalId::new());
/// assert!(format!("{id}").starts_with("user:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(pub Uuid);

impl PrincipalId {
    /// Creates a new random (UUID v4) principal id.
    ///
    /// Production code receives ids from the session payload; this is for
    /// tests and local fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing backend user id.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(PrincipalId::new(), PrincipalId::new());
    }

    #[test]
    fn from_uuid_round_trips() {
        let raw = Uuid::new_v4();
        let id = PrincipalId::from_uuid(raw);
        assert_eq!(id.uuid(), raw);
    }

    #[test]
    fn display_prefix() {
        let id = PrincipalId::new();
        let display = format!("{id}");
        assert!(display.starts_with("user:"));
        assert!(display.contains(&id.uuid().to_string()));
    }

    #[test]
    fn serde_transparent() {
        let id = PrincipalId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, matching the backend payload.
        assert_eq!(json, format!("\"{}\"", id.uuid()));
        let back: PrincipalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
