//! User roles.

use serde::{Deserialize, Serialize};

/// The role of a dashboard user, as issued by the backend.
///
/// The wire form is the lowercase string the backend stores
/// (`"admin"`, `"doctor"`, `"staff"`, `"patient"`).
///
/// # Role Semantics
///
/// | Role | Department | Dashboard |
/// |------|------------|-----------|
/// | `Admin` | never | `/dashboard/admin` |
/// | `Doctor` | never | `/dashboard/doctor` |
/// | `Staff` | always carries one | per department |
/// | `Patient` | never | `/dashboard/patient` |
///
/// Only `Staff` principals carry a [`Department`](crate::Department);
/// department-constrained access rules are meaningless for the other roles
/// and automatically fail for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator.
    Admin,
    /// Examining physician.
    Doctor,
    /// Clinic staff member; the department says which desk.
    Staff,
    /// Registered patient.
    Patient,
}

impl Role {
    /// All roles, in wire order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Staff, Role::Patient];

    /// Returns the lowercase wire form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Staff => "staff",
            Self::Patient => "patient",
        }
    }

    /// Returns `true` for [`Role::Staff`], the only role that carries a
    /// department.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Parses the wire form, case-insensitively (the backend lowercases
    /// before comparing).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "staff" => Ok(Self::Staff),
            "patient" => Ok(Self::Patient),
            other => Err(format!("unknown role: {other}")),
        }
    }
}
