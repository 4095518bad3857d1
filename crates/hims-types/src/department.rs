//! Staff departments.

use serde::{Deserialize, Serialize};

/// The department a staff member works in.
///
/// The backend's wire form is capitalized (`"Registration"`, `"Pharmacy"`,
/// `"Laboratory"`, `"Cashier"`) while the dashboard's route segments use a
/// short lowercase key (`"registration"`, `"pharmacy"`, `"lab"`,
/// `"cashier"`). Both spellings are accepted on input and the two accessors
/// make the distinction explicit:
///
/// - [`wire_name`](Self::wire_name) — what the backend sends
/// - [`route_key`](Self::route_key) — what appears in dashboard paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Front-desk patient registration.
    #[serde(rename = "Registration", alias = "registration")]
    Registration,
    /// Medicine dispensing.
    #[serde(rename = "Pharmacy", alias = "pharmacy")]
    Pharmacy,
    /// Laboratory tests. Note the wire/route mismatch: `"Laboratory"` on the
    /// wire, `"lab"` in routes.
    #[serde(rename = "Laboratory", alias = "lab", alias = "laboratory")]
    Lab,
    /// Billing and payment.
    #[serde(rename = "Cashier", alias = "cashier")]
    Cashier,
}

impl Department {
    /// All departments, in wire order.
    pub const ALL: [Department; 4] = [
        Department::Registration,
        Department::Pharmacy,
        Department::Lab,
        Department::Cashier,
    ];

    /// Returns the backend wire form.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Pharmacy => "Pharmacy",
            Self::Lab => "Laboratory",
            Self::Cashier => "Cashier",
        }
    }

    /// Returns the dashboard route key.
    #[must_use]
    pub fn route_key(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Pharmacy => "pharmacy",
            Self::Lab => "lab",
            Self::Cashier => "cashier",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for Department {
    type Err = String;

    /// Parses either spelling, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "registration" => Ok(Self::Registration),
            "pharmacy" => Ok(Self::Pharmacy),
            "lab" | "laboratory" => Ok(Self::Lab),
            "cashier" => Ok(Self::Cashier),
            other => Err(format!("unknown department: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn serializes_to_backend_form() {
        let json = serde_json::to_string(&Department::Lab).unwrap();
        assert_eq!(json, "\"Laboratory\"");
    }

    #[test]
    fn accepts_both_spellings() {
        let wire: Department = serde_json::from_str("\"Laboratory\"").unwrap();
        let route: Department = serde_json::from_str("\"lab\"").unwrap();
        assert_eq!(wire, Department::Lab);
        assert_eq!(route, Department::Lab);
    }

    #[test]
    fn wire_round_trip_all() {
        for dept in Department::ALL {
            let json = serde_json::to_string(&dept).unwrap();
            let back: Department = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dept);
        }
    }

    #[test]
    fn from_str_both_spellings() {
        assert_eq!(Department::from_str("lab").unwrap(), Department::Lab);
        assert_eq!(Department::from_str("Laboratory").unwrap(), Department::Lab);
        assert_eq!(
            Department::from_str("Registration").unwrap(),
            Department::Registration
        );
        assert!(Department::from_str("radiology").is_err());
    }

    #[test]
    fn route_keys_are_lowercase() {
        for dept in Department::ALL {
            let key = dept.route_key();
            assert_eq!(key, key.to_ascii_lowercase());
        }
    }
}
