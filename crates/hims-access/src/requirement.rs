//! Declarative access requirements.

use hims_types::{Department, Role};
use serde::{Deserialize, Serialize};

/// The constraint attached to a protected subtree: which roles and/or which
/// staff departments may see it.
///
/// A requirement with both axes empty is representable but unsatisfiable —
/// it denies everyone. Callers always supply at least one axis; the empty
/// case exists so that deny-by-default holds even for a misdeclared gate.
///
/// The two axes combine **disjunctively**: a principal satisfying either
/// axis is granted. This mirrors "any admin OR any staff in this
/// department" rules and is a deliberate looseness, not a bug; see
/// [`RolePolicy`](crate::RolePolicy).
///
/// # Presets
///
/// The backend ships pre-built shortcuts for the common policies; the same
/// set is provided here so gate declarations read like the route table:
///
/// ```
/// use hims_access::AccessRequirement;
/// use hims_types::{Department, Role};
///
/// let req = AccessRequirement::pharmacy_access();
/// assert_eq!(req.departments(), &[Department::Pharmacy]);
///
/// let req = AccessRequirement::admin_only();
/// assert_eq!(req.roles(), &[Role::Admin]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRequirement {
    /// Roles allowed through the role axis.
    roles: Vec<Role>,
    /// Departments allowed through the department axis (staff only).
    departments: Vec<Department>,
}

impl AccessRequirement {
    /// Creates a requirement satisfied by any of the given roles.
    #[must_use]
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            departments: Vec::new(),
        }
    }

    /// Creates a requirement satisfied by staff of any of the given
    /// departments.
    #[must_use]
    pub fn for_departments(departments: impl IntoIterator<Item = Department>) -> Self {
        Self {
            roles: Vec::new(),
            departments: departments.into_iter().collect(),
        }
    }

    /// Adds a role to the role axis.
    #[must_use]
    pub fn or_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds a department to the department axis.
    #[must_use]
    pub fn or_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Admin-only access.
    #[must_use]
    pub fn admin_only() -> Self {
        Self::for_roles([Role::Admin])
    }

    /// Doctor-only access.
    #[must_use]
    pub fn doctor_only() -> Self {
        Self::for_roles([Role::Doctor])
    }

    /// Patient-only access.
    #[must_use]
    pub fn patient_only() -> Self {
        Self::for_roles([Role::Patient])
    }

    /// Registration desk staff.
    #[must_use]
    pub fn registration_access() -> Self {
        Self::for_departments([Department::Registration])
    }

    /// Pharmacy staff.
    #[must_use]
    pub fn pharmacy_access() -> Self {
        Self::for_departments([Department::Pharmacy])
    }

    /// Laboratory staff.
    #[must_use]
    pub fn lab_access() -> Self {
        Self::for_departments([Department::Lab])
    }

    /// Cashier staff.
    #[must_use]
    pub fn cashier_access() -> Self {
        Self::for_departments([Department::Cashier])
    }

    /// Returns the allowed roles.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns the allowed departments.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Returns `true` when both axes are empty — satisfiable by no one.
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        self.roles.is_empty() && self.departments.is_empty()
    }

    /// Returns `true` if the role axis allows this role.
    #[must_use]
    pub fn allows_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns `true` if the department axis allows this department.
    #[must_use]
    pub fn allows_department(&self, department: Department) -> bool {
        self.departments.contains(&department)
    }
}

impl std::fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unsatisfiable() {
            return f.write_str("nobody");
        }
        let roles: Vec<&str> = self.roles.iter().map(Role::as_str).collect();
        let departments: Vec<&str> = self
            .departments
            .iter()
            .map(Department::route_key)
            .collect();
        match (roles.is_empty(), departments.is_empty()) {
            (false, true) => write!(f, "roles={}", roles.join("|")),
            (true, false) => write!(f, "departments={}", departments.join("|")),
            _ => write!(
                f,
                "roles={} departments={}",
                roles.join("|"),
                departments.join("|")
            ),
        }
    }
}
