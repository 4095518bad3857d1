//! Dashboard redirect destinations.
//!
//! With [`Role`] and [`Department`] as closed enums, the role-to-path table
//! needs no free-string fallbacks; the mapping below is exact and total.

use crate::{Department, Principal, Role};
use serde::{Deserialize, Serialize};

/// A navigation target the gate may redirect to.
///
/// # Example
///
/// ```
/// use hims_types::{Department, Destination, Principal};
///
/// assert_eq!(Destination::Login.path(), "/login");
/// assert_eq!(
///     Destination::home_for(&Principal::staff(Department::Cashier)),
///     Destination::CashierDashboard,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The login page.
    Login,
    /// The generic dashboard landing page.
    Dashboard,
    /// Admin home.
    AdminDashboard,
    /// Doctor home.
    DoctorDashboard,
    /// Patient home.
    PatientDashboard,
    /// Registration desk home.
    RegistrationDashboard,
    /// Pharmacy home.
    PharmacyDashboard,
    /// Laboratory home.
    LabDashboard,
    /// Cashier home.
    CashierDashboard,
}

impl Destination {
    /// Returns the route path for this destination.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::AdminDashboard => "/dashboard/admin",
            Self::DoctorDashboard => "/dashboard/doctor",
            Self::PatientDashboard => "/dashboard/patient",
            Self::RegistrationDashboard => "/dashboard/registration",
            Self::PharmacyDashboard => "/dashboard/pharmacy",
            Self::LabDashboard => "/dashboard/lab",
            Self::CashierDashboard => "/dashboard/cashier",
        }
    }

    /// Returns the dashboard home for a principal.
    ///
    /// This is where a denied-but-authenticated user is sent: their own
    /// dashboard, not an error page.
    #[must_use]
    pub fn home_for(principal: &Principal) -> Self {
        match principal.role() {
            Role::Admin => Self::AdminDashboard,
            Role::Doctor => Self::DoctorDashboard,
            Role::Patient => Self::PatientDashboard,
            Role::Staff => match principal.department() {
                Some(Department::Registration) => Self::RegistrationDashboard,
                Some(Department::Pharmacy) => Self::PharmacyDashboard,
                Some(Department::Lab) => Self::LabDashboard,
                Some(Department::Cashier) => Self::CashierDashboard,
                // Staff without a department has no desk to land on.
                None => Self::Dashboard,
            },
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
