//! Role model
//!
//! Roles form a strict total order of privilege:
//! `Hr` > `Assessor` > `Employee`. An `Hr` user can reach everything an
//! `Assessor` or `Employee` can reach, plus the HR-only screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A platform role
///
/// Variant order matters: the derived `Ord` is the privilege order, so
/// `Role::Hr > Role::Assessor > Role::Employee` holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee: own assessments and profile
    Employee,
    /// Assessor: assigned assessments and consensus panels
    Assessor,
    /// HR staff: full administration surface
    Hr,
}

impl Role {
    /// All roles, from least to most privileged
    pub const ALL: [Role; 3] = [Role::Employee, Role::Assessor, Role::Hr];

    /// Collapse a granted-role set to the single effective role
    ///
    /// Fixed priority scan over the closed role set: `Hr` wins if
    /// present, then `Assessor`, otherwise `Employee`. An empty grant
    /// set yields `Employee`. Total; never fails.
    pub fn effective(granted: &[Role]) -> Role {
        if granted.contains(&Role::Hr) {
            Role::Hr
        } else if granted.contains(&Role::Assessor) {
            Role::Assessor
        } else {
            Role::Employee
        }
    }

    /// Normalize a role name from the session provider
    ///
    /// Unrecognized names fall back to `Employee` (least privilege).
    /// This is a fail-safe normalization, not an error path.
    pub fn from_name(name: &str) -> Role {
        match name.to_ascii_lowercase().as_str() {
            "employee" => Role::Employee,
            "assessor" => Role::Assessor,
            "hr" => Role::Hr,
            other => {
                warn!(role = other, "unknown role name, defaulting to employee");
                Role::Employee
            }
        }
    }

    /// URL-path prefix owned by this role
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Employee => "",
            Role::Assessor => "/assessor",
            Role::Hr => "/hr",
        }
    }

    /// Path prefixes this role may access
    ///
    /// The prefixes of this role and every role below it in privilege
    /// order, from most to least privileged. A higher role's set is
    /// always a superset of a lower role's.
    pub fn accessible_prefixes(&self) -> Vec<&'static str> {
        match self {
            Role::Employee => vec![""],
            Role::Assessor => vec!["/assessor", ""],
            Role::Hr => vec!["/hr", "/assessor", ""],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Assessor => write!(f, "assessor"),
            Role::Hr => write!(f, "hr"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_order() {
        assert!(Role::Hr > Role::Assessor);
        assert!(Role::Assessor > Role::Employee);
    }

    #[test]
    fn test_effective_priority_scan() {
        assert_eq!(Role::effective(&[Role::Employee, Role::Hr]), Role::Hr);
        assert_eq!(
            Role::effective(&[Role::Assessor, Role::Employee]),
            Role::Assessor
        );
        assert_eq!(Role::effective(&[Role::Employee]), Role::Employee);
        // Empty grant set defaults to least privilege
        assert_eq!(Role::effective(&[]), Role::Employee);
    }

    #[test]
    fn test_from_name_normalization() {
        assert_eq!(Role::from_name("hr"), Role::Hr);
        assert_eq!(Role::from_name("HR"), Role::Hr);
        assert_eq!(Role::from_name("assessor"), Role::Assessor);
        // Unknown names are least privilege, never an error
        assert_eq!(Role::from_name("superadmin"), Role::Employee);
        assert_eq!(Role::from_name(""), Role::Employee);
    }

    #[test]
    fn test_prefix_sets_are_nested() {
        let employee = Role::Employee.accessible_prefixes();
        let assessor = Role::Assessor.accessible_prefixes();
        let hr = Role::Hr.accessible_prefixes();

        assert_eq!(employee, vec![""]);
        assert!(employee.iter().all(|p| assessor.contains(p)));
        assert!(assessor.iter().all(|p| hr.contains(p)));
    }
}
