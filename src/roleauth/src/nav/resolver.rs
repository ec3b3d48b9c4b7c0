//! Navigation authority
//!
//! Pure decision logic the navigation renderer consults before drawing
//! menus and on every route change. Every call is a pure function of
//! its arguments; the authority holds only the static menu trees.

use super::types::NavTree;
use crate::role::Role;
use tracing::debug;

/// Decides which menu tree a role sees and which link is active
#[derive(Debug, Clone)]
pub struct NavAuthority {
    employee: NavTree,
    assessor: NavTree,
    hr: NavTree,
}

impl Default for NavAuthority {
    fn default() -> Self {
        Self {
            employee: NavTree::employee(),
            assessor: NavTree::assessor(),
            hr: NavTree::hr(),
        }
    }
}

impl NavAuthority {
    /// Create an authority over the built-in menu trees
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authority over caller-supplied menu trees
    pub fn with_trees(employee: NavTree, assessor: NavTree, hr: NavTree) -> Self {
        Self {
            employee,
            assessor,
            hr,
        }
    }

    /// Menu tree for an effective role
    ///
    /// Pure lookup; the trees are static configuration.
    pub fn navigation_set_for(&self, role: Role) -> &NavTree {
        match role {
            Role::Employee => &self.employee,
            Role::Assessor => &self.assessor,
            Role::Hr => &self.hr,
        }
    }

    /// Decide whether a link target is the currently active route
    ///
    /// For each prefix the role may access, the candidate full path is
    /// the prefixed target (the prefix is not applied twice when the
    /// target already carries it). A link is active only on an *exact*
    /// match with `current_path`: `/hr/job` must not light up while
    /// viewing `/hr/job-competency-profile`.
    pub fn is_active(&self, current_path: &str, target_path: &str, role: Role) -> bool {
        for prefix in role.accessible_prefixes() {
            let candidate = if prefix.is_empty() || target_path.starts_with(prefix) {
                target_path.to_string()
            } else {
                format!("{prefix}{target_path}")
            };

            if candidate == current_path {
                debug!(
                    current = current_path,
                    target = target_path,
                    %role,
                    prefix,
                    "active navigation match"
                );
                return true;
            }
        }

        false
    }

    /// Targets in the role's menu tree that are active for a path
    ///
    /// With exact matching this yields at most one target per rendered
    /// tree level; exposed for the renderer's highlight pass.
    pub fn active_targets<'a>(&'a self, current_path: &str, role: Role) -> Vec<&'a str> {
        self.navigation_set_for(role)
            .walk()
            .into_iter()
            .filter(|item| self.is_active(current_path, &item.target, role))
            .map(|item| item.target.as_str())
            .collect()
    }
}
