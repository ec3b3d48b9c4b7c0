//! Navigation menu types
//!
//! Menu content is static configuration: the three trees below mirror
//! the employee, assessor, and HR menu sets of the platform. This
//! module carries no access-control logic beyond grouping items by
//! role; the decision logic lives in [`super::resolver`].

use serde::{Deserialize, Serialize};

/// A single menu entry
///
/// `target` is the role-relative path of the screen (e.g. `/job`); the
/// renderer combines it with the effective role's prefix to form the
/// full route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the sidebar
    pub label: String,

    /// Role-relative target path
    pub target: String,

    /// Nested submenu items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a leaf menu item
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            children: Vec::new(),
        }
    }

    /// Add a nested submenu item
    pub fn with_child(mut self, child: NavItem) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first iteration over this item and all descendants
    pub fn walk(&self) -> Vec<&NavItem> {
        let mut items = vec![self];
        for child in &self.children {
            items.extend(child.walk());
        }
        items
    }
}

/// The menu tree exposed to one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    /// Top-level menu items in display order
    pub items: Vec<NavItem>,
}

impl NavTree {
    /// Create a tree from top-level items
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// Depth-first iteration over every item in the tree
    pub fn walk(&self) -> Vec<&NavItem> {
        self.items.iter().flat_map(|item| item.walk()).collect()
    }

    /// Menu tree for regular employees
    pub fn employee() -> Self {
        Self::new(vec![
            NavItem::new("Dashboard", "/"),
            NavItem::new("My Assessments", "/my-assessments"),
            NavItem::new("My Profile", "/profile"),
        ])
    }

    /// Menu tree for assessors
    pub fn assessor() -> Self {
        Self::new(vec![
            NavItem::new("Dashboard", "/"),
            NavItem::new("Assessments", "/assessment")
                .with_child(NavItem::new("Assigned to Me", "/assessment"))
                .with_child(NavItem::new("Consensus Panels", "/consensus-assessment")),
            NavItem::new("My Profile", "/profile"),
        ])
    }

    /// Menu tree for HR staff
    pub fn hr() -> Self {
        Self::new(vec![
            NavItem::new("Dashboard", "/"),
            NavItem::new("Jobs", "/job")
                .with_child(NavItem::new("Job Catalog", "/job"))
                .with_child(NavItem::new("Job Competency Profiles", "/job-competency-profile")),
            NavItem::new("Competencies", "/competency"),
            NavItem::new("Employees", "/employee"),
            NavItem::new("Assessments", "/assessment")
                .with_child(NavItem::new("All Assessments", "/assessment"))
                .with_child(NavItem::new("Consensus Panels", "/consensus-assessment")),
            NavItem::new("Reports", "/report"),
        ])
    }
}

#[cfg(test)]
mod item_tests {
    use super::*;

    #[test]
    fn test_walk_covers_nested_items() {
        let tree = NavTree::hr();
        let labels: Vec<_> = tree.walk().iter().map(|i| i.label.as_str()).collect();
        assert!(labels.contains(&"Job Competency Profiles"));
        assert!(labels.contains(&"Reports"));
    }

    #[test]
    fn test_builder() {
        let item = NavItem::new("Jobs", "/job").with_child(NavItem::new("Catalog", "/job"));
        assert_eq!(item.children.len(), 1);
        assert_eq!(item.walk().len(), 2);
    }
}
