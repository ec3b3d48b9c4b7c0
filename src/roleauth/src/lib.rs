//! # Skillgauge Role Authority
//!
//! Role-scoped navigation authorization for the skillgauge platform.
//!
//! A user account may carry several granted roles by historical
//! assignment; every authorization decision first collapses that set to
//! the single highest-privilege *effective role*, then scopes menu
//! items and routes by the URL-path prefixes that role may reach.
//!
//! ## Example
//!
//! ```rust
//! use skillgauge_roleauth::{NavAuthority, Role};
//!
//! let role = Role::effective(&[Role::Employee, Role::Hr]);
//! assert_eq!(role, Role::Hr);
//! assert_eq!(role.accessible_prefixes(), vec!["/hr", "/assessor", ""]);
//!
//! let authority = NavAuthority::new();
//! assert!(authority.is_active("/hr/job", "/job", Role::Hr));
//! assert!(!authority.is_active("/hr/job-competency-profile", "/job", Role::Hr));
//! ```

pub mod nav;
pub mod role;

// Re-export commonly used types
pub use nav::{NavAuthority, NavItem, NavTree};
pub use role::Role;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
