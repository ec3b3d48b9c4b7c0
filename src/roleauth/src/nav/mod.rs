//! Role-scoped navigation
//!
//! Static menu trees per role plus the active-path decision consumed by
//! the navigation renderer on every route change.

pub mod resolver;
pub mod types;

pub use resolver::NavAuthority;
pub use types::{NavItem, NavTree};
