//! Presentation shell for the Nexus Crisis Intelligence dashboard.
//!
//! # Modules
//!
//! - [`error`] -- [`DashboardError`], the top-level error type.
//! - [`shell`] -- [`DashboardShell`], which owns UI state and drives the map
//!   and notification boundaries.

pub mod error;
pub mod shell;

pub use error::DashboardError;
pub use shell::{DashboardShell, DashboardSnapshot};
