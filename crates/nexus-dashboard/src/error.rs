//! Error types for the dashboard shell and binary.
//!
//! [`DashboardError`] is the top-level error type that wraps every failure
//! mode during startup and shutdown.

/// Top-level error for the dashboard.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: nexus_core::config::ConfigError,
    },

    /// The event store could not be built.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: nexus_core::error::StoreError,
    },

    /// A marker popup failed to render.
    #[error("popup error: {source}")]
    Popup {
        /// The underlying template error.
        #[from]
        source: nexus_core::error::PopupError,
    },

    /// The live feed task panicked or was cancelled.
    #[error("live feed task failed: {source}")]
    LiveFeed {
        /// The underlying join error.
        #[from]
        source: tokio::task::JoinError,
    },

    /// Installing the shutdown signal handler failed.
    #[error("signal error: {source}")]
    Signal {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A state snapshot could not be serialized.
    #[error("snapshot error: {source}")]
    Snapshot {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
