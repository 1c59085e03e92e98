//! Error types for the `nexus-core` crate.
//!
//! Querying and report validation are total and never fail; errors only
//! arise while assembling the event store and rendering widget content.

use nexus_types::EventId;

/// Errors that can occur while building the immutable event store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Two events share the same identifier.
    #[error("duplicate event id: {0}")]
    DuplicateEvent(EventId),

    /// An event's coordinates are NaN or infinite.
    #[error("event {0} has non-finite coordinates")]
    NonFiniteCoordinates(EventId),

    /// A sample record carries an unparseable ISO 8601 timestamp.
    #[error("event {id} has invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The offending event.
        id: EventId,
        /// The raw timestamp text.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },
}

/// Errors that can occur while rendering a marker popup.
#[derive(Debug, thiserror::Error)]
pub enum PopupError {
    /// The popup template failed to compile or render.
    #[error("popup template error: {0}")]
    Template(#[from] minijinja::Error),
}
