//! Event store, query engine and widget boundaries for the Nexus dashboard.
//!
//! Everything here is headless. The presentation shell in `nexus-dashboard`
//! owns UI state and calls into these modules on each interaction.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `nexus-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Store and popup error types.
//! - [`live`] -- Live mode ticker that fabricates notifications.
//! - [`map`] -- [`MapSurface`] trait, marker styling and the map controller.
//! - [`notify`] -- [`Notifier`] and [`AudioCue`] sinks.
//! - [`panels`] -- Health sentinel, resilience hub and civic reporter content.
//! - [`query`] -- Search, filter and sort over crisis events.
//! - [`report`] -- Mock civic issue submission.
//! - [`sample`] -- Built-in sample data.
//! - [`store`] -- Immutable in-memory event store.
//! - [`summary`] -- Stat card and filter bar counters.
//!
//! [`MapSurface`]: map::MapSurface
//! [`Notifier`]: notify::Notifier
//! [`AudioCue`]: notify::AudioCue

pub mod config;
pub mod error;
pub mod live;
pub mod map;
pub mod notify;
pub mod panels;
pub mod query;
pub mod report;
pub mod sample;
pub mod store;
pub mod summary;
