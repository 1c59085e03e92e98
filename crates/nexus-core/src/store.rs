//! Immutable, in-memory crisis event store.
//!
//! The store is built once at startup and never altered. It hands out shared
//! slices of its records so every view (queries, map markers, the live feed)
//! borrows the same values. Cloning an [`EventStore`] is cheap: the records
//! live behind an [`Arc`].

use std::collections::BTreeMap;
use std::sync::Arc;

use nexus_types::{CrisisEvent, EventId};
use tracing::debug;

use crate::error::StoreError;
use crate::sample;

/// Read-only collection of crisis events with unique identifiers.
#[derive(Debug, Clone)]
pub struct EventStore {
    /// All events in their original collection order.
    events: Arc<[CrisisEvent]>,
    /// Position of each event in `events`, keyed by identifier.
    index: Arc<BTreeMap<EventId, usize>>,
}

impl EventStore {
    /// Build a store from a list of events, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEvent`] if two events share an id, or
    /// [`StoreError::NonFiniteCoordinates`] if a location is NaN or infinite.
    pub fn new(events: Vec<CrisisEvent>) -> Result<Self, StoreError> {
        let mut index = BTreeMap::new();
        for (position, event) in events.iter().enumerate() {
            if !event.location.point().is_finite() {
                return Err(StoreError::NonFiniteCoordinates(event.id.clone()));
            }
            if index.insert(event.id.clone(), position).is_some() {
                return Err(StoreError::DuplicateEvent(event.id.clone()));
            }
        }
        debug!(event_count = events.len(), "event store built");
        Ok(Self {
            events: events.into(),
            index: Arc::new(index),
        })
    }

    /// Build a store holding the built-in sample events.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the sample data fails validation.
    pub fn with_sample_data() -> Result<Self, StoreError> {
        Self::new(sample::sample_events()?)
    }

    /// An empty store.
    pub fn empty() -> Self {
        Self {
            events: Arc::from(Vec::new()),
            index: Arc::new(BTreeMap::new()),
        }
    }

    /// All events in collection order.
    pub fn all(&self) -> &[CrisisEvent] {
        &self.events
    }

    /// Look up an event by identifier.
    pub fn get(&self, id: &EventId) -> Option<&CrisisEvent> {
        self.index
            .get(id)
            .and_then(|position| self.events.get(*position))
    }

    /// Whether an event with this identifier exists.
    pub fn contains(&self, id: &EventId) -> bool {
        self.index.contains_key(id)
    }

    /// The first event in collection order, if any.
    pub fn first(&self) -> Option<&CrisisEvent> {
        self.events.first()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, CrisisEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a CrisisEvent;
    type IntoIter = std::slice::Iter<'a, CrisisEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CrisisEvent> {
        sample::sample_events().ok().unwrap_or_default()
    }

    #[test]
    fn sample_store_indexes_every_event() {
        let store = EventStore::with_sample_data();
        assert!(store.is_ok());
        let store = store.ok().unwrap_or_else(EventStore::empty);
        assert_eq!(store.len(), 6);
        let chennai = store.get(&EventId::new("5"));
        assert_eq!(chennai.map(|e| e.location.name.as_str()), Some("Chennai"));
        assert!(store.get(&EventId::new("missing")).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut events = sample();
        let copy = events.first().cloned();
        events.extend(copy);
        let result = EventStore::new(events);
        assert!(matches!(result, Err(StoreError::DuplicateEvent(id)) if id.as_str() == "1"));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut events = sample();
        if let Some(first) = events.first_mut() {
            first.location.latitude = f64::NAN;
        }
        let result = EventStore::new(events);
        assert!(matches!(result, Err(StoreError::NonFiniteCoordinates(_))));
    }

    #[test]
    fn store_preserves_collection_order() {
        let store = EventStore::new(sample()).ok().unwrap_or_else(EventStore::empty);
        let ids: Vec<&str> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(store.first().map(|e| e.id.as_str()), Some("1"));
    }

    #[test]
    fn clones_share_records() {
        let store = EventStore::with_sample_data().ok().unwrap_or_else(EventStore::empty);
        let clone = store.clone();
        assert!(std::ptr::eq(store.all().as_ptr(), clone.all().as_ptr()));
    }

    #[test]
    fn empty_store() {
        let store = EventStore::empty();
        assert!(store.is_empty());
        assert!(store.first().is_none());
    }
}
