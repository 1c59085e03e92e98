//! Query engine: free-text search, type/severity filters and sorting.
//!
//! Every function here is pure. Results borrow from the input slice, so each
//! returned element is the very record held by the caller; the input is
//! never reordered or edited.
//!
//! # Matching rules
//!
//! - Search text matches case-insensitively as a literal substring of the
//!   title, location name or description. Empty search matches everything.
//!   There is no pattern syntax: `(`, `*`, `.` and friends are ordinary
//!   characters.
//! - [`Filter::All`] passes every event; [`Filter::Only`] requires equality.
//! - All criteria are combined with AND.
//!
//! # Sorting
//!
//! Both sort keys are stable descending sorts: [`SortKey::Recency`] puts the
//! newest timestamp first, [`SortKey::Severity`] orders by rank
//! (High=3, Medium=2, Low=1). Ties keep collection order.

use nexus_types::{CrisisEvent, EventType, Severity};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A criterion that is either switched off (`"all"`) or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    /// No filtering on this attribute.
    All,
    /// Keep only events whose attribute equals this value.
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Whether `value` passes this filter.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Whether this filter is the pass-through sentinel.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// No `T: Default` bound.
impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// The literal `"all"` sentinel on the wire.
#[derive(Serialize, Deserialize)]
enum AllSentinel {
    #[serde(rename = "all")]
    All,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FilterRepr<T> {
    All(AllSentinel),
    Only(T),
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => FilterRepr::<&T>::All(AllSentinel::All).serialize(serializer),
            Self::Only(value) => FilterRepr::Only(value).serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Filter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FilterRepr::<T>::deserialize(deserializer)? {
            FilterRepr::All(AllSentinel::All) => Self::All,
            FilterRepr::Only(value) => Self::Only(value),
        })
    }
}

/// Criteria narrowing the event list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventQuery {
    /// Free-text search; empty matches everything.
    pub search: String,
    /// Event type filter.
    pub event_type: Filter<EventType>,
    /// Severity filter.
    pub severity: Filter<Severity>,
}

impl EventQuery {
    /// Criteria that keep every event.
    pub fn all() -> Self {
        Self::default()
    }

    /// Replace the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one event type.
    #[must_use]
    pub const fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Filter::Only(event_type);
        self
    }

    /// Restrict to one severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Filter::Only(severity);
        self
    }

    /// Whether these criteria keep every event.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.event_type.is_all() && self.severity.is_all()
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first.
    Recency,
    /// Highest severity first.
    Severity,
}

/// Search text lowered once per query.
struct Needle(String);

impl Needle {
    fn new(search: &str) -> Self {
        Self(search.to_lowercase())
    }

    fn found_in(&self, event: &CrisisEvent) -> bool {
        if self.0.is_empty() {
            return true;
        }
        [
            event.title.as_str(),
            event.location.name.as_str(),
            event.description.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(self.0.as_str()))
    }
}

fn passes(event: &CrisisEvent, query: &EventQuery, needle: &Needle) -> bool {
    query.event_type.accepts(&event.event_type)
        && query.severity.accepts(&event.severity)
        && needle.found_in(event)
}

/// Whether a single event satisfies every criterion.
pub fn matches(event: &CrisisEvent, query: &EventQuery) -> bool {
    passes(event, query, &Needle::new(&query.search))
}

/// Keep the events satisfying every criterion, in collection order.
pub fn filter_events<'a>(events: &'a [CrisisEvent], query: &EventQuery) -> Vec<&'a CrisisEvent> {
    let needle = Needle::new(&query.search);
    events
        .iter()
        .filter(|event| passes(event, query, &needle))
        .collect()
}

/// Stable-sort a view of events by the given key.
pub fn sort_events(events: &mut [&CrisisEvent], key: SortKey) {
    match key {
        SortKey::Recency => events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortKey::Severity => events.sort_by(|a, b| b.severity.rank().cmp(&a.severity.rank())),
    }
}

/// Filter, then optionally sort. `None` keeps collection order.
pub fn run_query<'a>(
    events: &'a [CrisisEvent],
    query: &EventQuery,
    sort: Option<SortKey>,
) -> Vec<&'a CrisisEvent> {
    let mut view = filter_events(events, query);
    if let Some(key) = sort {
        sort_events(&mut view, key);
    }
    view
}
