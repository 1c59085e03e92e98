//! Headless presentation shell.
//!
//! [`DashboardShell`] owns every piece of UI state: search criteria, sort
//! order, the selected event, the civic report form and the live flag. Each
//! interaction method updates that state, re-runs the pure query over the
//! immutable store and pushes the result to the map surface.

use std::sync::Arc;

use nexus_core::config::DashboardConfig;
use nexus_core::live::LiveFeedState;
use nexus_core::map::{MapController, MapSurface};
use nexus_core::notify::Notifier;
use nexus_core::panels::{CivicReporterPanel, HealthSentinel, ResilienceHub};
use nexus_core::query::{self, EventQuery, Filter, SortKey};
use nexus_core::report::{self, SubmissionOutcome};
use nexus_core::store::EventStore;
use nexus_core::summary::{DashboardSummary, ViewTotals};
use nexus_types::{CrisisEvent, EventId, EventType, ReportForm, Severity};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::DashboardError;

/// Serializable picture of the shell state, as the web UI would render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Active criteria.
    pub criteria: EventQuery,
    /// Active sort order.
    pub sort: Option<SortKey>,
    /// Selected event.
    pub selected: Option<EventId>,
    /// Ids of the visible events, in display order.
    pub visible: Vec<EventId>,
    /// Filter bar counters.
    pub totals: ViewTotals,
    /// Whether live mode is on.
    pub live: bool,
}

/// UI state plus the boundaries it drives.
pub struct DashboardShell<S> {
    store: EventStore,
    criteria: EventQuery,
    sort: Option<SortKey>,
    selected: Option<EventId>,
    form: ReportForm,
    live: Arc<LiveFeedState>,
    notifier: Arc<dyn Notifier>,
    map: MapController<S>,
    health: HealthSentinel,
    resilience: ResilienceHub,
    civic: CivicReporterPanel,
}

impl<S: MapSurface> DashboardShell<S> {
    /// Build the shell, draw the base map and select the first event.
    pub fn new(
        store: EventStore,
        config: &DashboardConfig,
        surface: S,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, DashboardError> {
        let mut map = MapController::new(surface, &config.map)?;
        map.initialize();

        let mut shell = Self {
            selected: None,
            store,
            criteria: EventQuery::all(),
            sort: None,
            form: ReportForm::default(),
            live: Arc::new(LiveFeedState::new(&config.live)),
            notifier,
            map,
            health: HealthSentinel::sample(),
            resilience: ResilienceHub::sample(),
            civic: CivicReporterPanel::sample(),
        };

        match shell.store.first().map(|event| event.id.clone()) {
            Some(first) => {
                shell.select_event(&first)?;
            }
            None => shell.refresh()?,
        }

        info!(
            events = shell.store.len(),
            selected = ?shell.selected,
            live = shell.live.is_live(),
            "dashboard shell ready"
        );
        Ok(shell)
    }

    // -----------------------------------------------------------------------
    // Event list
    // -----------------------------------------------------------------------

    /// Events matching the current criteria, in display order.
    pub fn visible_events(&self) -> Vec<&CrisisEvent> {
        query::run_query(self.store.all(), &self.criteria, self.sort)
    }

    /// Current criteria.
    pub const fn criteria(&self) -> &EventQuery {
        &self.criteria
    }

    /// Current sort order.
    pub const fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) -> Result<(), DashboardError> {
        self.criteria.search = search.into();
        self.refresh()
    }

    /// Replace the event type filter.
    pub fn set_event_type(&mut self, filter: Filter<EventType>) -> Result<(), DashboardError> {
        self.criteria.event_type = filter;
        self.refresh()
    }

    /// Replace the severity filter.
    pub fn set_severity(&mut self, filter: Filter<Severity>) -> Result<(), DashboardError> {
        self.criteria.severity = filter;
        self.refresh()
    }

    /// Replace the sort order.
    pub fn set_sort(&mut self, sort: Option<SortKey>) -> Result<(), DashboardError> {
        self.sort = sort;
        self.refresh()
    }

    /// Reset search, filters and sort.
    pub fn clear_filters(&mut self) -> Result<(), DashboardError> {
        self.criteria = EventQuery::all();
        self.sort = None;
        debug!("filters cleared");
        self.refresh()
    }

    /// Counters for the filter bar.
    pub fn filter_totals(&self) -> ViewTotals {
        ViewTotals::of(&self.visible_events())
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select an event, center the map on it and highlight its marker.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn select_event(&mut self, id: &EventId) -> Result<bool, DashboardError> {
        let Some(event) = self.store.get(id) else {
            debug!(event_id = %id, "selection of unknown event ignored");
            return Ok(false);
        };
        self.map.focus(event);
        self.selected = Some(id.clone());
        self.refresh()?;
        Ok(true)
    }

    /// Handle a click on a map marker.
    pub fn handle_marker_click(&mut self, id: &EventId) -> Result<bool, DashboardError> {
        let Some(event_id) = self
            .map
            .resolve_click(&self.store, id)
            .map(|event| event.id.clone())
        else {
            return Ok(false);
        };
        self.select_event(&event_id)
    }

    /// The selected event.
    pub fn selected_event(&self) -> Option<&CrisisEvent> {
        self.selected.as_ref().and_then(|id| self.store.get(id))
    }

    // -----------------------------------------------------------------------
    // Civic report form
    // -----------------------------------------------------------------------

    /// Current form values.
    pub const fn form(&self) -> &ReportForm {
        &self.form
    }

    /// Edit the form in place.
    pub fn update_form(&mut self, edit: impl FnOnce(&mut ReportForm)) {
        edit(&mut self.form);
    }

    /// Submit the form, raise the outcome toast and reset on success.
    pub fn submit_report(&mut self) -> SubmissionOutcome {
        let outcome = report::submit_report(&self.form);
        self.notifier.notify(outcome.notification());
        if let SubmissionOutcome::Accepted { reset } = &outcome {
            self.form = reset.clone();
        }
        outcome
    }

    // -----------------------------------------------------------------------
    // Live mode
    // -----------------------------------------------------------------------

    /// Turn live mode on or off. Returns the previous value.
    pub fn set_live(&self, live: bool) -> bool {
        self.live.set_live(live)
    }

    /// Whether live mode is on.
    pub fn is_live(&self) -> bool {
        self.live.is_live()
    }

    /// Shared live control state, for the ticker task.
    pub fn live_state(&self) -> Arc<LiveFeedState> {
        Arc::clone(&self.live)
    }

    // -----------------------------------------------------------------------
    // Panels and counters
    // -----------------------------------------------------------------------

    /// Stat card counters over the whole store.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.store, &self.health.stats, &self.civic.impact)
    }

    /// Health sentinel content.
    pub const fn health_sentinel(&self) -> &HealthSentinel {
        &self.health
    }

    /// Resilience hub content.
    pub const fn resilience_hub(&self) -> &ResilienceHub {
        &self.resilience
    }

    /// Civic reporter static content.
    pub const fn civic_reporter(&self) -> &CivicReporterPanel {
        &self.civic
    }

    /// The event store.
    pub const fn store(&self) -> &EventStore {
        &self.store
    }

    /// The map controller.
    pub const fn map(&self) -> &MapController<S> {
        &self.map
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let visible = self.visible_events();
        DashboardSnapshot {
            criteria: self.criteria.clone(),
            sort: self.sort,
            selected: self.selected.clone(),
            totals: ViewTotals::of(&visible),
            visible: visible.iter().map(|event| event.id.clone()).collect(),
            live: self.is_live(),
        }
    }

    /// Re-run the query and redraw every marker.
    fn refresh(&mut self) -> Result<(), DashboardError> {
        let visible = query::run_query(self.store.all(), &self.criteria, self.sort);
        let placed = self.map.redraw(&visible, self.selected.as_ref())?;
        debug!(visible = placed, "view refreshed");
        Ok(())
    }
}
