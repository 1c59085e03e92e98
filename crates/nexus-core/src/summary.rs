//! Headline counters for the stat cards and the filter bar.

use std::collections::BTreeMap;

use nexus_types::{CommunityImpact, CrisisEvent, EventStatus, EventType, HealthStats, Severity};
use serde::Serialize;

/// Counters shown across the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Every event in the store.
    pub total_events: usize,
    /// Events with status `Active` (also the header alert badge).
    pub active_events: usize,
    /// Events with severity `High`.
    pub high_priority: usize,
    /// Event count per status; every status is present, possibly with 0.
    pub by_status: BTreeMap<EventStatus, usize>,
    /// Event count per type; every type is present, possibly with 0.
    pub by_type: BTreeMap<EventType, usize>,
    /// Air quality alerts from the health sentinel.
    pub health_alerts: u32,
    /// Community reports filed this month.
    pub community_reports: u32,
}

impl DashboardSummary {
    /// Compute the summary over a set of events plus the panel counters.
    pub fn compute<'a, I>(events: I, health: &HealthStats, impact: &CommunityImpact) -> Self
    where
        I: IntoIterator<Item = &'a CrisisEvent>,
    {
        let mut by_status: BTreeMap<EventStatus, usize> =
            EventStatus::ALL.iter().map(|status| (*status, 0)).collect();
        let mut by_type: BTreeMap<EventType, usize> =
            EventType::ALL.iter().map(|kind| (*kind, 0)).collect();
        let mut total_events = 0_usize;
        let mut high_priority = 0_usize;

        for event in events {
            total_events = total_events.saturating_add(1);
            if event.severity == Severity::High {
                high_priority = high_priority.saturating_add(1);
            }
            bump(&mut by_status, event.status);
            bump(&mut by_type, event.event_type);
        }

        Self {
            total_events,
            active_events: by_status.get(&EventStatus::Active).copied().unwrap_or(0),
            high_priority,
            by_status,
            by_type,
            health_alerts: health.air_quality_alerts,
            community_reports: impact.reports_this_month,
        }
    }
}

fn bump<K: Ord>(counts: &mut BTreeMap<K, usize>, key: K) {
    let slot = counts.entry(key).or_insert(0);
    *slot = slot.saturating_add(1);
}

/// Totals shown in the filter bar for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewTotals {
    /// Events in the view.
    pub total: usize,
    /// Active events in the view.
    pub active: usize,
}

impl ViewTotals {
    /// Count a filtered view.
    pub fn of(view: &[&CrisisEvent]) -> Self {
        Self {
            total: view.len(),
            active: view.iter().filter(|event| event.is_active()).count(),
        }
    }
}
