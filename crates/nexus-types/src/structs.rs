//! Core entity structs for the Nexus dashboard.
//!
//! Covers the crisis event record, the informational panel rows (health
//! sentinel, resilience hub, community reports) and transient notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    EventStatus, EventType, IndicatorStatus, NotificationVariant, ReportStatus, ResourceCategory,
    Severity,
};
use crate::ids::{EventId, NotificationId};

// ---------------------------------------------------------------------------
// Crisis events
// ---------------------------------------------------------------------------

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GeoPoint {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite numbers.
    pub const fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Where a crisis event was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EventLocation {
    /// City or district name.
    pub name: String,
    /// Indian state or union territory.
    pub state: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl EventLocation {
    /// The location as a map coordinate.
    pub const fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// One reported incident in the static dataset.
///
/// Records are immutable once the event store is built; every view over
/// them (filtering, sorting, map markers) borrows rather than edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CrisisEvent {
    /// Source-assigned unique identifier.
    pub id: EventId,
    /// Headline.
    pub title: String,
    /// Free-text details.
    pub description: String,
    /// Kind of incident.
    pub event_type: EventType,
    /// Urgency classification.
    pub severity: Severity,
    /// Where it happened.
    pub location: EventLocation,
    /// When it was reported.
    pub timestamp: DateTime<Utc>,
    /// Reporting authority.
    pub source: String,
    /// Neighbouring places affected, in source order.
    pub affected_areas: Vec<String>,
    /// Lifecycle label from the source.
    pub status: EventStatus,
}

impl CrisisEvent {
    /// Whether the source still lists this event as ongoing.
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }
}

// ---------------------------------------------------------------------------
// Health sentinel
// ---------------------------------------------------------------------------

/// Headline public-health counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HealthStats {
    /// Disease outbreaks currently tracked.
    pub active_disease_outbreaks: u32,
    /// Air quality alerts in force.
    pub air_quality_alerts: u32,
    /// Open water quality complaints.
    pub water_quality_issues: u32,
    /// Hospital bed occupancy, in percent.
    pub hospital_capacity_percent: u8,
}

/// A gauge on the health sentinel panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthIndicator {
    /// Gauge label.
    pub label: String,
    /// Current reading.
    pub value: u32,
    /// Upper bound of the scale.
    pub max: u32,
    /// Qualitative reading.
    pub status: IndicatorStatus,
}

impl HealthIndicator {
    /// Fill of the progress bar, in percent of `max` (0 when `max` is 0).
    pub fn fill_percent(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.value) / f64::from(self.max) * 100.0
    }
}

/// Case counts for one disease in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseOutbreak {
    /// Disease name.
    pub disease: String,
    /// Reported cases.
    pub cases: u32,
    /// Week-over-week change in percent (negative when declining).
    pub trend_percent: i32,
    /// Affected region.
    pub region: String,
}

impl DiseaseOutbreak {
    /// Whether case counts are increasing.
    pub const fn is_rising(&self) -> bool {
        self.trend_percent > 0
    }

    /// Signed trend label, e.g. `+12%` or `-5%`.
    pub fn trend_label(&self) -> String {
        format!("{:+}%", self.trend_percent)
    }
}

// ---------------------------------------------------------------------------
// Resilience hub and community reports
// ---------------------------------------------------------------------------

/// A preparedness resource linked from the resilience hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResilienceResource {
    /// Resource title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Category chip.
    pub category: ResourceCategory,
    /// Target link.
    pub link: String,
}

/// A previously filed community report shown as recent activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CommunityReport {
    /// Display identifier.
    pub id: u32,
    /// Issue title.
    pub title: String,
    /// Free-text location.
    pub location: String,
    /// Municipal progress.
    pub status: ReportStatus,
    /// Relative age label, e.g. "2 hours ago".
    pub reported: String,
}

/// Community engagement counters for the civic reporter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CommunityImpact {
    /// Reports filed this month.
    pub reports_this_month: u32,
    /// Reports resolved this month.
    pub issues_resolved: u32,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A transient, user-visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Unique toast identifier.
    pub id: NotificationId,
    /// Bold first line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Styling.
    pub variant: NotificationVariant,
    /// How long to keep the toast on screen; `None` uses the UI default.
    pub duration_ms: Option<u64>,
    /// When the toast was raised.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an informational toast.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_variant(title, body, NotificationVariant::Default)
    }

    /// Create a destructive (error) toast.
    pub fn destructive(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_variant(title, body, NotificationVariant::Destructive)
    }

    /// Keep the toast on screen for `duration_ms`.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    fn with_variant(
        title: impl Into<String>,
        body: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            body: body.into(),
            variant,
            duration_ms: None,
            created_at: Utc::now(),
        }
    }
}
