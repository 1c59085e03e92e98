//! Enumeration types for the Nexus dashboard.
//!
//! Wire labels match what the web UI displays ("Health Alert", "In Progress",
//! lowercase form option values), so the same strings flow through JSON and
//! the generated `TypeScript` bindings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Crisis events
// ---------------------------------------------------------------------------

/// Kind of incident a crisis event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventType {
    /// River or urban flooding.
    Flood,
    /// Extreme heat warning.
    Heatwave,
    /// Cyclonic storm.
    Cyclone,
    /// Public health advisory (air quality, outbreaks).
    #[serde(rename = "Health Alert")]
    HealthAlert,
    /// Municipal service failure (water, sanitation, power).
    #[serde(rename = "Civic Issue")]
    CivicIssue,
    /// Seismic activity.
    Earthquake,
    /// Prolonged water shortage from low rainfall.
    Drought,
}

impl EventType {
    /// Every event type, in display order.
    pub const ALL: [Self; 7] = [
        Self::Flood,
        Self::Heatwave,
        Self::Cyclone,
        Self::HealthAlert,
        Self::CivicIssue,
        Self::Earthquake,
        Self::Drought,
    ];

    /// Human-readable label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flood => "Flood",
            Self::Heatwave => "Heatwave",
            Self::Cyclone => "Cyclone",
            Self::HealthAlert => "Health Alert",
            Self::CivicIssue => "Civic Issue",
            Self::Earthquake => "Earthquake",
            Self::Drought => "Drought",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordinal urgency of a crisis event.
///
/// Variant order gives `Low < Medium < High`, so the derived [`Ord`] is the
/// severity ordering used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// Minor, informational.
    Low,
    /// Needs attention.
    Medium,
    /// Urgent, life-threatening.
    High,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Fixed sort rank: High=3, Medium=2, Low=1.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge style used for this severity in event lists.
    pub const fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::High => BadgeVariant::Destructive,
            Self::Medium => BadgeVariant::Secondary,
            Self::Low => BadgeVariant::Outline,
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle label of an event as tracked by its source authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventStatus {
    /// Ongoing incident.
    Active,
    /// Being watched, not yet escalated or closed.
    Monitoring,
    /// Closed by the source.
    Resolved,
}

impl EventStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Monitoring, Self::Resolved];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Monitoring => "Monitoring",
            Self::Resolved => "Resolved",
        }
    }

    /// Text tone used for the status label.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Destructive,
            Self::Monitoring => Tone::Warning,
            Self::Resolved => Tone::Success,
        }
    }
}

impl core::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Presentation hints
// ---------------------------------------------------------------------------

/// Badge style understood by the UI component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum BadgeVariant {
    /// Filled primary badge.
    Default,
    /// Muted filled badge.
    Secondary,
    /// Red filled badge.
    Destructive,
    /// Bordered, unfilled badge.
    Outline,
}

/// Semantic color tone for labels and category chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Tone {
    /// Brand primary.
    Primary,
    /// Secondary accent.
    Accent,
    /// Neutral secondary.
    Secondary,
    /// Error / danger.
    Destructive,
    /// Caution.
    Warning,
    /// Positive outcome.
    Success,
    /// De-emphasized.
    Muted,
}

/// Styling of a transient toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum NotificationVariant {
    /// Informational toast.
    #[default]
    Default,
    /// Error or warning toast.
    Destructive,
}

// ---------------------------------------------------------------------------
// Civic reporter
// ---------------------------------------------------------------------------

/// Category options offered by the civic issue form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ReportCategory {
    /// Roads, street lights, public buildings.
    Infrastructure,
    /// Garbage collection, drainage.
    Sanitation,
    /// Signals, congestion, parking.
    Traffic,
    /// Water, power, gas supply.
    Utilities,
    /// Crime, hazards.
    Safety,
    /// Pollution, trees, green spaces.
    Environment,
}

impl ReportCategory {
    /// Every category, in form order.
    pub const ALL: [Self; 6] = [
        Self::Infrastructure,
        Self::Sanitation,
        Self::Traffic,
        Self::Utilities,
        Self::Safety,
        Self::Environment,
    ];

    /// Form value submitted for this option.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Sanitation => "sanitation",
            Self::Traffic => "traffic",
            Self::Utilities => "utilities",
            Self::Safety => "safety",
            Self::Environment => "environment",
        }
    }

    /// Option label shown in the select.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Sanitation => "Sanitation",
            Self::Traffic => "Traffic",
            Self::Utilities => "Utilities",
            Self::Safety => "Safety",
            Self::Environment => "Environment",
        }
    }
}

/// Severity options offered by the civic issue form.
///
/// Distinct from [`Severity`]: citizens may flag an issue as `Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ReportSeverity {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Urgent.
    Urgent,
}

impl ReportSeverity {
    /// Every option, in form order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Form value submitted for this option.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Option label shown in the select.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// Progress of a community report as tracked by the municipality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ReportStatus {
    /// Logged, not yet picked up.
    Reported,
    /// Work under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed.
    Resolved,
}

impl ReportStatus {
    /// Chip tone for this status.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Resolved => Tone::Success,
            Self::InProgress => Tone::Warning,
            Self::Reported => Tone::Secondary,
        }
    }
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// Category of a resilience hub resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResourceCategory {
    /// Government guidance.
    Official,
    /// Helplines and contacts.
    Emergency,
    /// Household preparedness material.
    Preparation,
    /// Volunteer and community programs.
    Community,
}

impl ResourceCategory {
    /// Chip tone for this category.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Official => Tone::Primary,
            Self::Emergency => Tone::Destructive,
            Self::Preparation => Tone::Warning,
            Self::Community => Tone::Accent,
        }
    }
}

/// Qualitative reading of a health indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum IndicatorStatus {
    /// Within safe limits.
    Good,
    /// Elevated.
    High,
    /// Unhealthy.
    Poor,
}

impl IndicatorStatus {
    /// Badge style for this reading; anything but `Good` is flagged.
    pub const fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Good => BadgeVariant::Default,
            Self::High | Self::Poor => BadgeVariant::Destructive,
        }
    }
}
