//! Built-in sample data for the dashboard.
//!
//! Six crisis events across India plus the fixed content of the health
//! sentinel, resilience hub and civic reporter panels. Everything here is
//! hard-coded; the store is built from it once at startup.

use chrono::{DateTime, Utc};
use nexus_types::{
    CommunityImpact, CommunityReport, CrisisEvent, DiseaseOutbreak, EventId, EventLocation,
    EventStatus, EventType, HealthIndicator, HealthStats, IndicatorStatus, ReportStatus,
    ResilienceResource, ResourceCategory, Severity,
};

use crate::error::StoreError;

/// A crisis event as written in the static table, timestamp still in text.
struct RawEvent {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    event_type: EventType,
    severity: Severity,
    place: &'static str,
    state: &'static str,
    latitude: f64,
    longitude: f64,
    timestamp: &'static str,
    source: &'static str,
    affected_areas: &'static [&'static str],
    status: EventStatus,
}

const SAMPLE_EVENTS: [RawEvent; 6] = [
    RawEvent {
        id: "1",
        title: "Severe Flooding in Kerala",
        description: "Heavy monsoon rains have caused severe flooding in multiple districts of Kerala. Water levels in major rivers are above danger mark.",
        event_type: EventType::Flood,
        severity: Severity::High,
        place: "Kochi",
        state: "Kerala",
        latitude: 9.9312,
        longitude: 76.2673,
        timestamp: "2025-08-02T08:30:00Z",
        source: "IMD Kerala",
        affected_areas: &["Ernakulam", "Alappuzha", "Kottayam"],
        status: EventStatus::Active,
    },
    RawEvent {
        id: "2",
        title: "Extreme Heat Wave Warning",
        description: "Temperatures soaring above 45\u{b0}C in Rajasthan. Red alert issued for next 48 hours.",
        event_type: EventType::Heatwave,
        severity: Severity::High,
        place: "Jaipur",
        state: "Rajasthan",
        latitude: 26.9124,
        longitude: 75.7873,
        timestamp: "2025-08-02T06:00:00Z",
        source: "IMD Rajasthan",
        affected_areas: &["Jaipur", "Jodhpur", "Bikaner"],
        status: EventStatus::Active,
    },
    RawEvent {
        id: "3",
        title: "Cyclone Alert - Bay of Bengal",
        description: "Low pressure area developing into cyclonic storm. Coastal areas advised to be on high alert.",
        event_type: EventType::Cyclone,
        severity: Severity::Medium,
        place: "Visakhapatnam",
        state: "Andhra Pradesh",
        latitude: 17.7231,
        longitude: 83.3012,
        timestamp: "2025-08-02T04:15:00Z",
        source: "NDMA",
        affected_areas: &["Visakhapatnam", "Srikakulam", "East Godavari"],
        status: EventStatus::Monitoring,
    },
    RawEvent {
        id: "4",
        title: "Delhi Air Quality Alert",
        description: "Air Quality Index reaches severe category. Health advisory issued for vulnerable groups.",
        event_type: EventType::HealthAlert,
        severity: Severity::Medium,
        place: "New Delhi",
        state: "Delhi",
        latitude: 28.6139,
        longitude: 77.2090,
        timestamp: "2025-08-02T07:00:00Z",
        source: "CPCB",
        affected_areas: &["Central Delhi", "South Delhi", "Gurgaon"],
        status: EventStatus::Active,
    },
    RawEvent {
        id: "5",
        title: "Water Crisis in Chennai",
        description: "Acute water shortage reported in several areas. Municipal corporation working on emergency supplies.",
        event_type: EventType::CivicIssue,
        severity: Severity::Medium,
        place: "Chennai",
        state: "Tamil Nadu",
        latitude: 13.0827,
        longitude: 80.2707,
        timestamp: "2025-08-01T18:45:00Z",
        source: "Chennai Corporation",
        affected_areas: &["Anna Nagar", "T. Nagar", "Velachery"],
        status: EventStatus::Monitoring,
    },
    RawEvent {
        id: "6",
        title: "Minor Earthquake Recorded",
        description: "Earthquake of magnitude 4.2 recorded. No casualties reported. Buildings inspected for damage.",
        event_type: EventType::Earthquake,
        severity: Severity::Low,
        place: "Shimla",
        state: "Himachal Pradesh",
        latitude: 31.1048,
        longitude: 77.1734,
        timestamp: "2025-08-01T22:30:00Z",
        source: "IMD Seismology",
        affected_areas: &["Shimla", "Solan", "Kasauli"],
        status: EventStatus::Resolved,
    },
];

impl RawEvent {
    fn to_event(&self) -> Result<CrisisEvent, StoreError> {
        let timestamp = DateTime::parse_from_rfc3339(self.timestamp)
            .map_err(|source| StoreError::InvalidTimestamp {
                id: EventId::new(self.id),
                value: self.timestamp.to_owned(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(CrisisEvent {
            id: EventId::new(self.id),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            event_type: self.event_type,
            severity: self.severity,
            location: EventLocation {
                name: self.place.to_owned(),
                state: self.state.to_owned(),
                latitude: self.latitude,
                longitude: self.longitude,
            },
            timestamp,
            source: self.source.to_owned(),
            affected_areas: self
                .affected_areas
                .iter()
                .map(|area| (*area).to_owned())
                .collect(),
            status: self.status,
        })
    }
}

/// The six built-in crisis events, in their canonical order.
///
/// # Errors
///
/// Returns [`StoreError::InvalidTimestamp`] if a hard-coded timestamp fails
/// to parse (should not happen with the shipped data).
pub fn sample_events() -> Result<Vec<CrisisEvent>, StoreError> {
    SAMPLE_EVENTS.iter().map(RawEvent::to_event).collect()
}

/// Headline counters for the health sentinel.
pub const fn health_stats() -> HealthStats {
    HealthStats {
        active_disease_outbreaks: 3,
        air_quality_alerts: 12,
        water_quality_issues: 8,
        hospital_capacity_percent: 78,
    }
}

fn indicator(label: &str, value: u32, max: u32, status: IndicatorStatus) -> HealthIndicator {
    HealthIndicator {
        label: label.to_owned(),
        value,
        max,
        status,
    }
}

/// Gauges shown on the health sentinel.
pub fn health_indicators() -> Vec<HealthIndicator> {
    vec![
        indicator("Air Quality Index", 178, 300, IndicatorStatus::Poor),
        indicator("Water Quality Score", 72, 100, IndicatorStatus::Good),
        indicator("Heat Index", 41, 50, IndicatorStatus::High),
    ]
}

fn outbreak(disease: &str, cases: u32, trend_percent: i32, region: &str) -> DiseaseOutbreak {
    DiseaseOutbreak {
        disease: disease.to_owned(),
        cases,
        trend_percent,
        region: region.to_owned(),
    }
}

/// Disease outbreaks under monitoring.
pub fn disease_outbreaks() -> Vec<DiseaseOutbreak> {
    vec![
        outbreak("Dengue", 142, 12, "Delhi NCR"),
        outbreak("Chikungunya", 67, 8, "Mumbai"),
        outbreak("Malaria", 89, -5, "Kolkata"),
    ]
}

/// Today's health tips.
pub fn health_tips() -> Vec<String> {
    [
        "Stay hydrated - drink 3-4 liters of water daily",
        "Avoid outdoor activities between 12-4 PM",
        "Use N95 masks in high pollution areas",
    ]
    .iter()
    .map(|tip| (*tip).to_owned())
    .collect()
}

fn resource(title: &str, description: &str, category: ResourceCategory) -> ResilienceResource {
    ResilienceResource {
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        link: String::from("#"),
    }
}

/// Preparedness resources listed in the resilience hub.
pub fn resilience_resources() -> Vec<ResilienceResource> {
    vec![
        resource(
            "NDMA Guidelines",
            "National Disaster Management Authority comprehensive guidelines",
            ResourceCategory::Official,
        ),
        resource(
            "Emergency Contacts",
            "State-wise emergency contact numbers and helplines",
            ResourceCategory::Emergency,
        ),
        resource(
            "Preparedness Checklist",
            "Disaster preparedness checklist for households",
            ResourceCategory::Preparation,
        ),
        resource(
            "Volunteer Registration",
            "Register as a volunteer for disaster response",
            ResourceCategory::Community,
        ),
    ]
}

fn report(
    id: u32,
    title: &str,
    location: &str,
    status: ReportStatus,
    reported: &str,
) -> CommunityReport {
    CommunityReport {
        id,
        title: title.to_owned(),
        location: location.to_owned(),
        status,
        reported: reported.to_owned(),
    }
}

/// Recent community reports shown under the civic issue form.
pub fn recent_reports() -> Vec<CommunityReport> {
    vec![
        report(
            1,
            "Street Light Not Working",
            "MG Road, Bangalore",
            ReportStatus::InProgress,
            "2 hours ago",
        ),
        report(
            2,
            "Water Logging After Rain",
            "Sector 12, Noida",
            ReportStatus::Resolved,
            "1 day ago",
        ),
        report(
            3,
            "Garbage Collection Missed",
            "Anna Nagar, Chennai",
            ReportStatus::Reported,
            "3 hours ago",
        ),
    ]
}

/// Monthly community engagement counters.
pub const fn community_impact() -> CommunityImpact {
    CommunityImpact {
        reports_this_month: 247,
        issues_resolved: 189,
    }
}
