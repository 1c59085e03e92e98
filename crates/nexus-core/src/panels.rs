//! Informational side panels: health sentinel, resilience hub and the civic
//! reporter's static content.
//!
//! Panels are plain data assembled from the built-in sample content. They
//! have no behavior beyond a few derived readings.

use nexus_types::{
    CommunityImpact, CommunityReport, DiseaseOutbreak, HealthIndicator, HealthStats,
    ReportCategory, ReportSeverity, ResilienceResource, ResourceCategory,
};
use serde::Serialize;

use crate::sample;

/// Bed occupancy breakdown on the hospital capacity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalCapacity {
    /// Overall occupancy, in percent.
    pub overall_percent: u8,
    /// ICU occupancy, in percent.
    pub icu_percent: u8,
    /// General ward occupancy, in percent.
    pub general_percent: u8,
}

/// Public health overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSentinel {
    /// Headline counters.
    pub stats: HealthStats,
    /// Gauges.
    pub indicators: Vec<HealthIndicator>,
    /// Outbreaks under watch.
    pub outbreaks: Vec<DiseaseOutbreak>,
    /// Bed occupancy.
    pub hospital: HospitalCapacity,
    /// Daily tips.
    pub tips: Vec<String>,
}

impl HealthSentinel {
    /// The panel filled with built-in content.
    pub fn sample() -> Self {
        let stats = sample::health_stats();
        Self {
            hospital: HospitalCapacity {
                overall_percent: stats.hospital_capacity_percent,
                icu_percent: 67,
                general_percent: 81,
            },
            stats,
            indicators: sample::health_indicators(),
            outbreaks: sample::disease_outbreaks(),
            tips: sample::health_tips(),
        }
    }

    /// Outbreaks whose case count is growing.
    pub fn rising_outbreaks(&self) -> impl Iterator<Item = &DiseaseOutbreak> {
        self.outbreaks.iter().filter(|outbreak| outbreak.is_rising())
    }
}

/// Preparedness resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResilienceHub {
    /// Every listed resource, in display order.
    pub resources: Vec<ResilienceResource>,
}

impl ResilienceHub {
    /// The panel filled with built-in content.
    pub fn sample() -> Self {
        Self {
            resources: sample::resilience_resources(),
        }
    }

    /// Resources in one category.
    pub fn in_category(
        &self,
        category: ResourceCategory,
    ) -> impl Iterator<Item = &ResilienceResource> {
        self.resources
            .iter()
            .filter(move |resource| resource.category == category)
    }
}

/// A select option: submitted value plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Value written into the form.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// Static content around the civic issue form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicReporterPanel {
    /// Category select options.
    pub categories: Vec<SelectOption>,
    /// Severity select options.
    pub severities: Vec<SelectOption>,
    /// Recently filed community reports.
    pub recent_reports: Vec<CommunityReport>,
    /// Engagement counters.
    pub impact: CommunityImpact,
}

impl CivicReporterPanel {
    /// The panel filled with built-in content.
    pub fn sample() -> Self {
        Self {
            categories: ReportCategory::ALL
                .iter()
                .map(|category| SelectOption {
                    value: category.value(),
                    label: category.label(),
                })
                .collect(),
            severities: ReportSeverity::ALL
                .iter()
                .map(|severity| SelectOption {
                    value: severity.value(),
                    label: severity.label(),
                })
                .collect(),
            recent_reports: sample::recent_reports(),
            impact: sample::community_impact(),
        }
    }
}
