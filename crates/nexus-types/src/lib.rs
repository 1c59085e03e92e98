//! Shared type definitions for the Nexus Crisis Intelligence dashboard.
//!
//! This crate is the single source of truth for the records exchanged between
//! the dashboard core and its web UI. Types flow downstream to `TypeScript`
//! via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier newtypes (source-assigned event ids, UUID v7
//!   notification ids)
//! - [`enums`] -- Event type, severity, status, form options and
//!   presentation hints
//! - [`structs`] -- Crisis events, panel rows and notifications
//! - [`report`] -- The civic issue report form

pub mod enums;
pub mod ids;
pub mod report;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    BadgeVariant, EventStatus, EventType, IndicatorStatus, NotificationVariant, ReportCategory,
    ReportSeverity, ReportStatus, ResourceCategory, Severity, Tone,
};
pub use ids::{EventId, NotificationId};
pub use report::ReportForm;
pub use structs::{
    CommunityImpact, CommunityReport, CrisisEvent, DiseaseOutbreak, EventLocation, GeoPoint,
    HealthIndicator, HealthStats, Notification, ResilienceResource,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the web UI.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EventId::export_all();
        let _ = crate::ids::NotificationId::export_all();

        // Enums
        let _ = crate::enums::EventType::export_all();
        let _ = crate::enums::Severity::export_all();
        let _ = crate::enums::EventStatus::export_all();
        let _ = crate::enums::BadgeVariant::export_all();
        let _ = crate::enums::Tone::export_all();
        let _ = crate::enums::NotificationVariant::export_all();
        let _ = crate::enums::ReportCategory::export_all();
        let _ = crate::enums::ReportSeverity::export_all();
        let _ = crate::enums::ReportStatus::export_all();
        let _ = crate::enums::ResourceCategory::export_all();
        let _ = crate::enums::IndicatorStatus::export_all();

        // Structs
        let _ = crate::structs::GeoPoint::export_all();
        let _ = crate::structs::EventLocation::export_all();
        let _ = crate::structs::CrisisEvent::export_all();
        let _ = crate::structs::HealthStats::export_all();
        let _ = crate::structs::HealthIndicator::export_all();
        let _ = crate::structs::DiseaseOutbreak::export_all();
        let _ = crate::structs::ResilienceResource::export_all();
        let _ = crate::structs::CommunityReport::export_all();
        let _ = crate::structs::CommunityImpact::export_all();
        let _ = crate::structs::Notification::export_all();

        // Forms
        let _ = crate::report::ReportForm::export_all();
    }
}
