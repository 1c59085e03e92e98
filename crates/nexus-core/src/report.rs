//! Mock civic issue submission.
//!
//! Submitting a report only validates the form and tells the caller what to
//! show. Nothing is stored, queued or transmitted.

use nexus_types::{Notification, ReportForm};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

/// Toast title shown when required fields are blank.
pub const MISSING_TITLE: &str = "Missing Information";
/// Toast body shown when required fields are blank.
pub const MISSING_BODY: &str = "Please fill in all required fields.";
/// Toast title shown after an accepted submission.
pub const ACCEPTED_TITLE: &str = "Report Submitted Successfully";
/// Toast body shown after an accepted submission.
pub const ACCEPTED_BODY: &str = "Your civic issue has been reported to relevant authorities.";

/// Result of submitting the civic issue form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// The form passed validation; the caller installs `reset` as the new
    /// form state.
    Accepted {
        /// The cleared form.
        reset: ReportForm,
    },
    /// One or more required fields were empty. The form is left untouched.
    MissingFields {
        /// Names of the empty required fields, in form order.
        fields: Vec<&'static str>,
    },
}

impl SubmissionOutcome {
    /// Whether the submission was accepted.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The toast announcing this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Accepted { .. } => Notification::info(ACCEPTED_TITLE, ACCEPTED_BODY),
            Self::MissingFields { .. } => Notification::destructive(MISSING_TITLE, MISSING_BODY),
        }
    }
}

/// Validate a form and decide the outcome.
///
/// Only emptiness is checked; `category` and `severity` are accepted as free
/// text even when they are not one of the listed options.
pub fn submit_report(form: &ReportForm) -> SubmissionOutcome {
    match form.validate() {
        Ok(()) => {
            info!(
                title = %form.title,
                category = %form.category,
                severity = %form.severity,
                "civic report accepted"
            );
            SubmissionOutcome::Accepted {
                reset: ReportForm::default(),
            }
        }
        Err(errors) => {
            let invalid = errors.field_errors();
            let fields: Vec<&'static str> = ReportForm::REQUIRED_FIELDS
                .iter()
                .copied()
                .filter(|field| invalid.contains_key(*field))
                .collect();
            warn!(missing = ?fields, "civic report rejected");
            SubmissionOutcome::MissingFields { fields }
        }
    }
}
