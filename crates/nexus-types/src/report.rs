//! Civic issue report form.
//!
//! The form mirrors the UI inputs one-to-one: every field is a string and an
//! empty string means the user left it blank. `title`, `description` and
//! `category` are required; `location` and `severity` are optional.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Field values of the civic issue form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct ReportForm {
    /// Short issue title.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Detailed description.
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Selected category value (see [`ReportCategory`](crate::ReportCategory)).
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    /// Optional free-text location.
    pub location: String,
    /// Optional severity value (see [`ReportSeverity`](crate::ReportSeverity)).
    pub severity: String,
}

impl ReportForm {
    /// Names of the fields a submission cannot leave empty, in form order.
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["title", "description", "category"];

    /// Whether every field is empty (the state after a reset).
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_cleared() {
        assert!(ReportForm::default().is_cleared());
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let form: Result<ReportForm, _> = serde_json::from_str(r#"{"title":"Pothole"}"#);
        let form = form.ok().unwrap_or_default();
        assert_eq!(form.title, "Pothole");
        assert!(form.description.is_empty());
        assert!(form.category.is_empty());
    }

    #[test]
    fn derive_flags_empty_required_fields() {
        let form = ReportForm {
            title: String::from("Street light out"),
            ..ReportForm::default()
        };
        let result = form.validate();
        assert!(result.is_err());
        let errors = result.err().unwrap_or_default();
        let fields = errors.field_errors();
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("category"));
        assert!(!fields.contains_key("title"));
        assert!(!fields.contains_key("location"));
    }
}
