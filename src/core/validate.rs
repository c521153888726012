//! Required-field validation for new entries.

use crate::errors::ValidationErrors;

/// Raw field values collected by the entry form before any decoding.
/// Dates are in the view format (`YYYY-MM-DD`) the date controls produce.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub project: String,
    pub client: String,
    pub project_manager: String,
    pub sales_discussion: String,
    pub team_lead: String,
    pub status: String,
    pub category: String,
    pub discussion: String,
    pub start_date: String,
    pub end_date: String,
    pub month_year: String,
    pub group: String,
    pub priority: String,
    pub tl_comments: String,
}

/// Check the required-field set. Returns an empty mapping when the draft is
/// acceptable; otherwise one message per missing field, keyed by the
/// persisted field name. Text fields must be non-empty after trimming,
/// selections and dates must be non-empty.
pub fn validate(draft: &EntryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.project.trim().is_empty() {
        errors.insert("project", "Project name is required");
    }
    if draft.client.trim().is_empty() {
        errors.insert("client", "Client name is required");
    }
    if draft.project_manager.is_empty() {
        errors.insert("projectManager", "Project Manager is required");
    }
    if draft.sales_discussion.is_empty() {
        errors.insert("salesDiscussion", "Sales Discussion is required");
    }
    if draft.category.is_empty() {
        errors.insert("category", "Category is required");
    }
    if draft.status.is_empty() {
        errors.insert("status", "Status is required");
    }
    if draft.discussion.is_empty() {
        errors.insert("discussion", "Discussion method is required");
    }
    if draft.start_date.is_empty() {
        errors.insert("startDate", "Start Date is required");
    }
    if draft.end_date.is_empty() {
        errors.insert("endDate", "End Date is required");
    }

    errors
}
