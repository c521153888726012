//! Overdue derivation for the end-date column.
//!
//! Display-only: the badge is recomputed on every render and never persisted,
//! since "today" moves between renders.

use crate::models::date_field::DateField;
use crate::utils::date;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Overdue,
    OnTrack,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub severity: Severity,
}

/// Derive the badge for an end date (storage format) against a given day.
///
/// Empty input renders as "No Date"; non-empty text that does not parse is
/// passed through verbatim. Both are Neutral so a malformed date degrades the
/// display instead of blocking it.
pub fn derive(end_date: &str, today: NaiveDate) -> Badge {
    match DateField::from_storage(end_date) {
        DateField::Empty => Badge {
            text: "No Date".to_string(),
            severity: Severity::Neutral,
        },
        DateField::Raw(text) => Badge {
            text,
            severity: Severity::Neutral,
        },
        DateField::Date(end) => {
            // NaiveDate subtraction is midnight-to-midnight, so no
            // time-of-day drift can skew the day count.
            let diff_days = (end - today).num_days();
            if diff_days < 0 {
                Badge {
                    text: format!("Overdue by {} days", -diff_days),
                    severity: Severity::Overdue,
                }
            } else if diff_days == 0 {
                Badge {
                    text: "Deadline Today".to_string(),
                    severity: Severity::OnTrack,
                }
            } else {
                Badge {
                    text: format!("Deadline in {} days", diff_days),
                    severity: Severity::OnTrack,
                }
            }
        }
    }
}

/// Badge against the local calendar day. Re-evaluated per call.
pub fn for_today(end_date: &str) -> Badge {
    derive(end_date, date::today())
}
