//! Calendar date helpers.
//!
//! Records store dates day-first (`DD/MM/YYYY`). Date-picker controls use
//! `YYYY-MM-DD`; that view format is a transient conversion and is never
//! persisted.

use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a storage-format (`DD/MM/YYYY`) date. None on malformed input.
pub fn parse_storage(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

pub fn format_storage(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY` → `YYYY-MM-DD` for date-picker controls.
///
/// Pure string reshuffling, no calendar validation: input with the wrong
/// number of parts propagates empty parts instead of erroring. Empty in,
/// empty out.
pub fn storage_to_view(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut parts = s.split('/');
    let day = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");
    let year = parts.next().unwrap_or("");
    format!("{}-{}-{}", year, month, day)
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`. Same permissive contract as
/// [`storage_to_view`].
pub fn view_to_storage(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut parts = s.split('-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");
    let day = parts.next().unwrap_or("");
    format!("{}/{}/{}", day, month, year)
}
