use chrono::NaiveDate;
use projtrack::core::overdue::{Severity, derive, for_today};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_deadline_today() {
    let badge = derive("04/10/2025", day(2025, 10, 4));
    assert_eq!(badge.text, "Deadline Today");
    assert_eq!(badge.severity, Severity::OnTrack);
}

#[test]
fn test_deadline_tomorrow() {
    let badge = derive("05/10/2025", day(2025, 10, 4));
    assert_eq!(badge.text, "Deadline in 1 days");
    assert_eq!(badge.severity, Severity::OnTrack);
}

#[test]
fn test_overdue_yesterday() {
    let badge = derive("03/10/2025", day(2025, 10, 4));
    assert_eq!(badge.text, "Overdue by 1 days");
    assert_eq!(badge.severity, Severity::Overdue);
}

#[test]
fn test_future_deadline_counts_days() {
    let badge = derive("14/10/2025", day(2025, 10, 4));
    assert_eq!(badge.text, "Deadline in 10 days");
    assert_eq!(badge.severity, Severity::OnTrack);
}

#[test]
fn test_overdue_across_month_boundary() {
    let badge = derive("28/09/2025", day(2025, 10, 4));
    assert_eq!(badge.text, "Overdue by 6 days");
    assert_eq!(badge.severity, Severity::Overdue);
}

#[test]
fn test_empty_date_is_neutral() {
    let badge = derive("", day(2025, 10, 4));
    assert_eq!(badge.text, "No Date");
    assert_eq!(badge.severity, Severity::Neutral);
}

#[test]
fn test_unparseable_date_passes_through_verbatim() {
    let badge = derive("next sprint", day(2025, 10, 4));
    assert_eq!(badge.text, "next sprint");
    assert_eq!(badge.severity, Severity::Neutral);
}

#[test]
fn test_view_format_is_not_storage_format() {
    // YYYY-MM-DD never reaches the store; if it does show up it degrades to
    // a verbatim badge instead of being reinterpreted.
    let badge = derive("2025-10-04", day(2025, 10, 4));
    assert_eq!(badge.text, "2025-10-04");
    assert_eq!(badge.severity, Severity::Neutral);
}

#[test]
fn test_for_today_empty_is_stable() {
    // Independent of the wall clock.
    let badge = for_today("");
    assert_eq!(badge.text, "No Date");
    assert_eq!(badge.severity, Severity::Neutral);
}
