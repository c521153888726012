use chrono::NaiveDate;
use projtrack::utils::date;

#[test]
fn test_storage_to_view_basic() {
    assert_eq!(date::storage_to_view("04/10/2025"), "2025-10-04");
    assert_eq!(date::storage_to_view("31/12/2024"), "2024-12-31");
}

#[test]
fn test_view_to_storage_basic() {
    assert_eq!(date::view_to_storage("2025-10-04"), "04/10/2025");
    assert_eq!(date::view_to_storage("2024-12-31"), "31/12/2024");
}

#[test]
fn test_view_round_trip() {
    for d in ["04/10/2025", "01/01/2024", "29/02/2024", "15/06/2030"] {
        assert_eq!(date::view_to_storage(&date::storage_to_view(d)), d);
    }
}

#[test]
fn test_empty_converts_to_empty() {
    assert_eq!(date::storage_to_view(""), "");
    assert_eq!(date::view_to_storage(""), "");
}

#[test]
fn test_wrong_arity_propagates_empty_parts() {
    // Pure string reshuffling: a missing component becomes an empty part,
    // not an error.
    assert_eq!(date::storage_to_view("10/2025"), "-2025-10");
    assert_eq!(date::view_to_storage("2025-10"), "/10/2025");
}

#[test]
fn test_parse_storage_valid() {
    assert_eq!(
        date::parse_storage("04/10/2025"),
        NaiveDate::from_ymd_opt(2025, 10, 4)
    );
}

#[test]
fn test_parse_storage_malformed() {
    assert_eq!(date::parse_storage("31/02/2025"), None);
    assert_eq!(date::parse_storage("2025-10-04"), None);
    assert_eq!(date::parse_storage("04/10"), None);
    assert_eq!(date::parse_storage("soon"), None);
}

#[test]
fn test_format_storage_zero_pads() {
    let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(date::format_storage(d), "07/03/2025");
}

#[test]
fn test_parse_format_round_trip() {
    let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(date::parse_storage(&date::format_storage(d)), Some(d));
}
