use chrono::{NaiveDate, NaiveDateTime};
use residency_roster::dates::{
    parse_range, parse_range_with_default_year, parse_single_date,
};
use residency_roster::{defaults, import};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn midnight(y: i32, m: u32, day: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(0, 0, 0).unwrap()
}

fn end_of_day(y: i32, m: u32, day: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

#[test]
fn range_with_trailing_year_normalizes_bounds() {
    let interval = parse_range("7/1-8/8/25").unwrap();
    assert_eq!(interval.start, midnight(2025, 7, 1));
    assert_eq!(interval.end, end_of_day(2025, 8, 8));
}

#[test]
fn explicit_years_on_both_sides_need_no_correction() {
    let interval = parse_range("12/29/25-2/6/26").unwrap();
    assert_eq!(interval.start_day(), d(2025, 12, 29));
    assert_eq!(interval.end_day(), d(2026, 2, 6));
    assert!(interval.start < interval.end);
}

#[test]
fn inherited_year_walks_back_across_year_boundary() {
    // The start inherits 2026 from the end, which puts it past the end; the
    // correction moves it to 2025.
    let interval = parse_range("12/29-2/6/26").unwrap();
    assert_eq!(interval.start_day(), d(2025, 12, 29));
    assert_eq!(interval.end_day(), d(2026, 2, 6));
}

#[test]
fn yearless_range_uses_fallback_year() {
    let interval = parse_range_with_default_year("7/1-8/8", 2030).unwrap();
    assert_eq!(interval.start_day(), d(2030, 7, 1));
    assert_eq!(interval.end_day(), d(2030, 8, 8));
}

#[test]
fn single_date_year_handling() {
    assert_eq!(parse_single_date("12/1/2025", 1999), Some(d(2025, 12, 1)));
    assert_eq!(parse_single_date("8/8/25", 1999), Some(d(2025, 8, 8)));
    assert_eq!(parse_single_date("7/1", 2026), Some(d(2026, 7, 1)));
}

#[test]
fn unparseable_inputs_yield_none() {
    assert!(parse_single_date("banana", 2025).is_none());
    assert!(parse_single_date("13/40/25", 2025).is_none());
    assert!(parse_range("7/1/25").is_none());
    assert!(parse_range("junk-2/6/26").is_none());
    assert!(parse_range("2/6/26-junk").is_none());
}

#[test]
fn all_default_rotation_blocks_are_ordered() {
    let rotations = import::parse_rotations_csv(defaults::ROTATIONS_CSV);
    assert!(!rotations.is_empty());
    for rotation in &rotations {
        assert!(
            rotation.interval.start <= rotation.interval.end,
            "block {} parsed out of order",
            rotation.raw_block
        );
    }
}

#[test]
fn containment_is_inclusive_at_both_boundary_days() {
    let interval = parse_range("7/1-8/8/25").unwrap();
    assert!(interval.contains_day(d(2025, 7, 1)));
    assert!(interval.contains_day(d(2025, 8, 8)));
    assert!(interval.contains_day(d(2025, 7, 20)));
    assert!(!interval.contains_day(d(2025, 6, 30)));
    assert!(!interval.contains_day(d(2025, 8, 9)));
}
