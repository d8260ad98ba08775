use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A closed interval of local calendar time. `start` sits at midnight of its
/// day and `end` at 23:59:59.999 of its day, so single-day intervals and
/// multi-week blocks answer containment queries the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: day_start(start),
            end: day_end(end),
        }
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Inclusive at both boundary days. The probe sits at noon so it lands
    /// strictly inside the normalized bounds of either boundary day.
    pub fn contains_day(&self, date: NaiveDate) -> bool {
        let probe = date.and_hms_opt(12, 0, 0).unwrap();
        probe >= self.start && probe <= self.end
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Parses a single date like "7/1", "8/8/25", or "12/1/2025". A missing year
/// falls back to `default_year`; two-digit years expand to 20YY.
pub fn parse_single_date(text: &str, default_year: i32) -> Option<NaiveDate> {
    let parsed = parse_parts(text, default_year);
    if parsed.is_none() {
        tracing::debug!(text, "failed to parse date");
    }
    parsed
}

/// Parses a single date using the current local year as the default.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_single_date(text, Local::now().year())
}

/// Parses a range like "7/1-8/8/25" or "12/29/25-2/6/26" into a normalized
/// interval, using the current local year when the end segment has no year.
pub fn parse_range(text: &str) -> Option<DateInterval> {
    parse_range_with_default_year(text, Local::now().year())
}

/// Range parsing with an injectable fallback year.
///
/// The end segment's year is resolved first and becomes the default year for
/// the start segment, so "12/29-2/6/26" reads the start as December 2026
/// before the cross-year correction walks it back to 2025.
pub fn parse_range_with_default_year(text: &str, fallback_year: i32) -> Option<DateInterval> {
    let Some((start_text, end_text)) = text.split_once('-') else {
        tracing::debug!(text, "date range is missing a separator");
        return None;
    };

    let end_year = explicit_year(end_text).unwrap_or(fallback_year);
    let end = parse_single_date(end_text, end_year)?;
    let mut start = parse_single_date(start_text, end_year)?;

    // A start past the end means the inherited year overshot a calendar-year
    // boundary; the start belongs to the previous year.
    if start > end {
        start = start.with_year(start.year() - 1)?;
    }

    Some(DateInterval::from_days(start, end))
}

fn parse_parts(text: &str, default_year: i32) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year = match parts.next() {
        Some(part) => expand_year(part.trim().parse().ok()?),
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn explicit_year(text: &str) -> Option<i32> {
    let part = text.trim().split('/').nth(2)?;
    Some(expand_year(part.trim().parse().ok()?))
}

fn expand_year(value: i32) -> i32 {
    if value < 100 { 2000 + value } else { value }
}
