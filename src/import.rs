//! Tolerant CSV import/export for the three roster schemas.
//!
//! All three parsers share one policy: sniff an optional header row by
//! substring, trim every field, and skip (never fail on) rows with missing
//! required fields or unparseable dates. Output order follows input order.

use crate::dates::{self, DateInterval};
use crate::roster::{CallAssignment, LeaveCategory, LeaveRequest, LeaveStatus, RotationAssignment};
use crate::rotation;
use chrono::Datelike;
use csv::{ReaderBuilder, Trim};

const ROTATIONS_HEADER: [&str; 4] = [
    "Resident Year",
    "Resident Name",
    "Rotation Block",
    "Rotation",
];
const CALL_HEADER: [&str; 5] = ["Date", "Primary AM", "Primary PM", "Backup AM", "Backup PM"];
const VACATION_HEADER: [&str; 5] = ["Name", "Start Date", "End Date", "Type", "Status"];

/// Parses rotation rows: `Resident Year, Resident Name, Rotation Block,
/// Rotation`. The rotation name is canonicalized at parse time; the raw
/// block text is kept alongside the resolved interval.
pub fn parse_rotations_csv(text: &str) -> Vec<RotationAssignment> {
    let rows = read_rows(text);
    let start = header_offset(&rows, "resident");
    let mut records = Vec::new();

    for (offset, row) in rows.iter().skip(start).enumerate() {
        let row_idx = start + offset;
        let Some([year, name, block, raw_rotation]) = required_fields(row) else {
            tracing::debug!(row = row_idx, "skipping rotation row with missing fields");
            continue;
        };
        let Some(interval) = dates::parse_range(block) else {
            tracing::debug!(row = row_idx, block, "skipping rotation row with unparseable block");
            continue;
        };
        records.push(RotationAssignment {
            id: format!("{name}-{row_idx}"),
            pgy_year: year.to_string(),
            resident_name: name.to_string(),
            rotation: rotation::canonicalize(raw_rotation),
            raw_block: block.to_string(),
            interval,
        });
    }
    records
}

/// Parses call rows: `Date, Primary AM, Primary PM, Backup AM, Backup PM`.
/// Rows with fewer than five fields are skipped; slot values stay free text.
pub fn parse_call_csv(text: &str) -> Vec<CallAssignment> {
    let rows = read_rows(text);
    let start = header_offset(&rows, "primary");
    let mut records = Vec::new();

    for (offset, row) in rows.iter().skip(start).enumerate() {
        let row_idx = start + offset;
        if row.len() < 5 {
            tracing::debug!(row = row_idx, "skipping call row with too few fields");
            continue;
        }
        let Some(date) = dates::parse_date(&row[0]) else {
            tracing::debug!(row = row_idx, date = %row[0], "skipping call row with unparseable date");
            continue;
        };
        records.push(CallAssignment {
            date,
            primary_day: row[1].clone(),
            primary_night: row[2].clone(),
            backup_day: row[3].clone(),
            backup_night: row[4].clone(),
        });
    }
    records
}

/// Parses vacation rows: `Name, Start Date, End Date, Type, Status`. Name and
/// both dates are required; category and status fall through to `Annual` /
/// `Requested` when the text matches no known substring.
pub fn parse_vacation_csv(text: &str) -> Vec<LeaveRequest> {
    let rows = read_rows(text);
    let start = header_offset(&rows, "start date");
    let mut records = Vec::new();

    for (offset, row) in rows.iter().skip(start).enumerate() {
        let row_idx = start + offset;
        let Some([name, start_text, end_text]) = required_fields(row) else {
            tracing::debug!(row = row_idx, "skipping vacation row with missing fields");
            continue;
        };
        let (Some(start_day), Some(end_day)) =
            (dates::parse_date(start_text), dates::parse_date(end_text))
        else {
            tracing::debug!(row = row_idx, "skipping vacation row with unparseable dates");
            continue;
        };
        records.push(LeaveRequest {
            id: format!("{name}-vac-{row_idx}"),
            resident_name: name.to_string(),
            interval: DateInterval::from_days(start_day, end_day),
            category: LeaveCategory::from_field(row.get(3).map(String::as_str).unwrap_or("")),
            status: LeaveStatus::from_field(row.get(4).map(String::as_str).unwrap_or("")),
        });
    }
    records
}

pub fn rotations_to_csv(records: &[RotationAssignment]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ROTATIONS_HEADER)?;
    for record in records {
        writer.write_record([
            record.pgy_year.as_str(),
            record.resident_name.as_str(),
            record.raw_block.as_str(),
            record.rotation.as_str(),
        ])?;
    }
    finish(writer)
}

pub fn call_to_csv(records: &[CallAssignment]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CALL_HEADER)?;
    for record in records {
        writer.write_record([
            format_day(record.date).as_str(),
            record.primary_day.as_str(),
            record.primary_night.as_str(),
            record.backup_day.as_str(),
            record.backup_night.as_str(),
        ])?;
    }
    finish(writer)
}

pub fn vacation_to_csv(records: &[LeaveRequest]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(VACATION_HEADER)?;
    for record in records {
        writer.write_record([
            record.resident_name.as_str(),
            format_day(record.interval.start_day()).as_str(),
            format_day(record.interval.end_day()).as_str(),
            record.category.as_str(),
            record.status.as_str(),
        ])?;
    }
    finish(writer)
}

/// Renders a date the way the source data writes it: M/D/YYYY, no padding.
pub fn format_day(date: chrono::NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

fn read_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(err) => tracing::debug!(%err, "skipping unreadable csv row"),
        }
    }
    rows
}

/// 1 when the first row looks like a header (contains the schema sentinel,
/// case-insensitively), 0 otherwise.
fn header_offset(rows: &[Vec<String>], sentinel: &str) -> usize {
    match rows.first() {
        Some(row) if row.join(",").to_lowercase().contains(sentinel) => 1,
        _ => 0,
    }
}

/// The first N fields of the row, provided all of them are non-empty.
fn required_fields<const N: usize>(row: &[String]) -> Option<[&str; N]> {
    if row.len() < N {
        return None;
    }
    let mut fields = [""; N];
    for (slot, field) in fields.iter_mut().zip(row) {
        if field.is_empty() {
            return None;
        }
        *slot = field.as_str();
    }
    Some(fields)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let buffer = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
