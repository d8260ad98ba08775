use crate::dates::DateInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel used by the call roster for an unfilled slot.
pub const UNASSIGNED: &str = "None";

/// True when a call slot names someone, i.e. it is neither empty nor the
/// "None" sentinel.
pub fn is_assigned(slot: &str) -> bool {
    let slot = slot.trim();
    !slot.is_empty() && slot != UNASSIGNED
}

/// One resident's multi-week block assignment. Identity derives from the
/// resident name and source row index, so duplicate rows remain distinct
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationAssignment {
    pub id: String,
    pub pgy_year: String,
    pub resident_name: String,
    /// Display-normalized rotation name.
    pub rotation: String,
    /// The date-range text exactly as it appeared in the source row.
    pub raw_block: String,
    pub interval: DateInterval,
}

/// The four call-roster slots for one calendar date. Slot values are
/// free-text short names or nicknames, resolved against the rotation roster
/// only when a derived fact needs a full identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAssignment {
    pub date: NaiveDate,
    pub primary_day: String,
    pub primary_night: String,
    pub backup_day: String,
    pub backup_night: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveCategory {
    Annual,
    Sick,
    Conference,
    Interview,
    Other,
}

impl LeaveCategory {
    /// Case-insensitive substring match; unrecognized text falls through to
    /// `Annual`.
    pub fn from_field(text: &str) -> Self {
        let value = text.to_lowercase();
        if value.contains("sick") {
            LeaveCategory::Sick
        } else if value.contains("conference") {
            LeaveCategory::Conference
        } else if value.contains("interview") {
            LeaveCategory::Interview
        } else if value.contains("other") {
            LeaveCategory::Other
        } else {
            LeaveCategory::Annual
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "Annual",
            LeaveCategory::Sick => "Sick",
            LeaveCategory::Conference => "Conference",
            LeaveCategory::Interview => "Interview",
            LeaveCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Requested,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Case-insensitive substring match; unrecognized text falls through to
    /// `Requested`.
    pub fn from_field(text: &str) -> Self {
        let value = text.to_lowercase();
        if value.contains("approved") {
            LeaveStatus::Approved
        } else if value.contains("rejected") {
            LeaveStatus::Rejected
        } else {
            LeaveStatus::Requested
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Requested => "Requested",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub resident_name: String,
    pub interval: DateInterval,
    pub category: LeaveCategory,
    pub status: LeaveStatus,
}
