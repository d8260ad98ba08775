use crate::defaults;
use crate::import;
use crate::persistence::{
    DatasetKind, DatasetSource, DatasetStore, LoadedDataset, PersistenceResult,
};
use crate::roster::{CallAssignment, LeaveRequest, LeaveStatus, RotationAssignment};
use crate::rotation::{self, Location};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Head counts for one selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub total_on_service: usize,
    pub rotation_counts: BTreeMap<String, usize>,
}

/// Aggregate leave-request counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Which source each schema's collection was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSources {
    pub rotations: DatasetSource,
    pub call: DatasetSource,
    pub leaves: DatasetSource,
}

impl DatasetSources {
    fn all(source: DatasetSource) -> Self {
        Self {
            rotations: source,
            call: source,
            leaves: source,
        }
    }
}

/// The three parsed collections for one session. Constructed fresh from a
/// chosen data source and handed to consumers; replaced wholesale when new
/// CSV content is loaded.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    rotations: Vec<RotationAssignment>,
    call: Vec<CallAssignment>,
    leaves: Vec<LeaveRequest>,
    sources: DatasetSources,
}

impl ScheduleStore {
    /// Builds a store from explicit collections (tagged as custom data).
    pub fn from_records(
        rotations: Vec<RotationAssignment>,
        call: Vec<CallAssignment>,
        leaves: Vec<LeaveRequest>,
    ) -> Self {
        Self {
            rotations,
            call,
            leaves,
            sources: DatasetSources::all(DatasetSource::Custom),
        }
    }

    /// Builds a store entirely from the embedded default datasets.
    pub fn with_defaults() -> Self {
        Self {
            rotations: import::parse_rotations_csv(defaults::ROTATIONS_CSV),
            call: import::parse_call_csv(defaults::CALL_CSV),
            leaves: import::parse_vacation_csv(defaults::VACATION_CSV),
            sources: DatasetSources::all(DatasetSource::Default),
        }
    }

    /// Loads each schema independently: a persisted custom blob that parses
    /// to at least one record wins, anything else falls back to the embedded
    /// default for that schema alone.
    pub fn load(store: &dyn DatasetStore) -> PersistenceResult<Self> {
        let rotations = load_dataset(
            store,
            DatasetKind::Rotations,
            defaults::ROTATIONS_CSV,
            import::parse_rotations_csv,
        )?;
        let call = load_dataset(
            store,
            DatasetKind::Call,
            defaults::CALL_CSV,
            import::parse_call_csv,
        )?;
        let leaves = load_dataset(
            store,
            DatasetKind::Vacation,
            defaults::VACATION_CSV,
            import::parse_vacation_csv,
        )?;

        Ok(Self {
            sources: DatasetSources {
                rotations: rotations.source,
                call: call.source,
                leaves: leaves.source,
            },
            rotations: rotations.records,
            call: call.records,
            leaves: leaves.records,
        })
    }

    pub fn rotations(&self) -> &[RotationAssignment] {
        &self.rotations
    }

    pub fn call_schedule(&self) -> &[CallAssignment] {
        &self.call
    }

    pub fn leaves(&self) -> &[LeaveRequest] {
        &self.leaves
    }

    pub fn sources(&self) -> DatasetSources {
        self.sources
    }

    pub fn uses_custom_data(&self) -> bool {
        self.sources.rotations == DatasetSource::Custom
            || self.sources.call == DatasetSource::Custom
            || self.sources.leaves == DatasetSource::Custom
    }

    /// All assignments whose interval contains the date, inclusive both ends.
    pub fn active_on(&self, date: NaiveDate) -> Vec<&RotationAssignment> {
        self.rotations
            .iter()
            .filter(|r| r.interval.contains_day(date))
            .collect()
    }

    /// First call assignment on the calendar date. Duplicate dates both stay
    /// queryable; the first match in input order wins.
    pub fn call_on(&self, date: NaiveDate) -> Option<&CallAssignment> {
        self.call.iter().find(|c| c.date == date)
    }

    pub fn call_on_previous_day(&self, date: NaiveDate) -> Option<&CallAssignment> {
        self.call_on(date.pred_opt()?)
    }

    /// All rotation blocks for one resident (exact name), ascending by start.
    pub fn rotations_for(&self, resident_name: &str) -> Vec<&RotationAssignment> {
        let mut blocks: Vec<&RotationAssignment> = self
            .rotations
            .iter()
            .filter(|r| r.resident_name == resident_name)
            .collect();
        blocks.sort_by_key(|r| r.interval.start);
        blocks
    }

    /// Leave requests matching a resident name in either direction: the
    /// stored name may be an abbreviation of the query or vice versa.
    pub fn leaves_for(&self, resident_name: &str) -> Vec<&LeaveRequest> {
        let needle = resident_name.to_lowercase();
        self.leaves
            .iter()
            .filter(|l| {
                let stored = l.resident_name.to_lowercase();
                stored.contains(&needle) || needle.contains(&stored)
            })
            .collect()
    }

    /// Active assignments matching a search query against resident or
    /// rotation names; a blank query returns everyone active on the date.
    pub fn filter_on(&self, date: NaiveDate, query: &str) -> Vec<&RotationAssignment> {
        let active = self.active_on(date);
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return active;
        }
        active
            .into_iter()
            .filter(|r| {
                r.resident_name.to_lowercase().contains(&query)
                    || r.rotation.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Active assignments grouped by PGY class, in class order.
    pub fn group_by_class(&self, date: NaiveDate) -> BTreeMap<String, Vec<&RotationAssignment>> {
        let mut groups: BTreeMap<String, Vec<&RotationAssignment>> = BTreeMap::new();
        for assignment in self.active_on(date) {
            groups
                .entry(assignment.pgy_year.clone())
                .or_default()
                .push(assignment);
        }
        groups
    }

    /// Active assignments grouped by facility.
    pub fn group_by_location(
        &self,
        date: NaiveDate,
    ) -> BTreeMap<Location, Vec<&RotationAssignment>> {
        let mut groups: BTreeMap<Location, Vec<&RotationAssignment>> = BTreeMap::new();
        for assignment in self.active_on(date) {
            groups
                .entry(rotation::classify_location(&assignment.rotation))
                .or_default()
                .push(assignment);
        }
        groups
    }

    pub fn daily_stats(&self, date: NaiveDate) -> DailyStats {
        let active = self.active_on(date);
        let mut rotation_counts: BTreeMap<String, usize> = BTreeMap::new();
        for assignment in &active {
            *rotation_counts.entry(assignment.rotation.clone()).or_default() += 1;
        }
        DailyStats {
            total_on_service: active.len(),
            rotation_counts,
        }
    }

    pub fn leave_stats(&self) -> LeaveStats {
        let count =
            |status: LeaveStatus| self.leaves.iter().filter(|l| l.status == status).count();
        LeaveStats {
            total: self.leaves.len(),
            pending: count(LeaveStatus::Requested),
            approved: count(LeaveStatus::Approved),
            rejected: count(LeaveStatus::Rejected),
        }
    }
}

fn load_dataset<T>(
    store: &dyn DatasetStore,
    kind: DatasetKind,
    fallback: &str,
    parse: fn(&str) -> Vec<T>,
) -> PersistenceResult<LoadedDataset<T>> {
    if let Some(text) = store.load(kind)? {
        let records = parse(&text);
        if !records.is_empty() {
            return Ok(LoadedDataset {
                records,
                source: DatasetSource::Custom,
            });
        }
        tracing::warn!(
            kind = kind.as_str(),
            "custom dataset produced no records, using embedded defaults"
        );
    }
    Ok(LoadedDataset {
        records: parse(fallback),
        source: DatasetSource::Default,
    })
}
