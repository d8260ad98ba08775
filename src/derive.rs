//! Cross-dataset facts not present in any raw record: post-call status, the
//! VA-primary override, fuzzy name resolution, and call lookahead.

use crate::roster::{self, CallAssignment};
use crate::store::ScheduleStore;
use chrono::{Datelike, NaiveDate, Weekday};

pub struct DerivationEngine<'a> {
    store: &'a ScheduleStore,
}

impl<'a> DerivationEngine<'a> {
    pub fn new(store: &'a ScheduleStore) -> Self {
        Self { store }
    }

    /// Lowercased night-slot references from the previous day's call record,
    /// skipping unfilled slots. These are the residents who worked last
    /// night's call.
    pub fn post_call_names(&self, date: NaiveDate) -> Vec<String> {
        let Some(call) = self.store.call_on_previous_day(date) else {
            return Vec::new();
        };
        [call.primary_night.as_str(), call.backup_night.as_str()]
            .into_iter()
            .filter(|slot| roster::is_assigned(slot))
            .map(str::to_lowercase)
            .collect()
    }

    /// Whether the resident is post-call on the date. Call slots carry short
    /// names or nicknames, so the containment test runs reference-into-name,
    /// never the other way around.
    pub fn is_post_call(&self, resident_name: &str, date: NaiveDate) -> bool {
        let name = resident_name.to_lowercase();
        self.post_call_names(date)
            .iter()
            .any(|reference| name.contains(reference.as_str()))
    }

    /// Residents covering VA primary day call: everyone active on the date
    /// whose rotation is a plastics block. The call record's own primary
    /// fields represent TGH.
    pub fn va_primary_on(&self, date: NaiveDate) -> Vec<String> {
        self.store
            .active_on(date)
            .into_iter()
            .filter(|r| r.rotation.to_lowercase().contains("plastics"))
            .map(|r| r.resident_name.clone())
            .collect()
    }

    /// Resolves a free-text fragment (often a first name or nickname) to a
    /// full roster name: exact case-insensitive match first, then the first
    /// containing match in roster order. Ambiguous fragments resolve to the
    /// first match; an unresolved fragment is a non-fatal diagnostic.
    pub fn resolve_name(&self, fragment: &str) -> Option<&'a str> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return None;
        }
        let needle = fragment.to_lowercase();
        let rotations = self.store.rotations();

        if let Some(hit) = rotations
            .iter()
            .find(|r| r.resident_name.to_lowercase() == needle)
        {
            return Some(hit.resident_name.as_str());
        }
        if let Some(hit) = rotations
            .iter()
            .find(|r| r.resident_name.to_lowercase().contains(&needle))
        {
            return Some(hit.resident_name.as_str());
        }

        tracing::warn!(fragment, "no resident record matches fragment");
        None
    }

    /// Call shifts on or after `from` involving the resident: primary night
    /// any day, primary day only on weekends (weekday day call is covered by
    /// the VA override and clinic staffing). Ascending by date.
    pub fn upcoming_calls(&self, resident_name: &str, from: NaiveDate) -> Vec<&'a CallAssignment> {
        let name = resident_name.to_lowercase();
        let involves =
            |slot: &str| roster::is_assigned(slot) && name.contains(&slot.to_lowercase());

        let mut shifts: Vec<&CallAssignment> = self
            .store
            .call_schedule()
            .iter()
            .filter(|entry| entry.date >= from)
            .filter(|entry| {
                let weekend = matches!(entry.date.weekday(), Weekday::Sat | Weekday::Sun);
                involves(&entry.primary_night) || (weekend && involves(&entry.primary_day))
            })
            .collect();
        shifts.sort_by_key(|entry| entry.date);
        shifts
    }
}
