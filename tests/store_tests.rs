use chrono::NaiveDate;
use residency_roster::{
    DatasetKind, DatasetSource, DatasetStore, Location, MemoryDatasetStore, ScheduleStore, import,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn defaults_produce_full_collections() {
    let store = ScheduleStore::with_defaults();
    assert_eq!(store.rotations().len(), 96);
    assert_eq!(store.call_schedule().len(), 31);
    assert_eq!(store.leaves().len(), 5);
    assert_eq!(store.sources().rotations, DatasetSource::Default);
    assert!(!store.uses_custom_data());
}

#[test]
fn active_on_respects_block_boundaries() {
    let store = ScheduleStore::with_defaults();
    // All twelve residents share the same block calendar.
    assert_eq!(store.active_on(d(2025, 7, 1)).len(), 12);
    assert_eq!(store.active_on(d(2025, 8, 8)).len(), 12);
    // The weekend between blocks has nobody assigned.
    assert!(store.active_on(d(2025, 8, 9)).is_empty());
    assert!(store.active_on(d(2025, 6, 30)).is_empty());
}

#[test]
fn call_lookup_and_previous_day() {
    let store = ScheduleStore::with_defaults();
    let call = store.call_on(d(2025, 12, 1)).unwrap();
    assert_eq!(call.primary_night, "Kat");

    let previous = store.call_on_previous_day(d(2025, 12, 2)).unwrap();
    assert_eq!(previous.date, d(2025, 12, 1));
    assert!(store.call_on_previous_day(d(2025, 12, 1)).is_none());
}

#[test]
fn duplicate_call_dates_resolve_to_first_entry() {
    let csv = "\
12/1/2025,Ana,Ben,Cleo,Dan
12/1/2025,Eve,Finn,Gil,Hana
";
    let store = ScheduleStore::from_records(Vec::new(), import::parse_call_csv(csv), Vec::new());
    assert_eq!(store.call_schedule().len(), 2);
    assert_eq!(store.call_on(d(2025, 12, 1)).unwrap().primary_day, "Ana");
    assert!(store.uses_custom_data());
}

#[test]
fn rotations_for_returns_blocks_in_calendar_order() {
    let store = ScheduleStore::with_defaults();
    let blocks = store.rotations_for("Hadi Joud");
    assert_eq!(blocks.len(), 8);
    assert_eq!(blocks[0].rotation, "Neuro");
    assert_eq!(blocks[0].interval.start_day(), d(2025, 7, 1));
    assert_eq!(blocks[7].interval.end_day(), d(2026, 6, 30));
    for pair in blocks.windows(2) {
        assert!(pair[0].interval.start <= pair[1].interval.start);
    }
    assert!(store.rotations_for("Nobody").is_empty());
}

#[test]
fn leave_lookup_matches_in_both_directions() {
    let store = ScheduleStore::with_defaults();
    // Query shorter than the stored name.
    let by_fragment = store.leaves_for("Lea");
    assert_eq!(by_fragment.len(), 1);
    assert_eq!(by_fragment[0].resident_name, "Lea Carter");
    // Query longer than a stored short name.
    let csv = "Lea,12/22/2025,12/26/2025,Annual,Approved\n";
    let store =
        ScheduleStore::from_records(Vec::new(), Vec::new(), import::parse_vacation_csv(csv));
    assert_eq!(store.leaves_for("Lea Carter").len(), 1);
}

#[test]
fn filter_on_matches_names_and_rotations() {
    let store = ScheduleStore::with_defaults();
    let date = d(2025, 7, 15);
    assert_eq!(store.filter_on(date, "").len(), 12);
    assert_eq!(store.filter_on(date, "  plastics ").len(), 1);
    assert_eq!(store.filter_on(date, "nidhi")[0].resident_name, "Sama Nidhi");
    assert!(store.filter_on(date, "zebra").is_empty());
}

#[test]
fn grouping_by_class_and_location() {
    let store = ScheduleStore::with_defaults();
    let date = d(2025, 7, 15);

    let by_class = store.group_by_class(date);
    let classes: Vec<&str> = by_class.keys().map(String::as_str).collect();
    assert_eq!(classes, ["PGY-2", "PGY-3", "PGY-4"]);
    assert!(by_class.values().all(|group| group.len() == 4));

    let by_location = store.group_by_location(date);
    assert_eq!(by_location[&Location::Both].len(), 1);
    assert_eq!(by_location[&Location::Va].len(), 4);
    assert_eq!(by_location[&Location::Tgh].len(), 7);
}

#[test]
fn daily_and_leave_stats() {
    let store = ScheduleStore::with_defaults();
    let stats = store.daily_stats(d(2025, 7, 15));
    assert_eq!(stats.total_on_service, 12);
    assert_eq!(stats.rotation_counts["Plastics"], 1);
    assert_eq!(stats.rotation_counts.values().sum::<usize>(), 12);

    let leave_stats = store.leave_stats();
    assert_eq!(leave_stats.total, 5);
    assert_eq!(leave_stats.approved, 3);
    assert_eq!(leave_stats.pending, 2);
    assert_eq!(leave_stats.rejected, 0);
}

#[test]
fn custom_blob_wins_per_schema() {
    let datasets = MemoryDatasetStore::new();
    datasets
        .save(DatasetKind::Call, "12/1/2025,Ana,Ben,Cleo,Dan\n")
        .unwrap();

    let store = ScheduleStore::load(&datasets).unwrap();
    assert_eq!(store.sources().call, DatasetSource::Custom);
    assert_eq!(store.call_schedule().len(), 1);
    // The other schemas keep their embedded defaults.
    assert_eq!(store.sources().rotations, DatasetSource::Default);
    assert_eq!(store.rotations().len(), 96);
    assert!(store.uses_custom_data());
}

#[test]
fn unusable_custom_blob_falls_back_to_defaults() {
    let datasets = MemoryDatasetStore::new();
    datasets.save(DatasetKind::Rotations, "%%% not a csv %%%").unwrap();
    datasets.save(DatasetKind::Vacation, "").unwrap();

    let store = ScheduleStore::load(&datasets).unwrap();
    assert_eq!(store.sources().rotations, DatasetSource::Default);
    assert_eq!(store.rotations().len(), 96);
    assert_eq!(store.sources().leaves, DatasetSource::Default);
    assert_eq!(store.leaves().len(), 5);
    assert!(!store.uses_custom_data());
}

#[test]
fn clearing_a_blob_reverts_that_schema() {
    let datasets = MemoryDatasetStore::new();
    datasets
        .save(DatasetKind::Call, "12/1/2025,Ana,Ben,Cleo,Dan\n")
        .unwrap();
    datasets.clear(DatasetKind::Call).unwrap();

    let store = ScheduleStore::load(&datasets).unwrap();
    assert_eq!(store.sources().call, DatasetSource::Default);
    assert_eq!(store.call_schedule().len(), 31);
}
