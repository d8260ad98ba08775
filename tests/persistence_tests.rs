#![cfg(feature = "sqlite")]

use residency_roster::{
    DatasetKind, DatasetSource, DatasetStore, ScheduleStore, SqliteDatasetStore,
};

#[test]
fn save_load_clear_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteDatasetStore::new(dir.path().join("roster.db")).unwrap();

    assert!(store.load(DatasetKind::Call).unwrap().is_none());

    store.save(DatasetKind::Call, "12/1/2025,Ana,Ben,Cleo,Dan\n").unwrap();
    assert_eq!(
        store.load(DatasetKind::Call).unwrap().as_deref(),
        Some("12/1/2025,Ana,Ben,Cleo,Dan\n")
    );

    // Saving again overwrites the previous blob.
    store.save(DatasetKind::Call, "12/2/2025,Eve,Finn,Gil,Hana\n").unwrap();
    assert_eq!(
        store.load(DatasetKind::Call).unwrap().as_deref(),
        Some("12/2/2025,Eve,Finn,Gil,Hana\n")
    );

    store.clear(DatasetKind::Call).unwrap();
    assert!(store.load(DatasetKind::Call).unwrap().is_none());
}

#[test]
fn schemas_are_stored_independently() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteDatasetStore::new(dir.path().join("roster.db")).unwrap();

    store.save(DatasetKind::Rotations, "rotations blob").unwrap();
    store.save(DatasetKind::Vacation, "vacation blob").unwrap();
    store.clear(DatasetKind::Rotations).unwrap();

    assert!(store.load(DatasetKind::Rotations).unwrap().is_none());
    assert_eq!(
        store.load(DatasetKind::Vacation).unwrap().as_deref(),
        Some("vacation blob")
    );
}

#[test]
fn blobs_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    {
        let store = SqliteDatasetStore::new(&path).unwrap();
        store.save(DatasetKind::Call, "12/1/2025,Ana,Ben,Cleo,Dan\n").unwrap();
    }

    let reopened = SqliteDatasetStore::new(&path).unwrap();
    let schedule = ScheduleStore::load(&reopened).unwrap();
    assert_eq!(schedule.sources().call, DatasetSource::Custom);
    assert_eq!(schedule.call_schedule().len(), 1);
    assert_eq!(schedule.sources().rotations, DatasetSource::Default);
}
