use chrono::NaiveDate;
use residency_roster::{DerivationEngine, ScheduleStore, import};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn post_call_comes_from_previous_night_slots() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);

    // 12/1 night call was Kat (primary) and David (backup).
    assert_eq!(engine.post_call_names(d(2025, 12, 2)), ["kat", "david"]);
    assert!(engine.is_post_call("Katherine Tsay", d(2025, 12, 2)));
    assert!(engine.is_post_call("David Drucker", d(2025, 12, 2)));
    assert!(!engine.is_post_call("Lea Carter", d(2025, 12, 2)));
}

#[test]
fn no_roster_entry_for_previous_day_means_nobody_post_call() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);
    // The call roster starts on 12/1, so 11/30 has no entry.
    assert!(engine.post_call_names(d(2025, 12, 1)).is_empty());
    assert!(!engine.is_post_call("Katherine Tsay", d(2025, 12, 1)));
}

#[test]
fn unfilled_night_slots_are_not_post_call() {
    let csv = "12/1/2025,Ana,None,Cleo,\n";
    let store = ScheduleStore::from_records(Vec::new(), import::parse_call_csv(csv), Vec::new());
    let engine = DerivationEngine::new(&store);
    assert!(engine.post_call_names(d(2025, 12, 2)).is_empty());
}

#[test]
fn plastics_residents_cover_va_primary() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);
    assert_eq!(engine.va_primary_on(d(2025, 7, 15)), ["Sama Nidhi"]);
    assert_eq!(engine.va_primary_on(d(2025, 12, 2)), ["John Musser"]);
    // Between blocks nobody is on a plastics rotation.
    assert!(engine.va_primary_on(d(2025, 8, 9)).is_empty());
}

#[test]
fn name_resolution_prefers_exact_then_first_containing() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);

    assert_eq!(engine.resolve_name("katherine tsay"), Some("Katherine Tsay"));
    assert_eq!(engine.resolve_name("Nidhi"), Some("Sama Nidhi"));
    assert_eq!(engine.resolve_name("  drucker  "), Some("David Drucker"));
    // Ambiguous fragments resolve to the first resident in roster order.
    assert_eq!(engine.resolve_name("a"), Some("Hadi Joud"));
    assert_eq!(engine.resolve_name("Zzz"), None);
    assert_eq!(engine.resolve_name("   "), None);
}

#[test]
fn upcoming_calls_cover_primary_night_every_day() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);

    let dates: Vec<NaiveDate> = engine
        .upcoming_calls("Hadi Joud", d(2025, 12, 1))
        .iter()
        .map(|c| c.date)
        .collect();
    assert_eq!(
        dates,
        [
            d(2025, 12, 2),
            d(2025, 12, 6),
            d(2025, 12, 14),
            d(2025, 12, 19),
            d(2025, 12, 24),
        ]
    );
}

#[test]
fn upcoming_calls_include_primary_day_only_on_weekends() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);

    // Lea's only primary slot in December is day call on Sunday 12/7; her
    // weekday backup shifts never appear.
    let dates: Vec<NaiveDate> = engine
        .upcoming_calls("Lea Carter", d(2025, 12, 1))
        .iter()
        .map(|c| c.date)
        .collect();
    assert_eq!(dates, [d(2025, 12, 7)]);
}

#[test]
fn weekday_primary_day_call_is_excluded() {
    // Tuesday 12/2 day call does not count; Saturday 12/6 does.
    let csv = "\
12/2/2025,Lea,None,None,None
12/6/2025,Lea,None,None,None
";
    let store = ScheduleStore::from_records(Vec::new(), import::parse_call_csv(csv), Vec::new());
    let engine = DerivationEngine::new(&store);
    let dates: Vec<NaiveDate> = engine
        .upcoming_calls("Lea Carter", d(2025, 12, 1))
        .iter()
        .map(|c| c.date)
        .collect();
    assert_eq!(dates, [d(2025, 12, 6)]);
}

#[test]
fn upcoming_calls_start_at_the_reference_date() {
    let store = ScheduleStore::with_defaults();
    let engine = DerivationEngine::new(&store);

    let dates: Vec<NaiveDate> = engine
        .upcoming_calls("Hadi Joud", d(2025, 12, 15))
        .iter()
        .map(|c| c.date)
        .collect();
    assert_eq!(dates, [d(2025, 12, 19), d(2025, 12, 24)]);
}
