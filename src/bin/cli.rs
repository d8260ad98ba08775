use chrono::{Datelike, Local, NaiveDate};
use residency_roster::{
    DatasetKind, DerivationEngine, ScheduleStore, SqliteDatasetStore, dates, import,
    persistence::DatasetStore, rotation,
};
use std::fs;
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                          Show this help\n  day <M/D/YYYY>                Show rotations, call, and post-call for a date\n  resident <name>               Look up a resident by full or partial name\n  upcoming <name>               List upcoming call shifts from today\n  leaves [name]                 Show leave requests, optionally for one resident\n  stats                         Show leave-request totals\n  sources                       Show whether each dataset is custom or default\n  load <rotations|call|vacation> <path>\n                                Store a custom CSV file for a schema\n  reset                         Clear all custom CSVs, revert to defaults\n  quit|exit                     Exit"
    );
}

fn fmt_date(date: NaiveDate) -> String {
    format!("{} {}", date.weekday(), import::format_day(date))
}

fn print_day(store: &ScheduleStore, date: NaiveDate) {
    let engine = DerivationEngine::new(store);
    let stats = store.daily_stats(date);

    println!("{}", fmt_date(date));
    println!(
        "On service: {} residents across {} services",
        stats.total_on_service,
        stats.rotation_counts.len()
    );

    match store.call_on(date) {
        Some(call) => {
            println!("Call:");
            println!("  Primary day (TGH) : {}", call.primary_day);
            let va_primary = engine.va_primary_on(date);
            if !va_primary.is_empty() {
                println!("  Primary day (VA)  : {}", va_primary.join(", "));
            }
            println!("  Primary night     : {}", call.primary_night);
            println!("  Backup day        : {}", call.backup_day);
            println!("  Backup night      : {}", call.backup_night);
        }
        None => println!("Call: no roster entry for this date"),
    }

    let post_call = engine.post_call_names(date);
    if !post_call.is_empty() {
        println!("Post-call: {}", post_call.join(", "));
    }

    for (class, assignments) in store.group_by_class(date) {
        println!("{class}:");
        for assignment in assignments {
            let location = rotation::classify_location(&assignment.rotation);
            let marker = if engine.is_post_call(&assignment.resident_name, date) {
                "  (post-call)"
            } else {
                ""
            };
            println!(
                "  {} - {} [{}]{}",
                assignment.resident_name, assignment.rotation, location, marker
            );
        }
    }
}

fn print_resident(store: &ScheduleStore, fragment: &str) {
    let engine = DerivationEngine::new(store);
    let Some(name) = engine.resolve_name(fragment) else {
        println!("No resident matches '{fragment}'.");
        return;
    };

    let rotations = store.rotations_for(name);
    let class = rotations
        .first()
        .map(|r| r.pgy_year.as_str())
        .unwrap_or("unknown class");
    println!("{name} ({class})");
    for block in &rotations {
        println!(
            "  {} to {}  {}",
            import::format_day(block.interval.start_day()),
            import::format_day(block.interval.end_day()),
            block.rotation
        );
    }

    let leaves = store.leaves_for(name);
    if !leaves.is_empty() {
        println!("Leave requests:");
        for leave in leaves {
            println!(
                "  {} to {}  {} ({})",
                import::format_day(leave.interval.start_day()),
                import::format_day(leave.interval.end_day()),
                leave.category.as_str(),
                leave.status.as_str()
            );
        }
    }
}

fn print_upcoming(store: &ScheduleStore, fragment: &str) {
    let engine = DerivationEngine::new(store);
    let Some(name) = engine.resolve_name(fragment) else {
        println!("No resident matches '{fragment}'.");
        return;
    };
    let today = Local::now().date_naive();
    let shifts = engine.upcoming_calls(name, today);
    if shifts.is_empty() {
        println!("No upcoming call shifts for {name}.");
        return;
    }
    println!("Upcoming call for {name}:");
    for shift in shifts {
        println!("  {}", fmt_date(shift.date));
    }
}

fn print_leaves(store: &ScheduleStore, fragment: Option<&str>) {
    let leaves = match fragment {
        Some(fragment) => store.leaves_for(fragment),
        None => store.leaves().iter().collect(),
    };
    if leaves.is_empty() {
        println!("No leave requests found.");
        return;
    }
    for leave in leaves {
        println!(
            "  {}  {} to {}  {} ({})",
            leave.resident_name,
            import::format_day(leave.interval.start_day()),
            import::format_day(leave.interval.end_day()),
            leave.category.as_str(),
            leave.status.as_str()
        );
    }
}

fn print_sources(store: &ScheduleStore) {
    let sources = store.sources();
    println!("rotations: {}", sources.rotations.as_str());
    println!("call     : {}", sources.call.as_str());
    println!("vacation : {}", sources.leaves.as_str());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db_path =
        std::env::var("RESIDENCY_ROSTER_DB").unwrap_or_else(|_| "roster.db".to_string());
    let datasets = match SqliteDatasetStore::new(&db_path) {
        Ok(datasets) => datasets,
        Err(err) => {
            eprintln!("Failed to open dataset store at {db_path}: {err}");
            std::process::exit(1);
        }
    };
    let mut store = match ScheduleStore::load(&datasets) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Failed to load datasets: {err}");
            std::process::exit(1);
        }
    };

    println!("Residency Roster (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let rest = input[cmd.len()..].trim();

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "day" => match dates::parse_date(rest) {
                Some(date) => print_day(&store, date),
                None => println!("Could not parse date '{rest}', expected M/D/YYYY."),
            },
            "resident" => {
                if rest.is_empty() {
                    println!("Usage: resident <name>");
                } else {
                    print_resident(&store, rest);
                }
            }
            "upcoming" => {
                if rest.is_empty() {
                    println!("Usage: upcoming <name>");
                } else {
                    print_upcoming(&store, rest);
                }
            }
            "leaves" => {
                let fragment = if rest.is_empty() { None } else { Some(rest) };
                print_leaves(&store, fragment);
            }
            "stats" => {
                let stats = store.leave_stats();
                println!(
                    "Leave requests: {} total, {} pending, {} approved, {} rejected",
                    stats.total, stats.pending, stats.approved, stats.rejected
                );
            }
            "sources" => print_sources(&store),
            "load" => {
                let kind = parts.next().and_then(DatasetKind::from_str);
                let path = parts.next();
                match (kind, path) {
                    (Some(kind), Some(path)) => match fs::read_to_string(path) {
                        Ok(text) => {
                            if let Err(err) = datasets.save(kind, &text) {
                                println!("Failed to store {kind} CSV: {err}");
                                continue;
                            }
                            match ScheduleStore::load(&datasets) {
                                Ok(fresh) => {
                                    store = fresh;
                                    println!("Loaded {kind} data from {path}.");
                                    print_sources(&store);
                                }
                                Err(err) => println!("Failed to reload datasets: {err}"),
                            }
                        }
                        Err(err) => println!("Could not read {path}: {err}"),
                    },
                    _ => println!("Usage: load <rotations|call|vacation> <path>"),
                }
            }
            "reset" => {
                let mut failed = false;
                for kind in DatasetKind::ALL {
                    if let Err(err) = datasets.clear(kind) {
                        println!("Failed to clear {kind} data: {err}");
                        failed = true;
                    }
                }
                if !failed {
                    match ScheduleStore::load(&datasets) {
                        Ok(fresh) => {
                            store = fresh;
                            println!("Reverted to embedded default datasets.");
                        }
                        Err(err) => println!("Failed to reload datasets: {err}"),
                    }
                }
            }
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}
