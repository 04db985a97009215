mod common;
use common::{day, machines, records};

use vendcal::core::calendar::{
    MachineFilter, MaintenanceCalendar, build_month_grid, classify_severity, events_for_date,
    next_maintenance_status, tooltip_text,
};
use vendcal::errors::{AppError, RecordIssue, RecordRef};
use vendcal::models::event_kind::EventKind;
use vendcal::models::machine::VendingMachine;
use vendcal::models::maintenance::MaintenanceRecord;
use vendcal::models::severity::Severity;

#[test]
fn test_severity_boundaries() {
    let reference = day("2026-02-16");

    assert_eq!(classify_severity(day("2026-02-15"), reference), Severity::Overdue);
    assert_eq!(classify_severity(day("2026-02-16"), reference), Severity::Upcoming);
    assert_eq!(classify_severity(day("2026-02-21"), reference), Severity::Upcoming);
    assert_eq!(classify_severity(day("2026-02-22"), reference), Severity::Planned);
}

#[test]
fn test_severity_partitions_every_offset() {
    let reference = day("2026-02-16");

    for offset in -400..400 {
        let date = reference + chrono::Duration::days(offset);
        let expected = if offset < 0 {
            Severity::Overdue
        } else if offset <= 5 {
            Severity::Upcoming
        } else {
            Severity::Planned
        };
        assert_eq!(classify_severity(date, reference), expected, "offset {offset}");
    }
}

#[test]
fn test_single_scheduled_machine_round_trip() {
    let machines = vec![VendingMachine::new(
        7,
        "VendCore X-200",
        "Nevsky 50",
        Some("2026-02-16"),
    )];

    let result = events_for_date(day("2026-02-16"), &machines, &[]);

    assert_eq!(result.value.len(), 1);
    let event = &result.value[0];
    assert_eq!(event.kind, EventKind::Scheduled);
    assert_eq!(event.machine_name, "VendCore X-200");
    assert_eq!(event.detail, "Nevsky 50");
    assert!(result.diagnostics.is_empty());
    assert_eq!(
        classify_severity(day("2026-02-16"), day("2026-02-16")),
        Severity::Upcoming
    );
}

#[test]
fn test_events_for_date_order_and_time_normalization() {
    let result = events_for_date(day("2026-02-16"), &machines(), &records());

    let summary: Vec<(EventKind, &str)> = result
        .value
        .iter()
        .map(|e| (e.kind, e.machine_name.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (EventKind::Scheduled, "VendCore X-200"),
            (EventKind::Scheduled, "Snack Pro"),
            (EventKind::Completed, "VendCore X-200"),
            (EventKind::Completed, "Machine #42"),
        ]
    );
    assert_eq!(result.value[2].problems.as_deref(), Some("Dirty sensors"));
    assert_eq!(result.value[3].detail, "Coin acceptor fix");
}

#[test]
fn test_events_for_date_is_pure() {
    let machines = machines();
    let records = records();
    let before = (machines.clone(), records.clone());

    let first = events_for_date(day("2026-02-16"), &machines, &records);
    let second = events_for_date(day("2026-02-16"), &machines, &records);

    assert_eq!(first, second);
    assert_eq!((machines, records), before);
}

#[test]
fn test_unresolved_machine_keeps_event() {
    let records = vec![MaintenanceRecord::new(99, "2026-03-01", "Lock replaced")];

    let result = events_for_date(day("2026-03-01"), &[], &records);

    assert_eq!(result.value.len(), 1);
    assert_eq!(result.value[0].kind, EventKind::Completed);
    assert_eq!(result.value[0].machine_name, "Machine #99");
    assert_eq!(
        result.diagnostics.issues,
        vec![RecordIssue::UnresolvedMachine {
            record: RecordRef::Maintenance {
                position: 0,
                note_id: None
            },
            machine_id: 99,
        }]
    );
}

#[test]
fn test_malformed_dates_do_not_hide_valid_records() {
    let result = events_for_date(day("2026-02-17"), &machines(), &records());

    assert_eq!(result.value.len(), 1);
    assert_eq!(result.value[0].machine_name, "Snack Pro");
    assert_eq!(result.value[0].detail, "Refill");

    // Coffee Max "16/02/2026" and the "2026-13-40" record
    assert_eq!(result.diagnostics.malformed_dates(), 2);
    assert_eq!(result.diagnostics.unresolved_machines(), 1);
}

#[test]
fn test_empty_snapshots_yield_no_events() {
    let result = events_for_date(day("2026-02-16"), &[], &[]);
    assert!(result.value.is_empty());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_position_is_never_identity() {
    // Machine without MachineID sits at position 0; record points at id 1
    let mut anonymous = VendingMachine::new(0, "No Id", "Somewhere", None);
    anonymous.id = None;
    let records = vec![MaintenanceRecord::new(1, "2026-02-16", "Check")];

    let result = events_for_date(day("2026-02-16"), &[anonymous], &records);

    assert_eq!(result.value[0].machine_name, "Machine #1");
}

#[test]
fn test_month_grid_leap_february() {
    let grid = build_month_grid(2024, 1, &[], &[], day("2026-02-16"))
        .expect("valid month")
        .value;

    // 2024-02-01 is a Thursday
    assert_eq!(grid.leading_blanks(), 3);
    assert_eq!(grid.day_count(), 29);
    assert_eq!(grid.cells.len(), 32);
    assert_eq!(grid.title(), "February 2024");
}

#[test]
fn test_month_grid_common_february() {
    let grid = build_month_grid(2025, 1, &[], &[], day("2026-02-16"))
        .expect("valid month")
        .value;

    // 2025-02-01 is a Saturday
    assert_eq!(grid.leading_blanks(), 5);
    assert_eq!(grid.day_count(), 28);
}

#[test]
fn test_month_grid_cells_carry_events_and_severity() {
    let rendered = build_month_grid(2026, 1, &machines(), &records(), day("2026-02-16"))
        .expect("valid month");
    let grid = rendered.value;

    // 2026-02-01 is a Sunday
    assert_eq!(grid.leading_blanks(), 6);
    assert!(grid.cells[..6].iter().all(|c| c.events.is_empty() && c.date.is_none()));

    let sixteenth = &grid.cells[6 + 15];
    assert_eq!(sixteenth.date, Some(day("2026-02-16")));
    assert_eq!(sixteenth.events.len(), 4);
    assert_eq!(sixteenth.severity, Some(Severity::Upcoming));
    assert!(sixteenth.is_reference);

    let first = &grid.cells[6];
    assert!(first.events.is_empty());
    assert_eq!(first.severity, None);

    assert_eq!(rendered.diagnostics.malformed_dates(), 2);
}

#[test]
fn test_month_grid_rejects_month_out_of_range() {
    assert!(build_month_grid(2026, 12, &[], &[], day("2026-02-16")).is_err());
}

#[test]
fn test_year_calendar_reports_issues_once() {
    let machines = machines();
    let records = records();
    let calendar = MaintenanceCalendar::from_parts(
        &machines,
        &records,
        day("2026-02-16"),
        MachineFilter::All,
    );

    let year = calendar.year(2026).expect("year");

    assert_eq!(year.months.len(), 12);
    let total_days: usize = year.months.iter().map(|m| m.day_count()).sum();
    assert_eq!(total_days, 365);
    assert_eq!(calendar.diagnostics().len(), 3);
}

#[test]
fn test_machine_filter_restricts_events() {
    let machines = machines();
    let records = records();
    let calendar = MaintenanceCalendar::from_parts(
        &machines,
        &records,
        day("2026-02-16"),
        MachineFilter::Only(1),
    );

    let events = calendar.events_on(day("2026-02-16"));

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.machine_name == "VendCore X-200"));
    assert!(calendar.events_on(day("2026-02-17")).is_empty());
}

#[test]
fn test_week_view_starts_on_monday() {
    let machines = machines();
    let records = records();
    let calendar = MaintenanceCalendar::from_parts(
        &machines,
        &records,
        day("2026-02-10"),
        MachineFilter::All,
    );

    let week = calendar.week(day("2026-02-18")).expect("week view");

    assert_eq!(week.start, day("2026-02-16"));
    assert_eq!(week.iso_week, 8);
    assert_eq!(week.iso_year, 2026);
    assert_eq!(week.days.len(), 7);
    assert_eq!(week.days[0].severity, Some(Severity::Planned));
    assert_eq!(week.days[1].events.len(), 1);
    assert!(week.days[2..].iter().all(|c| !c.has_events()));
}

#[test]
fn test_week_view_at_the_edges_of_the_date_range() {
    let machines = machines();
    let calendar =
        MaintenanceCalendar::from_parts(&machines, &[], day("2026-02-16"), MachineFilter::All);

    // MAX is a Monday: the rest of its week does not exist
    assert!(matches!(
        calendar.week(chrono::NaiveDate::MAX),
        Err(AppError::InvalidDate(_))
    ));
    // MIN is a Thursday: its Monday does not exist
    assert!(matches!(
        calendar.week(chrono::NaiveDate::MIN),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_next_maintenance_status_per_machine() {
    let machines = machines();

    let result = next_maintenance_status(&machines, day("2026-02-10"));

    assert_eq!(result.value.len(), 4);
    let first = result.value[0].expect("machine 1 status");
    assert_eq!(first.next, day("2026-02-16"));
    assert_eq!(first.severity, Severity::Planned);
    assert_eq!(result.value[1].map(|s| s.severity), Some(Severity::Planned));
    assert_eq!(result.value[2], None);
    assert_eq!(result.value[3], None);

    assert_eq!(result.diagnostics.len(), 1);
    assert!(matches!(
        result.diagnostics.issues[0],
        RecordIssue::MalformedDate {
            record: RecordRef::Machine { position: 2, .. },
            ..
        }
    ));

    let later = next_maintenance_status(&machines, day("2026-02-17"));
    assert_eq!(later.value[0].map(|s| s.severity), Some(Severity::Overdue));
}

#[test]
fn test_overdue_day_before_reference() {
    let machines = vec![VendingMachine::new(1, "A", "B", Some("2026-02-10"))];
    let calendar = MaintenanceCalendar::from_parts(
        &machines,
        &[],
        day("2026-02-16"),
        MachineFilter::All,
    );

    let cell = calendar.day(day("2026-02-10"));

    assert_eq!(cell.severity, Some(Severity::Overdue));
    assert!(!cell.is_reference);
}

#[test]
fn test_tooltip_forms() {
    let result = events_for_date(day("2026-02-16"), &machines(), &records());

    let single = tooltip_text(&result.value, true).expect("tooltip");
    assert!(single.starts_with("📅 VendCore X-200\n📍 Nevsky 50"));

    let all = tooltip_text(&result.value, false).expect("tooltip");
    assert!(all.starts_with("📅 Maintenance events:"));
    assert_eq!(all.matches('•').count(), 4);
    assert!(all.contains("⚠️ Dirty sensors"));

    assert!(tooltip_text(&[], false).is_none());
}
