mod common;
use common::{MACHINES_JSON, MAINTENANCE_JSON, USERS_JSON, temp_dir, write_file};

use std::path::PathBuf;
use vendcal::core::calendar::events_for_date;
use vendcal::data::snapshot::parse_collection;
use vendcal::data::{Collection, Snapshot, SnapshotPaths};
use vendcal::errors::{AppError, Diagnostics, RecordIssue};
use vendcal::models::machine::VendingMachine;
use vendcal::models::maintenance::MaintenanceRecord;
use vendcal::utils::date::parse_day;

#[test]
fn test_load_backend_exports() {
    let dir = temp_dir("snapshot_load");
    let paths = SnapshotPaths {
        machines: Some(PathBuf::from(write_file(&dir, "m.json", MACHINES_JSON))),
        maintenance: Some(PathBuf::from(write_file(&dir, "t.json", MAINTENANCE_JSON))),
        users: Some(PathBuf::from(write_file(&dir, "u.json", USERS_JSON))),
    };

    let loaded = Snapshot::load(&paths).expect("load snapshot");
    let snapshot = loaded.snapshot;

    assert_eq!(snapshot.machines.len(), 3);
    assert_eq!(snapshot.maintenance.len(), 3);
    assert_eq!(snapshot.users.len(), 3);
    assert!(loaded.diagnostics.is_empty());

    let first = snapshot.machine(1).expect("machine 1");
    assert_eq!(first.display_name(), "VendCore X-200");
    assert_eq!(first.full_income, Some(1250000.0));
    assert_eq!(snapshot.maintenance[1].problems, None);
    assert_eq!(snapshot.maintenance[0].done_by.as_deref(), Some("Ivan Petrov"));
}

#[test]
fn test_non_array_document_is_empty() {
    let mut diag = Diagnostics::default();
    let value = serde_json::json!("No maintenance data found");

    let records: Vec<MaintenanceRecord> =
        parse_collection(value, Collection::Maintenance, &mut diag);

    assert!(records.is_empty());
    assert!(diag.is_empty());
}

#[test]
fn test_bad_element_is_skipped_and_reported() {
    let mut diag = Diagnostics::default();
    let value = serde_json::json!([
        {"NoteID": 1, "MachineID": 1, "MaintenanceDate": "2026-01-22", "Description": "ok"},
        {"NoteID": 2, "MachineID": "not a number", "MaintenanceDate": "2026-01-23"},
        {"NoteID": 3, "MachineID": 2, "MaintenanceDate": "2026-01-24", "Description": "ok too"}
    ]);

    let records: Vec<MaintenanceRecord> =
        parse_collection(value, Collection::Maintenance, &mut diag);

    assert_eq!(records.len(), 2);
    assert_eq!(diag.len(), 1);
    assert!(matches!(diag.issues[0], RecordIssue::InvalidRecord { .. }));
    assert!(diag.issues[0].to_string().contains("maintenance note #2"));
}

#[test]
fn test_camel_case_aliases() {
    let mut diag = Diagnostics::default();
    let value = serde_json::json!([
        {"machineId": 5, "model": "Alias", "location": "Here", "nextFixingDate": "2026-05-01"}
    ]);

    let machines: Vec<VendingMachine> = parse_collection(value, Collection::Machines, &mut diag);

    assert_eq!(machines[0].id, Some(5));
    assert_eq!(machines[0].next_maintenance.as_deref(), Some("2026-05-01"));
}

#[test]
fn test_decimal_columns_as_strings_keep_the_machine() {
    let mut diag = Diagnostics::default();
    let value = serde_json::json!([
        {
            "MachineID": 1,
            "Model": "VendCore",
            "FullIncome": "12345.50",
            "SerialNumber": 120034,
            "InventoryNumber": 77,
            "PaymentType": null,
            "DateOfNextFixing": "2026-02-16"
        },
        {"MachineID": 2, "Model": "Snack Pro", "FullIncome": "n/a", "Manufacturer": {"id": 3}}
    ]);

    let machines: Vec<VendingMachine> = parse_collection(value, Collection::Machines, &mut diag);

    assert!(diag.is_empty());
    assert_eq!(machines.len(), 2);
    assert_eq!(machines[0].full_income, Some(12345.5));
    assert_eq!(machines[0].serial_number.as_deref(), Some("120034"));
    assert_eq!(machines[0].inventory_number.as_deref(), Some("77"));
    assert_eq!(machines[0].payment_type, None);
    assert_eq!(machines[1].full_income, None);
    assert_eq!(machines[1].manufacturer, None);

    let events = events_for_date(parse_day("2026-02-16").expect("date"), &machines, &[]);
    assert_eq!(events.value.len(), 1);
    assert_eq!(events.value[0].machine_name, "VendCore");
}

#[test]
fn test_missing_path_means_empty_collection() {
    let loaded = Snapshot::load(&SnapshotPaths::default()).expect("load");
    assert!(loaded.snapshot.is_empty());
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = temp_dir("snapshot_invalid_json");
    let paths = SnapshotPaths {
        machines: Some(PathBuf::from(write_file(&dir, "m.json", "[{broken"))),
        ..Default::default()
    };

    match Snapshot::load(&paths) {
        Err(AppError::Snapshot { path, .. }) => assert!(path.ends_with("m.json")),
        other => panic!("expected snapshot error, got {other:?}"),
    }
}

#[test]
fn test_parse_day_formats() {
    let expected = chrono::NaiveDate::from_ymd_opt(2026, 8, 1);

    assert_eq!(parse_day("2026-08-01"), expected);
    assert_eq!(parse_day(" 2026-08-01 "), expected);
    assert_eq!(parse_day("2026-08-01T23:59:59"), expected);
    assert_eq!(parse_day("2026-08-01T08:15:30.250"), expected);
    assert_eq!(parse_day("2026-08-01 10:00"), expected);
    assert_eq!(parse_day("2026-08-01T23:30:00+03:00"), expected);
    assert_eq!(parse_day("Sat, 01 Aug 2026 00:00:00 GMT"), expected);

    assert_eq!(parse_day(""), None);
    assert_eq!(parse_day("01.08.2026"), None);
    assert_eq!(parse_day("2026-02-30"), None);
}
