#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use vendcal::models::{machine::VendingMachine, maintenance::MaintenanceRecord};

pub const MACHINES_JSON: &str = r#"[
  {"MachineID": 1, "Model": "VendCore X-200", "Location": "Nevsky 50", "DateOfNextFixing": "2026-02-16", "StatusName": "Working", "FullIncome": 1250000.0},
  {"MachineID": 2, "Model": "Snack Pro", "Location": "Airport Terminal B", "DateOfNextFixing": "Mon, 23 Feb 2026 00:00:00 GMT"},
  {"MachineID": 3, "Model": "Coffee Max", "Location": "Central Station", "DateOfNextFixing": "not-a-date"}
]"#;

pub const MAINTENANCE_JSON: &str = r#"[
  {"NoteID": 10, "MachineID": 1, "MaintenanceDate": "2026-02-10", "Description": "Sensor cleaning", "Problems": "Dirty product sensors", "DoneByUser": "Ivan Petrov"},
  {"NoteID": 11, "MachineID": 42, "MaintenanceDate": "2026-02-16", "Description": "Coin acceptor fix", "Problems": null, "DoneByUser": "Ivan Petrov"},
  {"NoteID": 12, "MachineID": 2, "MaintenanceDate": "2026-02-31", "Description": "Broken date", "DoneByUser": "Anna Sidorova"}
]"#;

pub const USERS_JSON: &str = r#"[
  {"UserID": 1, "FullName": "Ivan Petrov", "Contacts": "ivan@example.com", "Role": "Operator"},
  {"UserID": 2, "FullName": "Anna Sidorova", "Contacts": "anna@example.com", "Role": "Administrator"},
  {"UserID": 3, "FullName": "Olga Guest", "Contacts": "olga@example.com", "Role": "Accountant"}
]"#;

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// Unique scratch directory inside the system temp dir, emptied first.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("vendcal_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn write_file(dir: &PathBuf, file: &str, content: &str) -> String {
    let path = dir.join(file);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Binary with an isolated config dir, so a user config never leaks in.
pub fn vc(dir: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("vendcal");
    cmd.env("VENDCAL_CONFIG_DIR", dir.join("config"));
    cmd.env_remove("VENDCAL_LOG");
    cmd
}

/// Writes the three standard fixtures and returns the global snapshot args.
pub fn fixture_args(dir: &PathBuf) -> Vec<String> {
    vec![
        "--no-color".to_string(),
        "--machines".to_string(),
        write_file(dir, "machines.json", MACHINES_JSON),
        "--maintenance".to_string(),
        write_file(dir, "maintenance.json", MAINTENANCE_JSON),
        "--users".to_string(),
        write_file(dir, "users.json", USERS_JSON),
    ]
}

pub fn machines() -> Vec<VendingMachine> {
    vec![
        VendingMachine::new(1, "VendCore X-200", "Nevsky 50", Some("2026-02-16")),
        VendingMachine::new(2, "Snack Pro", "Airport Terminal B", Some("2026-02-16T09:30:00")),
        VendingMachine::new(3, "Coffee Max", "Central Station", Some("16/02/2026")),
        VendingMachine::new(4, "Juice Bar", "Mall", None),
    ]
}

pub fn records() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord::new(1, "2026-02-16", "Sensor cleaning").with_problems("Dirty sensors"),
        MaintenanceRecord::new(42, "2026-02-16 14:00:00", "Coin acceptor fix"),
        MaintenanceRecord::new(2, "2026-13-40", "Broken date"),
        MaintenanceRecord::new(2, "2026-02-17", "Refill"),
    ]
}
