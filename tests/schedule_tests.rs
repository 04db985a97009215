use vendcal::core::schedule::{RECENT_TASKS, build_work_schedule};
use vendcal::data::Snapshot;
use vendcal::models::machine::VendingMachine;
use vendcal::models::maintenance::MaintenanceRecord;
use vendcal::models::user::User;

fn roles() -> Vec<String> {
    vec!["Operator".to_string(), "Administrator".to_string()]
}

#[test]
fn test_schedule_groups_by_employee_and_role() {
    let snapshot = Snapshot::new(
        vec![VendingMachine::new(1, "VendCore X-200", "Nevsky 50", None)],
        vec![
            MaintenanceRecord::new(1, "2026-01-10", "Cleaning").performed_by("Ivan Petrov"),
            MaintenanceRecord::new(7, "2026-01-12", "Coins").performed_by("Ivan Petrov"),
            MaintenanceRecord::new(1, "2026-01-11", "Refill").performed_by("Anna Sidorova"),
        ],
    )
    .with_users(vec![
        User::new("Ivan Petrov", "operator"),
        User::new("Olga Guest", "Accountant"),
        User::new("Anna Sidorova", "Administrator"),
    ]);

    let cards = build_work_schedule(&snapshot, &roles());

    let names: Vec<&str> = cards.iter().map(|c| c.full_name.as_str()).collect();
    assert_eq!(names, vec!["Ivan Petrov", "Anna Sidorova"]);

    let ivan = &cards[0];
    assert_eq!(ivan.total_tasks, 2);
    assert_eq!(ivan.recent[0].description, "Coins");
    assert_eq!(ivan.recent[0].machine_name, "Machine #7");
    assert_eq!(ivan.recent[1].machine_name, "VendCore X-200");
}

#[test]
fn test_schedule_keeps_five_newest() {
    let mut records: Vec<MaintenanceRecord> = (1..=7)
        .map(|d| {
            MaintenanceRecord::new(1, &format!("2026-03-0{d}"), &format!("task {d}"))
                .performed_by("Ivan Petrov")
        })
        .collect();
    records.push(MaintenanceRecord::new(1, "garbage", "undated").performed_by("Ivan Petrov"));

    let snapshot = Snapshot::new(Vec::new(), records)
        .with_users(vec![User::new("Ivan Petrov", "Operator")]);

    let cards = build_work_schedule(&snapshot, &roles());
    let card = &cards[0];

    assert_eq!(card.total_tasks, 8);
    assert_eq!(card.recent.len(), RECENT_TASKS);
    let descriptions: Vec<&str> = card.recent.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["task 7", "task 6", "task 5", "task 4", "task 3"]
    );
}

#[test]
fn test_employee_without_tasks_has_empty_card() {
    let snapshot =
        Snapshot::new(Vec::new(), Vec::new()).with_users(vec![User::new("New Hire", "Operator")]);

    let cards = build_work_schedule(&snapshot, &roles());

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].total_tasks, 0);
    assert!(cards[0].recent.is_empty());
}
