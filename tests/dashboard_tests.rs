//! Derived-view and workflow integration tests

use std::sync::Arc;

use rentdesk::models::enums::{
    MaintenanceKind, MaintenanceStatus, NotificationKind, RentalStatus,
};
use rentdesk::models::maintenance::CreateMaintenance;
use rentdesk::models::rental::{CreateRental, Rental};
use rentdesk::repository::Repository;
use rentdesk::seed::{self, SeedData};
use rentdesk::services::{stats, Services};
use rentdesk::storage::MemoryBackend;

fn demo_repository() -> Repository {
    Repository::open(Arc::new(MemoryBackend::new()), SeedData::demo()).expect("open repository")
}

fn empty_services() -> Services {
    let repository =
        Repository::open(Arc::new(MemoryBackend::new()), SeedData::empty()).expect("open repository");
    Services::new(repository)
}

fn rental_for(equipment: &str, start: &str, end: &str, status: RentalStatus) -> CreateRental {
    CreateRental {
        equipment_id: "eq1".to_string(),
        customer_id: "3".to_string(),
        customer_name: Some("Customer User".to_string()),
        equipment_name: Some(equipment.to_string()),
        start_date: start.to_string(),
        end_date: end.to_string(),
        status,
        total_amount: None,
        notes: None,
        security_deposit: None,
    }
}

fn rental_record(id: &str, start: &str, end: &str, status: RentalStatus) -> Rental {
    Rental {
        id: id.to_string(),
        equipment_id: "eq1".to_string(),
        customer_id: "3".to_string(),
        customer_name: Some("Customer User".to_string()),
        equipment_name: Some("Excavator CAT 320".to_string()),
        start_date: start.to_string(),
        end_date: end.to_string(),
        status,
        total_amount: None,
        notes: None,
        security_deposit: None,
    }
}

#[test]
fn category_histogram_counts_in_first_seen_order() {
    let entries = stats::category_histogram(&seed::demo_equipment());
    let pairs: Vec<(&str, i64)> = entries
        .iter()
        .map(|entry| (entry.label.as_str(), entry.value))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Heavy Machinery", 1),
            ("Construction", 1),
            ("Lifting Equipment", 2),
        ]
    );
}

#[test]
fn status_histograms_keep_their_empty_buckets() {
    let equipment = stats::equipment_status_histogram(&seed::demo_equipment());
    let labels: Vec<&str> = equipment.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["Available", "Rented", "Maintenance", "Out of Service"]);
    assert_eq!(
        equipment.iter().map(|entry| entry.value).collect::<Vec<_>>(),
        vec![2, 1, 0, 1]
    );

    let rentals = stats::rental_status_histogram(&seed::demo_rentals());
    let labels: Vec<&str> = rentals.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["Reserved", "Active", "Returned", "Overdue"]);
    assert_eq!(
        rentals.iter().map(|entry| entry.value).collect::<Vec<_>>(),
        vec![1, 1, 0, 0]
    );
}

#[test]
fn calendar_membership_is_inclusive_of_both_bounds() {
    let rentals = vec![rental_record("r10", "2025-06-01", "2025-06-03", RentalStatus::Reserved)];

    for day in ["2025-06-01", "2025-06-02", "2025-06-03"] {
        assert_eq!(stats::rentals_on_day(&rentals, day).len(), 1, "day {day}");
    }
    for day in ["2025-05-31", "2025-06-04"] {
        assert!(stats::rentals_on_day(&rentals, day).is_empty(), "day {day}");
    }
}

#[test]
fn rental_day_set_is_sorted_and_deduplicated() {
    let rentals = seed::demo_rentals();
    let days = stats::rental_day_set(&rentals);

    // r1 covers 05-28..06-05, r2 covers 06-01..06-03 (overlapping)
    assert_eq!(days.first().map(String::as_str), Some("2025-05-28"));
    assert_eq!(days.last().map(String::as_str), Some("2025-06-05"));
    assert_eq!(days.len(), 9);
    let mut sorted = days.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(days, sorted);
}

#[test]
fn equipment_rollup_treats_missing_amounts_as_zero() {
    let mut rentals = seed::demo_rentals();
    rentals.push(rental_record("r10", "2025-06-10", "2025-06-12", RentalStatus::Active));

    let rollup = stats::equipment_rollup(&rentals, "eq1");
    assert_eq!(rollup.total_rentals, 2);
    assert_eq!(rollup.active_rentals, 1);
    // 1350.0 from the seeded reservation, 0.0 for the amount-less rental
    assert_eq!(rollup.total_revenue, 1350.0);

    let none = stats::equipment_rollup(&rentals, "eq-unknown");
    assert_eq!(none.total_rentals, 0);
    assert_eq!(none.total_revenue, 0.0);
}

#[test]
fn kpi_summary_reflects_the_stores_as_of_a_day() {
    let repository = demo_repository();
    let summary = stats::kpi_summary_as_of(&repository, "2025-06-08");

    assert_eq!(summary.total_equipment, 4);
    assert_eq!(summary.available_equipment, 2);
    assert_eq!(summary.rented_equipment, 1);
    // r1 is Active and ended 2025-06-05
    assert_eq!(summary.overdue_rentals, 1);
    // m2 is Scheduled for 2025-06-10
    assert_eq!(summary.upcoming_maintenance, 1);
}

#[test]
fn rental_total_is_the_whole_day_span_times_the_rate() {
    assert_eq!(stats::rental_total(120.0, "2025-05-28", "2025-06-05"), Some(960.0));
    // direction-insensitive, like the form it mirrors
    assert_eq!(stats::rental_total(120.0, "2025-06-05", "2025-05-28"), Some(960.0));
    assert_eq!(stats::rental_total(450.0, "2025-06-01", "2025-06-01"), Some(0.0));
    assert_eq!(stats::rental_total(450.0, "garbage", "2025-06-01"), None);
}

#[test]
fn creating_a_rental_announces_it() {
    let mut services = empty_services();
    services
        .create_rental(rental_for(
            "Concrete Mixer",
            "2025-06-01",
            "2025-06-05",
            RentalStatus::Reserved,
        ))
        .unwrap();

    let feed = services.repository.notifications.list();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::RentalCreated);
    assert_eq!(feed[0].message, "Concrete Mixer rented to Customer User");
    assert!(!feed[0].read);
}

#[test]
fn returning_a_rental_announces_it_once() {
    let mut services = empty_services();
    let rental = services
        .create_rental(rental_for(
            "Concrete Mixer",
            "2025-06-01",
            "2025-06-05",
            RentalStatus::Active,
        ))
        .unwrap();

    let updated = services
        .update_rental_status(&rental.id, RentalStatus::Returned)
        .unwrap()
        .expect("rental exists");
    assert_eq!(updated.status, RentalStatus::Returned);

    let feed = services.repository.notifications.list();
    assert_eq!(feed[0].kind, NotificationKind::RentalReturned);
    assert_eq!(
        feed[0].message,
        "Concrete Mixer has been returned by Customer User"
    );

    // reassigning the same status changes nothing
    let before = services.repository.notifications.list().len();
    services
        .update_rental_status(&rental.id, RentalStatus::Returned)
        .unwrap();
    assert_eq!(services.repository.notifications.list().len(), before);
}

#[test]
fn rental_status_transitions_are_unconstrained() {
    let mut services = empty_services();
    let rental = services
        .create_rental(rental_for(
            "Concrete Mixer",
            "2025-06-01",
            "2025-06-05",
            RentalStatus::Returned,
        ))
        .unwrap();

    // moving backwards out of Returned is allowed
    let updated = services
        .update_rental_status(&rental.id, RentalStatus::Reserved)
        .unwrap()
        .expect("rental exists");
    assert_eq!(updated.status, RentalStatus::Reserved);
}

#[test]
fn scheduling_maintenance_announces_scheduled_work_only() {
    let mut services = empty_services();
    services
        .schedule_maintenance(CreateMaintenance {
            equipment_id: "eq3".to_string(),
            equipment_name: Some("Scissor Lift".to_string()),
            date: "2025-06-10".to_string(),
            kind: MaintenanceKind::Preventive,
            status: MaintenanceStatus::Scheduled,
            notes: "Annual safety inspection".to_string(),
            cost: None,
            technician: None,
        })
        .unwrap();

    let feed = services.repository.notifications.list();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::MaintenanceScheduled);
    assert_eq!(feed[0].message, "Preventive scheduled for Scissor Lift on 2025-06-10");

    // completed work is recorded silently
    services
        .schedule_maintenance(CreateMaintenance {
            equipment_id: "eq1".to_string(),
            equipment_name: Some("Excavator CAT 320".to_string()),
            date: "2025-05-20".to_string(),
            kind: MaintenanceKind::RoutineCheck,
            status: MaintenanceStatus::Completed,
            notes: "No issues found".to_string(),
            cost: Some(150.0),
            technician: Some("John Smith".to_string()),
        })
        .unwrap();
    assert_eq!(services.repository.notifications.list().len(), 1);
}

#[test]
fn reporting_overdue_announces_without_touching_rental_status() {
    let repository =
        Repository::open(Arc::new(MemoryBackend::new()), SeedData::demo()).expect("open repository");
    let mut services = Services::new(repository);

    let overdue = services.report_overdue_as_of("2025-06-08").unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, "r1");

    let feed = services.repository.notifications.list();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::EquipmentOverdue);
    assert_eq!(feed[0].message, "Concrete Mixer is overdue (due 2025-06-05)");

    // the rental itself is untouched
    let rental = services.repository.rentals.get_by_id("r1").unwrap();
    assert_eq!(rental.status, RentalStatus::Active);
}
