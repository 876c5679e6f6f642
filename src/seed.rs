//! Seed data: the record set materialized when no persisted state
//! exists, plus the demo credential table.
//!
//! Seeds are injected into `Repository::open` rather than read as
//! ambient globals, so tests can construct stores over an empty seed.

use crate::models::enums::{
    EquipmentCondition, EquipmentStatus, MaintenanceKind, MaintenanceStatus, RentalStatus, Role,
};
use crate::models::equipment::Equipment;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::rental::Rental;
use crate::models::user::Credential;

/// Everything `Repository::open` needs to materialize first-run state
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub equipment: Vec<Equipment>,
    pub rentals: Vec<Rental>,
    pub maintenance: Vec<MaintenanceRecord>,
    pub credentials: Vec<Credential>,
}

impl SeedData {
    /// The demo inventory the dashboard ships with
    pub fn demo() -> Self {
        Self {
            equipment: demo_equipment(),
            rentals: demo_rentals(),
            maintenance: demo_maintenance(),
            credentials: demo_credentials(),
        }
    }

    /// No records and no credentials; logins always fail
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Demo equipment inventory
pub fn demo_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "eq1".to_string(),
            name: "Excavator CAT 320".to_string(),
            category: "Heavy Machinery".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: Some("Medium-sized excavator suitable for construction projects".to_string()),
            daily_rate: Some(450.0),
            location: Some("Warehouse A".to_string()),
        },
        Equipment {
            id: "eq2".to_string(),
            name: "Concrete Mixer".to_string(),
            category: "Construction".to_string(),
            condition: EquipmentCondition::Excellent,
            status: EquipmentStatus::Rented,
            description: Some("Portable concrete mixer for small to medium projects".to_string()),
            daily_rate: Some(120.0),
            location: Some("Warehouse B".to_string()),
        },
        Equipment {
            id: "eq3".to_string(),
            name: "Scissor Lift".to_string(),
            category: "Lifting Equipment".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: Some("Electric scissor lift with 26ft reach".to_string()),
            daily_rate: Some(280.0),
            location: Some("Warehouse A".to_string()),
        },
        Equipment {
            id: "eq4".to_string(),
            name: "Scissor Lift".to_string(),
            category: "Lifting Equipment".to_string(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::OutOfService,
            description: Some("Electric scissor lift with 26ft reach".to_string()),
            daily_rate: Some(280.0),
            location: Some("Warehouse A".to_string()),
        },
    ]
}

/// Demo rental bookings
pub fn demo_rentals() -> Vec<Rental> {
    vec![
        Rental {
            id: "r1".to_string(),
            equipment_id: "eq2".to_string(),
            customer_id: "3".to_string(),
            customer_name: Some("Customer User".to_string()),
            equipment_name: Some("Concrete Mixer".to_string()),
            start_date: "2025-05-28".to_string(),
            end_date: "2025-06-05".to_string(),
            status: RentalStatus::Active,
            total_amount: Some(960.0),
            notes: Some("Regular rental for construction project".to_string()),
            security_deposit: None,
        },
        Rental {
            id: "r2".to_string(),
            equipment_id: "eq1".to_string(),
            customer_id: "3".to_string(),
            customer_name: Some("Customer User".to_string()),
            equipment_name: Some("Excavator CAT 320".to_string()),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-03".to_string(),
            status: RentalStatus::Reserved,
            total_amount: Some(1350.0),
            notes: Some("Foundation work project".to_string()),
            security_deposit: None,
        },
    ]
}

/// Demo maintenance history
pub fn demo_maintenance() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: "m1".to_string(),
            equipment_id: "eq1".to_string(),
            equipment_name: Some("Excavator CAT 320".to_string()),
            date: "2025-05-20".to_string(),
            kind: MaintenanceKind::RoutineCheck,
            status: MaintenanceStatus::Completed,
            notes: "No issues found. All systems operational.".to_string(),
            cost: Some(150.0),
            technician: Some("John Smith".to_string()),
        },
        MaintenanceRecord {
            id: "m2".to_string(),
            equipment_id: "eq3".to_string(),
            equipment_name: Some("Scissor Lift".to_string()),
            date: "2025-06-10".to_string(),
            kind: MaintenanceKind::Preventive,
            status: MaintenanceStatus::Scheduled,
            notes: "Annual safety inspection and hydraulic system check".to_string(),
            cost: None,
            technician: Some("Mike Johnson".to_string()),
        },
    ]
}

/// Demo credential table; plaintext passwords, demo accounts only
pub fn demo_credentials() -> Vec<Credential> {
    vec![
        Credential {
            id: "1".to_string(),
            email: "admin@entnt.in".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            name: "Admin User".to_string(),
        },
        Credential {
            id: "2".to_string(),
            email: "staff@entnt.in".to_string(),
            password: "staff123".to_string(),
            role: Role::Staff,
            name: "Staff Member".to_string(),
        },
        Credential {
            id: "3".to_string(),
            email: "customer@entnt.in".to_string(),
            password: "cust123".to_string(),
            role: Role::Customer,
            name: "Customer User".to_string(),
        },
    ]
}
