//! Shared domain enums
//!
//! Serialized representations match the persisted document format, which
//! uses the display labels verbatim (including spaces).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Physical condition of an equipment unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for EquipmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCondition::Excellent => "Excellent",
            EquipmentCondition::Good => "Good",
            EquipmentCondition::Fair => "Fair",
            EquipmentCondition::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Availability status of an equipment unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
    #[serde(rename = "Out of Service")]
    OutOfService,
}

impl EquipmentStatus {
    /// Every status, in dashboard display order
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Available,
        EquipmentStatus::Rented,
        EquipmentStatus::Maintenance,
        EquipmentStatus::OutOfService,
    ];
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Rented => "Rented",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::OutOfService => "Out of Service",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RentalStatus
// ---------------------------------------------------------------------------

/// Rental booking status
///
/// Transitions are unconstrained: any status may be reassigned to any
/// other by direct user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Reserved,
    Active,
    Returned,
    Overdue,
}

impl RentalStatus {
    /// Every status, in dashboard display order
    pub const ALL: [RentalStatus; 4] = [
        RentalStatus::Reserved,
        RentalStatus::Active,
        RentalStatus::Returned,
        RentalStatus::Overdue,
    ];
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RentalStatus::Reserved => "Reserved",
            RentalStatus::Active => "Active",
            RentalStatus::Returned => "Returned",
            RentalStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceKind
// ---------------------------------------------------------------------------

/// Category of maintenance work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceKind {
    #[serde(rename = "Routine Check")]
    RoutineCheck,
    Repair,
    Preventive,
    Emergency,
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceKind::RoutineCheck => "Routine Check",
            MaintenanceKind::Repair => "Repair",
            MaintenanceKind::Preventive => "Preventive",
            MaintenanceKind::Emergency => "Emergency",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Progress status of a maintenance record; transitions are unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Event category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RentalCreated,
    RentalReturned,
    MaintenanceScheduled,
    EquipmentOverdue,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NotificationKind::RentalCreated => "rental_created",
            NotificationKind::RentalReturned => "rental_returned",
            NotificationKind::MaintenanceScheduled => "maintenance_scheduled",
            NotificationKind::EquipmentOverdue => "equipment_overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Access role attached to an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        };
        write!(f, "{}", label)
    }
}
