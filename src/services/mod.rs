//! Business workflows pairing store mutations with their notification
//! side effects

pub mod stats;

use crate::dates;
use crate::error::AppResult;
use crate::models::enums::{MaintenanceStatus, NotificationKind, RentalStatus};
use crate::models::maintenance::{CreateMaintenance, MaintenanceRecord};
use crate::models::rental::{CreateRental, Rental, UpdateRental};
use crate::repository::Repository;

/// Workflow facade over the stores
pub struct Services {
    pub repository: Repository,
}

impl Services {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a rental and announce it
    pub fn create_rental(&mut self, data: CreateRental) -> AppResult<Rental> {
        let rental = self.repository.rentals.add(data)?;
        let equipment = rental
            .equipment_name
            .clone()
            .unwrap_or_else(|| "Equipment".to_string());
        let customer = rental.customer_name.clone().unwrap_or_default();
        self.repository.notifications.add(
            NotificationKind::RentalCreated,
            "New Rental Created".to_string(),
            format!("{equipment} rented to {customer}"),
        )?;
        Ok(rental)
    }

    /// Reassign a rental's status; a transition to Returned is
    /// announced. Any status may follow any other; reassigning the
    /// current status changes nothing.
    pub fn update_rental_status(
        &mut self,
        id: &str,
        status: RentalStatus,
    ) -> AppResult<Option<Rental>> {
        let Some(current) = self.repository.rentals.get_by_id(id) else {
            return Ok(None);
        };
        if current.status == status {
            return Ok(Some(current.clone()));
        }

        let updated = self.repository.rentals.update(
            id,
            UpdateRental {
                status: Some(status),
                ..UpdateRental::default()
            },
        )?;
        if let Some(ref rental) = updated {
            if status == RentalStatus::Returned {
                let equipment = rental
                    .equipment_name
                    .clone()
                    .unwrap_or_else(|| "Equipment".to_string());
                let customer = rental.customer_name.clone().unwrap_or_default();
                self.repository.notifications.add(
                    NotificationKind::RentalReturned,
                    "Rental Returned".to_string(),
                    format!("{equipment} has been returned by {customer}"),
                )?;
            }
        }
        Ok(updated)
    }

    /// Record a maintenance entry; scheduled work is announced
    pub fn schedule_maintenance(&mut self, data: CreateMaintenance) -> AppResult<MaintenanceRecord> {
        let record = self.repository.maintenance.add(data)?;
        if record.status == MaintenanceStatus::Scheduled {
            let equipment = record
                .equipment_name
                .clone()
                .unwrap_or_else(|| "Equipment".to_string());
            self.repository.notifications.add(
                NotificationKind::MaintenanceScheduled,
                "Maintenance Scheduled".to_string(),
                format!("{} scheduled for {equipment} on {}", record.kind, record.date),
            )?;
        }
        Ok(record)
    }

    /// Announce every rental currently overdue and return them.
    /// Rental status is left untouched; flagging a rental as Overdue
    /// stays a user decision.
    pub fn report_overdue(&mut self) -> AppResult<Vec<Rental>> {
        self.report_overdue_as_of(&dates::today())
    }

    /// `report_overdue` against an explicit reference day
    pub fn report_overdue_as_of(&mut self, today: &str) -> AppResult<Vec<Rental>> {
        let overdue: Vec<Rental> = self
            .repository
            .rentals
            .overdue_as_of(today)
            .into_iter()
            .cloned()
            .collect();
        for rental in &overdue {
            let equipment = rental
                .equipment_name
                .clone()
                .unwrap_or_else(|| "Equipment".to_string());
            self.repository.notifications.add(
                NotificationKind::EquipmentOverdue,
                "Equipment Overdue".to_string(),
                format!("{equipment} is overdue (due {})", rental.end_date),
            )?;
        }
        Ok(overdue)
    }
}
