//! Dashboard statistics: pure, uncached computations over current store
//! contents. Recomputed on every call; there is nothing to invalidate.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::dates;
use crate::models::enums::{EquipmentStatus, RentalStatus};
use crate::models::equipment::Equipment;
use crate::models::rental::Rental;
use crate::repository::Repository;

/// Labelled count for chart data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// Headline figures for the dashboard cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_equipment: usize,
    pub available_equipment: usize,
    pub rented_equipment: usize,
    pub overdue_rentals: usize,
    pub upcoming_maintenance: usize,
}

/// Per-equipment rental rollup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRollup {
    pub total_rentals: usize,
    pub active_rentals: usize,
    /// Sum of rental amounts, missing amounts counted as zero
    pub total_revenue: f64,
}

/// Equipment counts grouped by free-text category, in first-seen order
pub fn category_histogram(equipment: &[Equipment]) -> Vec<StatEntry> {
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for record in equipment {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, value)| StatEntry {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Equipment counts partitioned into the four status buckets, in
/// display order; empty buckets are kept
pub fn equipment_status_histogram(equipment: &[Equipment]) -> Vec<StatEntry> {
    EquipmentStatus::ALL
        .iter()
        .map(|status| StatEntry {
            label: status.to_string(),
            value: equipment.iter().filter(|record| record.status == *status).count() as i64,
        })
        .collect()
}

/// Rental counts partitioned into the four status buckets, in display
/// order; empty buckets are kept
pub fn rental_status_histogram(rentals: &[Rental]) -> Vec<StatEntry> {
    RentalStatus::ALL
        .iter()
        .map(|status| StatEntry {
            label: status.to_string(),
            value: rentals.iter().filter(|record| record.status == *status).count() as i64,
        })
        .collect()
}

/// Rentals whose inclusive `[start_date, end_date]` interval contains
/// the given calendar day
pub fn rentals_on_day<'a>(rentals: &'a [Rental], day: &str) -> Vec<&'a Rental> {
    rentals
        .iter()
        .filter(|rental| dates::interval_contains(day, &rental.start_date, &rental.end_date))
        .collect()
}

/// Every calendar day covered by at least one rental, sorted and
/// deduplicated; rentals with unparseable dates contribute nothing
pub fn rental_day_set(rentals: &[Rental]) -> Vec<String> {
    let mut days = BTreeSet::new();
    for rental in rentals {
        days.extend(dates::days_in_interval(&rental.start_date, &rental.end_date));
    }
    days.into_iter().collect()
}

/// Rental history rollup for one piece of equipment
pub fn equipment_rollup(rentals: &[Rental], equipment_id: &str) -> EquipmentRollup {
    let history: Vec<&Rental> = rentals
        .iter()
        .filter(|rental| rental.equipment_id == equipment_id)
        .collect();
    EquipmentRollup {
        total_rentals: history.len(),
        active_rentals: history
            .iter()
            .filter(|rental| rental.status == RentalStatus::Active)
            .count(),
        total_revenue: history
            .iter()
            .map(|rental| rental.total_amount.unwrap_or(0.0))
            .sum(),
    }
}

/// Headline dashboard figures as of today
pub fn kpi_summary(repository: &Repository) -> KpiSummary {
    kpi_summary_as_of(repository, &dates::today())
}

/// Headline dashboard figures as of the given day
pub fn kpi_summary_as_of(repository: &Repository, today: &str) -> KpiSummary {
    let equipment = repository.equipment.list();
    KpiSummary {
        total_equipment: equipment.len(),
        available_equipment: equipment
            .iter()
            .filter(|record| record.status == EquipmentStatus::Available)
            .count(),
        rented_equipment: equipment
            .iter()
            .filter(|record| record.status == EquipmentStatus::Rented)
            .count(),
        overdue_rentals: repository.rentals.overdue_as_of(today).len(),
        upcoming_maintenance: repository.maintenance.upcoming_as_of(today).len(),
    }
}

/// Form-time rental pricing: whole-day span times daily rate, rounded
/// to cents. `None` when either date fails to parse. The result is
/// stored on the rental and never recomputed afterwards.
pub fn rental_total(daily_rate: f64, start_date: &str, end_date: &str) -> Option<f64> {
    let days = dates::day_span(start_date, end_date)?;
    Some((days as f64 * daily_rate * 100.0).round() / 100.0)
}
