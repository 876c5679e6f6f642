//! RentDesk - Equipment Rental Management Core
//!
//! Opens the persisted stores (materializing demo seed data on first
//! run) and prints a dashboard summary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentdesk::config::AppConfig;
use rentdesk::repository::Repository;
use rentdesk::seed::SeedData;
use rentdesk::services::stats;
use rentdesk::storage::JsonFileBackend;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rentdesk={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RentDesk v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(JsonFileBackend::open(&config.storage.path)?);
    let repository = Repository::open(backend, SeedData::demo())?;
    tracing::info!(path = %config.storage.path.display(), "Stores opened");

    print_dashboard(&repository);

    Ok(())
}

/// Render the derived dashboard views to stdout
fn print_dashboard(repository: &Repository) {
    let summary = stats::kpi_summary(repository);
    println!("RentDesk dashboard");
    println!("==================");
    println!(
        "Equipment: {} total, {} available, {} rented",
        summary.total_equipment, summary.available_equipment, summary.rented_equipment
    );
    println!(
        "Attention: {} overdue rentals, {} upcoming maintenance jobs",
        summary.overdue_rentals, summary.upcoming_maintenance
    );

    println!("\nEquipment by category:");
    for entry in stats::category_histogram(repository.equipment.list()) {
        println!("  {:<20} {}", entry.label, entry.value);
    }

    println!("\nEquipment by status:");
    for entry in stats::equipment_status_histogram(repository.equipment.list()) {
        println!("  {:<20} {}", entry.label, entry.value);
    }

    println!("\nRentals by status:");
    for entry in stats::rental_status_histogram(repository.rentals.list()) {
        println!("  {:<20} {}", entry.label, entry.value);
    }

    let overdue = repository.rentals.overdue();
    if !overdue.is_empty() {
        println!("\nOverdue rentals:");
        for rental in overdue {
            println!(
                "  {} (due {}) - {}",
                rental.equipment_name.as_deref().unwrap_or(rental.equipment_id.as_str()),
                rental.end_date,
                rental.customer_name.as_deref().unwrap_or("unknown customer"),
            );
        }
    }

    let upcoming = repository.maintenance.upcoming();
    if !upcoming.is_empty() {
        println!("\nUpcoming maintenance:");
        for record in upcoming {
            println!(
                "  {} on {} - {}",
                record.equipment_name.as_deref().unwrap_or(record.equipment_id.as_str()),
                record.date,
                record.kind,
            );
        }
    }

    let unread = repository.notifications.unread_count();
    if unread > 0 {
        println!("\n{unread} unread notifications");
    }
}
