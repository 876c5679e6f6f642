//! Store layer: in-memory, id-keyed, insertion-ordered record sequences
//! mirrored synchronously to the persistence backend.
//!
//! Each store is the sole owner and mutator of its sequence. There is no
//! cross-store coupling: a rental mutation and an equipment mutation are
//! independent writes, each persisted on its own.

pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod rentals;
pub mod session;

use std::sync::Arc;

use crate::error::AppResult;
use crate::seed::SeedData;
use crate::storage::StorageBackend;

/// Container for all domain stores sharing one persistence backend
pub struct Repository {
    pub equipment: equipment::EquipmentStore,
    pub rentals: rentals::RentalStore,
    pub maintenance: maintenance::MaintenanceStore,
    pub notifications: notifications::NotificationStore,
    pub session: session::SessionStore,
}

impl Repository {
    /// Open every store against the given backend. Stores with no
    /// persisted document materialize their seed; a persisted session
    /// identity is restored as-is.
    pub fn open(backend: Arc<dyn StorageBackend>, seed: SeedData) -> AppResult<Self> {
        Ok(Self {
            equipment: equipment::EquipmentStore::open(backend.clone(), seed.equipment)?,
            rentals: rentals::RentalStore::open(backend.clone(), seed.rentals)?,
            maintenance: maintenance::MaintenanceStore::open(backend.clone(), seed.maintenance)?,
            notifications: notifications::NotificationStore::open(backend.clone())?,
            session: session::SessionStore::open(backend, seed.credentials)?,
        })
    }
}
