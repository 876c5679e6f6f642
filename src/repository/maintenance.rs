//! Maintenance store

use std::sync::Arc;

use snowflaked::Generator;

use crate::dates;
use crate::error::AppResult;
use crate::models::enums::MaintenanceStatus;
use crate::models::maintenance::{CreateMaintenance, MaintenanceRecord, UpdateMaintenance};
use crate::storage::{self, StorageBackend};

const STORE_KEY: &str = "maintenance";
const ID_PREFIX: &str = "m";

/// In-memory maintenance history, mirrored to the backend on every
/// mutation
pub struct MaintenanceStore {
    backend: Arc<dyn StorageBackend>,
    records: Vec<MaintenanceRecord>,
    ids: Generator,
}

impl MaintenanceStore {
    pub(crate) fn open(
        backend: Arc<dyn StorageBackend>,
        seed: Vec<MaintenanceRecord>,
    ) -> AppResult<Self> {
        let records = storage::load_or_seed(backend.as_ref(), STORE_KEY, seed, true)?;
        Ok(Self {
            backend,
            records,
            ids: Generator::new(0),
        })
    }

    /// All maintenance records, in insertion order
    pub fn list(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    /// Look up one record by id
    pub fn get_by_id(&self, id: &str) -> Option<&MaintenanceRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Assign a fresh id and append the record
    pub fn add(&mut self, data: CreateMaintenance) -> AppResult<MaintenanceRecord> {
        let id = format!("{ID_PREFIX}{}", self.ids.generate::<u64>());
        let record = data.into_record(id);
        self.records.push(record.clone());
        self.persist()?;
        tracing::debug!(id = %record.id, "maintenance record added");
        Ok(record)
    }

    /// Merge the supplied fields into an existing record. An absent id
    /// is a no-op that leaves the sequence untouched.
    pub fn update(
        &mut self,
        id: &str,
        fields: UpdateMaintenance,
    ) -> AppResult<Option<MaintenanceRecord>> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };
        record.apply(fields);
        let updated = record.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Remove one record by id; deleting an absent id is a no-op
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        tracing::debug!(id, "maintenance record deleted");
        Ok(true)
    }

    /// Scheduled work dated today or later, as of today.
    /// Recomputed on every call, never cached.
    pub fn upcoming(&self) -> Vec<&MaintenanceRecord> {
        self.upcoming_as_of(&dates::today())
    }

    /// Scheduled work with `date >= today` (lexical comparison on
    /// zero-padded ISO dates)
    pub fn upcoming_as_of(&self, today: &str) -> Vec<&MaintenanceRecord> {
        self.records
            .iter()
            .filter(|record| {
                record.status == MaintenanceStatus::Scheduled && record.date.as_str() >= today
            })
            .collect()
    }

    fn persist(&self) -> AppResult<()> {
        storage::save_documents(self.backend.as_ref(), STORE_KEY, &self.records)
    }
}
