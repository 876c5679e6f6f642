//! Equipment store

use std::sync::Arc;

use snowflaked::Generator;

use crate::error::AppResult;
use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use crate::storage::{self, StorageBackend};

const STORE_KEY: &str = "equipment";
const ID_PREFIX: &str = "eq";

/// In-memory equipment inventory, mirrored to the backend on every
/// mutation
pub struct EquipmentStore {
    backend: Arc<dyn StorageBackend>,
    records: Vec<Equipment>,
    ids: Generator,
}

impl EquipmentStore {
    pub(crate) fn open(backend: Arc<dyn StorageBackend>, seed: Vec<Equipment>) -> AppResult<Self> {
        let records = storage::load_or_seed(backend.as_ref(), STORE_KEY, seed, true)?;
        Ok(Self {
            backend,
            records,
            ids: Generator::new(0),
        })
    }

    /// All equipment, in insertion order
    pub fn list(&self) -> &[Equipment] {
        &self.records
    }

    /// Look up one record by id
    pub fn get_by_id(&self, id: &str) -> Option<&Equipment> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Assign a fresh id and append the record
    pub fn add(&mut self, data: CreateEquipment) -> AppResult<Equipment> {
        let id = format!("{ID_PREFIX}{}", self.ids.generate::<u64>());
        let record = data.into_record(id);
        self.records.push(record.clone());
        self.persist()?;
        tracing::debug!(id = %record.id, "equipment added");
        Ok(record)
    }

    /// Merge the supplied fields into an existing record. An absent id
    /// is a no-op that leaves the sequence untouched.
    pub fn update(&mut self, id: &str, fields: UpdateEquipment) -> AppResult<Option<Equipment>> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };
        record.apply(fields);
        let updated = record.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Remove one record by id; deleting an absent id is a no-op.
    /// Referencing rentals and maintenance records are left dangling.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        tracing::debug!(id, "equipment deleted");
        Ok(true)
    }

    fn persist(&self) -> AppResult<()> {
        storage::save_documents(self.backend.as_ref(), STORE_KEY, &self.records)
    }
}
