//! Rental store

use std::sync::Arc;

use snowflaked::Generator;

use crate::dates;
use crate::error::AppResult;
use crate::models::enums::RentalStatus;
use crate::models::rental::{CreateRental, Rental, UpdateRental};
use crate::storage::{self, StorageBackend};

const STORE_KEY: &str = "rentals";
const ID_PREFIX: &str = "r";

/// In-memory rental bookings, mirrored to the backend on every mutation.
///
/// Nothing prevents two bookings of the same equipment over overlapping
/// dates; double-booking is representable on purpose.
pub struct RentalStore {
    backend: Arc<dyn StorageBackend>,
    records: Vec<Rental>,
    ids: Generator,
}

impl RentalStore {
    pub(crate) fn open(backend: Arc<dyn StorageBackend>, seed: Vec<Rental>) -> AppResult<Self> {
        let records = storage::load_or_seed(backend.as_ref(), STORE_KEY, seed, true)?;
        Ok(Self {
            backend,
            records,
            ids: Generator::new(0),
        })
    }

    /// All rentals, in insertion order
    pub fn list(&self) -> &[Rental] {
        &self.records
    }

    /// Look up one record by id
    pub fn get_by_id(&self, id: &str) -> Option<&Rental> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Assign a fresh id and append the record
    pub fn add(&mut self, data: CreateRental) -> AppResult<Rental> {
        let id = format!("{ID_PREFIX}{}", self.ids.generate::<u64>());
        let record = data.into_record(id);
        self.records.push(record.clone());
        self.persist()?;
        tracing::debug!(id = %record.id, "rental added");
        Ok(record)
    }

    /// Merge the supplied fields into an existing record. An absent id
    /// is a no-op that leaves the sequence untouched.
    pub fn update(&mut self, id: &str, fields: UpdateRental) -> AppResult<Option<Rental>> {
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
        tracing::debug!(id, "rental deleted");
        Ok(true)
    }

    /// Active rentals whose end date has passed, as of today.
    /// Recomputed on every call, never cached.
    pub fn overdue(&self) -> Vec<&Rental> {
        self.overdue_as_of(&dates::today())
    }

    /// Active rentals with `end_date` strictly before `today`
    /// (lexical comparison on zero-padded ISO dates)
    pub fn overdue_as_of(&self, today: &str) -> Vec<&Rental> {
        self.records
            .iter()
            .filter(|rental| rental.status == RentalStatus::Active && rental.end_date.as_str() < today)
            .collect()
    }

    fn persist(&self) -> AppResult<()> {
        storage::save_documents(self.backend.as_ref(), STORE_KEY, &self.records)
    }
}
