//! Notification store

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use snowflaked::Generator;

use crate::error::AppResult;
use crate::models::enums::NotificationKind;
use crate::models::notification::Notification;
use crate::storage::{self, StorageBackend};

const STORE_KEY: &str = "notifications";
const ID_PREFIX: &str = "n";

/// In-memory notification feed, newest first, mirrored to the backend
/// on every mutation.
///
/// The feed has no expiry and no size cap; it grows for as long as the
/// persisted state lives.
pub struct NotificationStore {
    backend: Arc<dyn StorageBackend>,
    records: Vec<Notification>,
    ids: Generator,
}

impl NotificationStore {
    pub(crate) fn open(backend: Arc<dyn StorageBackend>) -> AppResult<Self> {
        // No seed: an absent document simply means an empty feed, and
        // nothing is written back until the first notification.
        let records = storage::load_or_seed(backend.as_ref(), STORE_KEY, Vec::new(), false)?;
        Ok(Self {
            backend,
            records,
            ids: Generator::new(0),
        })
    }

    /// All notifications, newest first
    pub fn list(&self) -> &[Notification] {
        &self.records
    }

    /// Synthesize id and creation timestamp and prepend the record
    pub fn add(
        &mut self,
        kind: NotificationKind,
        title: String,
        message: String,
    ) -> AppResult<Notification> {
        let record = Notification {
            id: format!("{ID_PREFIX}{}", self.ids.generate::<u64>()),
            kind,
            title,
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            read: false,
        };
        self.records.insert(0, record.clone());
        self.persist()?;
        tracing::debug!(id = %record.id, kind = %record.kind, "notification added");
        Ok(record)
    }

    /// Flag one notification as read; an absent id is a no-op
    pub fn mark_read(&mut self, id: &str) -> AppResult<bool> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(false);
        };
        record.read = true;
        self.persist()?;
        Ok(true)
    }

    /// Flag every notification as read
    pub fn mark_all_read(&mut self) -> AppResult<()> {
        for record in &mut self.records {
            record.read = true;
        }
        self.persist()
    }

    /// Remove one notification by id; deleting an absent id is a no-op
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Count of notifications still flagged unread
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|record| !record.read).count()
    }

    fn persist(&self) -> AppResult<()> {
        storage::save_documents(self.backend.as_ref(), STORE_KEY, &self.records)
    }
}
