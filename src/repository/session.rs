//! Session/identity store

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::user::{Credential, User};
use crate::storage::{self, StorageBackend};

const STORE_KEY: &str = "currentUser";

/// At most one authenticated identity, validated against an injected
/// credential table and mirrored to the backend.
///
/// The persisted identity is itself the whole session: on open it is
/// restored and trusted without re-validation, and there is no expiry.
/// This is a single-user convenience, not a security boundary.
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
    credentials: Vec<Credential>,
    current: Option<User>,
}

impl SessionStore {
    pub(crate) fn open(
        backend: Arc<dyn StorageBackend>,
        credentials: Vec<Credential>,
    ) -> AppResult<Self> {
        let current = storage::load_record(backend.as_ref(), STORE_KEY)?;
        Ok(Self {
            backend,
            credentials,
            current,
        })
    }

    /// Linear scan of the credential table. On a match the identity is
    /// stored with the password stripped, both in memory and in the
    /// backend; on a mismatch nothing changes and `false` is returned.
    pub fn login(&mut self, email: &str, password: &str) -> AppResult<bool> {
        let Some(found) = self
            .credentials
            .iter()
            .find(|credential| credential.email == email && credential.password == password)
        else {
            tracing::debug!(email, "login rejected");
            return Ok(false);
        };
        let user = found.user();
        self.backend.save(STORE_KEY, &serde_json::to_value(&user)?)?;
        tracing::debug!(user = %user.email, role = %user.role, "login accepted");
        self.current = Some(user);
        Ok(true)
    }

    /// Clear the identity from memory and from the backend
    pub fn logout(&mut self) -> AppResult<()> {
        self.current = None;
        self.backend.remove(STORE_KEY)
    }

    /// The authenticated identity, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
