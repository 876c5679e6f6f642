//! User identity model and credential table entries

use serde::{Deserialize, Serialize};

use super::enums::Role;

/// Authenticated identity. Never carries a password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Credential table entry: an identity plus its plaintext demo password.
/// The table is a stand-in login directory, not a security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl Credential {
    /// The identity this credential grants, with the password stripped
    pub fn user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
            name: self.name.clone(),
        }
    }
}
