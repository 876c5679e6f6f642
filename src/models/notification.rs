//! Notification model

use serde::{Deserialize, Serialize};

use super::enums::NotificationKind;

/// Notification record
///
/// Append-only: after creation only the `read` flag may change, until
/// the record is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// RFC 3339 creation instant, immutable
    pub timestamp: String,
    pub read: bool,
}
