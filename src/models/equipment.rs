//! Equipment model

use serde::{Deserialize, Serialize};

use super::enums::{EquipmentCondition, EquipmentStatus};

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    /// Free-text category, used for dashboard grouping
    pub category: String,
    pub condition: EquipmentCondition,
    pub status: EquipmentStatus,
    pub description: Option<String>,
    /// Price per rental day. Not validated; a bad upstream parse may
    /// store a non-finite value, which serializes as `null`.
    pub daily_rate: Option<f64>,
    pub location: Option<String>,
}

/// Create equipment request (a record minus its id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub name: String,
    pub category: String,
    pub condition: EquipmentCondition,
    pub status: EquipmentStatus,
    pub description: Option<String>,
    pub daily_rate: Option<f64>,
    pub location: Option<String>,
}

impl CreateEquipment {
    /// Materialize a full record under the assigned id
    pub(crate) fn into_record(self, id: String) -> Equipment {
        Equipment {
            id,
            name: self.name,
            category: self.category,
            condition: self.condition,
            status: self.status,
            description: self.description,
            daily_rate: self.daily_rate,
            location: self.location,
        }
    }
}

/// Update equipment request; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub category: Option<String>,
    pub condition: Option<EquipmentCondition>,
    pub status: Option<EquipmentStatus>,
    pub description: Option<String>,
    pub daily_rate: Option<f64>,
    pub location: Option<String>,
}

impl Equipment {
    /// Merge the supplied fields into this record
    pub(crate) fn apply(&mut self, fields: UpdateEquipment) {
        if let Some(name) = fields.name {
            self.name = name;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
        if let Some(condition) = fields.condition {
            self.condition = condition;
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(description) = fields.description {
            self.description = Some(description);
        }
        if let Some(daily_rate) = fields.daily_rate {
            self.daily_rate = Some(daily_rate);
        }
        if let Some(location) = fields.location {
            self.location = Some(location);
        }
    }
}
