//! Maintenance record model

use serde::{Deserialize, Serialize};

use super::enums::{MaintenanceKind, MaintenanceStatus};

/// Maintenance record
///
/// `equipment_id` is a weak reference, `equipment_name` a form-time
/// display snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub equipment_id: String,
    pub equipment_name: Option<String>,
    /// ISO `YYYY-MM-DD`; ordering on these strings is lexical
    pub date: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub status: MaintenanceStatus,
    pub notes: String,
    pub cost: Option<f64>,
    pub technician: Option<String>,
}

/// Create maintenance request (a record minus its id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    pub equipment_id: String,
    pub equipment_name: Option<String>,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub status: MaintenanceStatus,
    pub notes: String,
    pub cost: Option<f64>,
    pub technician: Option<String>,
}

impl CreateMaintenance {
    /// Materialize a full record under the assigned id
    pub(crate) fn into_record(self, id: String) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            equipment_id: self.equipment_id,
            equipment_name: self.equipment_name,
            date: self.date,
            kind: self.kind,
            status: self.status,
            notes: self.notes,
            cost: self.cost,
            technician: self.technician,
        }
    }
}

/// Update maintenance request; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenance {
    pub equipment_id: Option<String>,
    pub equipment_name: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceKind>,
    pub status: Option<MaintenanceStatus>,
    pub notes: Option<String>,
    pub cost: Option<f64>,
    pub technician: Option<String>,
}

impl MaintenanceRecord {
    /// Merge the supplied fields into this record
    pub(crate) fn apply(&mut self, fields: UpdateMaintenance) {
        if let Some(equipment_id) = fields.equipment_id {
            self.equipment_id = equipment_id;
        }
        if let Some(equipment_name) = fields.equipment_name {
            self.equipment_name = Some(equipment_name);
        }
        if let Some(date) = fields.date {
            self.date = date;
        }
        if let Some(kind) = fields.kind {
            self.kind = kind;
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(notes) = fields.notes {
            self.notes = notes;
        }
        if let Some(cost) = fields.cost {
            self.cost = Some(cost);
        }
        if let Some(technician) = fields.technician {
            self.technician = Some(technician);
        }
    }
}
