//! Rental booking model

use serde::{Deserialize, Serialize};

use super::enums::RentalStatus;

/// Rental record
///
/// `equipment_id` is a weak reference: it is never checked against the
/// equipment store and deleting the equipment leaves it dangling.
/// `customer_name` and `equipment_name` are display snapshots taken at
/// form time, not kept in sync with their source records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub equipment_id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub equipment_name: Option<String>,
    /// ISO `YYYY-MM-DD`; ordering on these strings is lexical
    pub start_date: String,
    /// ISO `YYYY-MM-DD`; end >= start is expected but not enforced
    pub end_date: String,
    pub status: RentalStatus,
    /// Derived at form time as daily rate x whole-day span; the store
    /// never recomputes it
    pub total_amount: Option<f64>,
    pub notes: Option<String>,
    pub security_deposit: Option<f64>,
}

/// Create rental request (a record minus its id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRental {
    pub equipment_id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub equipment_name: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: RentalStatus,
    pub total_amount: Option<f64>,
    pub notes: Option<String>,
    pub security_deposit: Option<f64>,
}

impl CreateRental {
    /// Materialize a full record under the assigned id
    pub(crate) fn into_record(self, id: String) -> Rental {
        Rental {
            id,
            equipment_id: self.equipment_id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            equipment_name: self.equipment_name,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            total_amount: self.total_amount,
            notes: self.notes,
            security_deposit: self.security_deposit,
        }
    }
}

/// Update rental request; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRental {
    pub equipment_id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub equipment_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<RentalStatus>,
    pub total_amount: Option<f64>,
    pub notes: Option<String>,
    pub security_deposit: Option<f64>,
}

impl Rental {
    /// Merge the supplied fields into this record
    pub(crate) fn apply(&mut self, fields: UpdateRental) {
        if let Some(equipment_id) = fields.equipment_id {
            self.equipment_id = equipment_id;
        }
        if let Some(customer_id) = fields.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(customer_name) = fields.customer_name {
            self.customer_name = Some(customer_name);
        }
        if let Some(equipment_name) = fields.equipment_name {
            self.equipment_name = Some(equipment_name);
        }
        if let Some(start_date) = fields.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = fields.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(total_amount) = fields.total_amount {
            self.total_amount = Some(total_amount);
        }
        if let Some(notes) = fields.notes {
            self.notes = Some(notes);
        }
        if let Some(security_deposit) = fields.security_deposit {
            self.security_deposit = Some(security_deposit);
        }
    }
}
