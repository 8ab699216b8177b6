//! Response shaping.
//!
//! Callers only ever receive [`WarehouseResponse`] values built field by field
//! from a record, never the record the store or rule engine works on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::warehouse::Warehouse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseResponse {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<&Warehouse> for WarehouseResponse {
    fn from(w: &Warehouse) -> Self {
        Self {
            business_unit_code: w.business_unit_code.as_str().to_string(),
            location: w.location.as_str().to_string(),
            capacity: w.capacity,
            stock: w.stock,
            created_at: w.created_at,
            archived_at: w.archived_at,
        }
    }
}

impl From<Warehouse> for WarehouseResponse {
    fn from(w: Warehouse) -> Self {
        Self::from(&w)
    }
}

pub fn shape_all<'a>(records: impl IntoIterator<Item = &'a Warehouse>) -> Vec<WarehouseResponse> {
    records.into_iter().map(WarehouseResponse::from).collect()
}
