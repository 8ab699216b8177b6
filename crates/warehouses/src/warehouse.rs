use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fulfilment_core::{Archivable, BusinessUnitCode, Entity, LocationId, WarehouseId};

/// One physical unit of storage capacity assigned to a location.
///
/// Records are created active (`archived_at == None`) and may be archived
/// exactly once. Replacement never edits a record in place beyond archival; it
/// archives the current record and creates a new one under the same code.
///
/// Not serializable: callers only ever see a `WarehouseResponse`, which leaves
/// out the internal `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationId,
    pub capacity: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    /// Build a fresh, active record with a new identity.
    pub fn new_active(
        business_unit_code: BusinessUnitCode,
        location: LocationId,
        capacity: i64,
        stock: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: WarehouseId::new(),
            business_unit_code,
            location,
            capacity,
            stock,
            created_at,
            archived_at: None,
        }
    }

    /// Copy of this record with `archived_at` set.
    pub fn archived(&self, at: DateTime<Utc>) -> Self {
        Self {
            archived_at: Some(at),
            ..self.clone()
        }
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Archivable for Warehouse {
    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}

/// Candidate warehouse as supplied by a caller.
///
/// Every field is optional so that "missing" can be told apart from "invalid";
/// timestamps are never taken from callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePayload {
    #[serde(default)]
    pub business_unit_code: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl WarehousePayload {
    pub fn new(
        business_unit_code: impl Into<String>,
        location: impl Into<String>,
        capacity: i64,
        stock: i64,
    ) -> Self {
        Self {
            business_unit_code: Some(business_unit_code.into()),
            location: Some(location.into()),
            capacity: Some(capacity),
            stock: Some(stock),
        }
    }
}

/// A site with two independent ceilings over its *active* warehouses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub identification: LocationId,
    /// Maximum number of simultaneously active warehouses.
    pub max_number_of_warehouses: u32,
    /// Maximum sum of `capacity` across active warehouses.
    pub max_capacity: i64,
}

impl Location {
    pub fn new(identification: impl Into<String>, max_number_of_warehouses: u32, max_capacity: i64) -> Self {
        Self {
            identification: LocationId::new(identification),
            max_number_of_warehouses,
            max_capacity,
        }
    }
}
