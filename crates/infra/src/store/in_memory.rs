use std::sync::RwLock;

use tracing::debug;

use fulfilment_core::Archivable;
use fulfilment_warehouses::{StoreError, Warehouse, WarehouseStore};

/// In-memory warehouse store for tests/dev.
///
/// Records keep insertion order, which is the iteration order `get_all`
/// reports. `create` enforces one active record per business unit code, so a
/// lost read-then-write race between two use cases ends in a `Conflict` here
/// instead of a silent duplicate.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    records: RwLock<Vec<Warehouse>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records, kept in the given order.
    pub fn with_records(records: Vec<Warehouse>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }

    fn active_code_taken(records: &[Warehouse], candidate: &Warehouse) -> bool {
        records
            .iter()
            .any(|w| w.id != candidate.id && w.is_active() && w.business_unit_code == candidate.business_unit_code)
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn get_all(&self) -> Result<Vec<Warehouse>, StoreError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.clone())
    }

    fn create(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        if warehouse.business_unit_code.is_blank() {
            return Err(StoreError::InvalidRecord("businessUnitCode must not be blank".to_string()));
        }
        if warehouse.is_archived() {
            return Err(StoreError::InvalidRecord(format!(
                "cannot create archived warehouse '{}'",
                warehouse.business_unit_code
            )));
        }

        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        if records.iter().any(|w| w.id == warehouse.id) {
            return Err(StoreError::Conflict(format!("record {} already exists", warehouse.id)));
        }
        if Self::active_code_taken(&records, &warehouse) {
            return Err(StoreError::Conflict(format!(
                "an active warehouse with businessUnitCode '{}' already exists",
                warehouse.business_unit_code
            )));
        }

        debug!(id = %warehouse.id, business_unit_code = %warehouse.business_unit_code, "store create");
        records.push(warehouse);
        Ok(())
    }

    fn update(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        if warehouse.is_active() && Self::active_code_taken(&records, &warehouse) {
            return Err(StoreError::Conflict(format!(
                "an active warehouse with businessUnitCode '{}' already exists",
                warehouse.business_unit_code
            )));
        }

        match records.iter().position(|w| w.id == warehouse.id) {
            Some(idx) => {
                if records[idx].is_archived() && warehouse.is_active() {
                    return Err(StoreError::InvalidRecord(format!(
                        "archived warehouse '{}' cannot be reactivated",
                        warehouse.business_unit_code
                    )));
                }
                if records[idx].is_archived() && warehouse.archived_at != records[idx].archived_at {
                    return Err(StoreError::Conflict(format!(
                        "warehouse '{}' is already archived",
                        warehouse.business_unit_code
                    )));
                }
                debug!(id = %warehouse.id, "store update");
                records[idx] = warehouse;
            }
            None => {
                debug!(id = %warehouse.id, "store upsert (insert)");
                records.push(warehouse);
            }
        }
        Ok(())
    }

    fn remove(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        records.retain(|w| w.id != warehouse.id);
        Ok(())
    }
}
