use chrono::{DateTime, Utc};
use tracing::{debug, info};

use fulfilment_core::{Archivable, DomainError, DomainResult};

use crate::placement;
use crate::ports::{LocationResolver, WarehouseStore};
use crate::usecases::{require_fields, resolve_location};
use crate::warehouse::{Warehouse, WarehousePayload};

/// Command: create a new active warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWarehouse {
    pub payload: Option<WarehousePayload>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateWarehouseUseCase<S, L> {
    store: S,
    locations: L,
}

impl<S, L> CreateWarehouseUseCase<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    pub fn new(store: S, locations: L) -> Self {
        Self { store, locations }
    }

    /// Validate, check feasibility at the target location, then persist.
    ///
    /// Returns a copy of the persisted record.
    pub fn execute(&self, cmd: CreateWarehouse) -> DomainResult<Warehouse> {
        let result = self.decide(&cmd);
        if let Err(e) = &result {
            debug!(error = %e, "create warehouse rejected");
        }
        let warehouse = result?;

        self.store.create(warehouse.clone())?;

        info!(
            business_unit_code = %warehouse.business_unit_code,
            location = %warehouse.location,
            capacity = warehouse.capacity,
            stock = warehouse.stock,
            "warehouse created"
        );
        Ok(warehouse)
    }

    fn decide(&self, cmd: &CreateWarehouse) -> DomainResult<Warehouse> {
        let fields = require_fields(cmd.payload.as_ref())?;
        let snapshot = self.store.get_all()?;

        let exists_active = snapshot
            .iter()
            .any(|w| w.is_active() && w.business_unit_code == fields.business_unit_code);
        if exists_active {
            return Err(DomainError::conflict(format!(
                "Warehouse with businessUnitCode '{}' already exists.",
                fields.business_unit_code
            )));
        }

        let location = resolve_location(&self.locations, &fields.location)?;

        placement::ensure_free_slot(&location, &snapshot, None)?;
        placement::ensure_capacity_envelope(&location, &snapshot, fields.capacity, None)?;
        placement::ensure_capacity_covers_stock(fields.capacity, fields.stock)?;

        Ok(Warehouse::new_active(
            fields.business_unit_code,
            fields.location,
            fields.capacity,
            fields.stock,
            cmd.occurred_at,
        ))
    }
}
