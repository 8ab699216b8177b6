use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use fulfilment_core::{Archivable, BusinessUnitCode, DomainError, DomainResult, is_blank};

use crate::placement;
use crate::ports::{LocationResolver, WarehouseStore};
use crate::usecases::{require_fields, resolve_location};
use crate::warehouse::{Warehouse, WarehousePayload};

/// Command: replace the active warehouse for `business_unit_code` with a new
/// unit described by `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceWarehouse {
    pub business_unit_code: String,
    pub payload: Option<WarehousePayload>,
    pub occurred_at: DateTime<Utc>,
}

/// Both halves of a successful replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub archived: Warehouse,
    pub replacement: Warehouse,
}

#[derive(Debug)]
pub struct ReplaceWarehouseUseCase<S, L> {
    store: S,
    locations: L,
}

impl<S, L> ReplaceWarehouseUseCase<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    pub fn new(store: S, locations: L) -> Self {
        Self { store, locations }
    }

    /// Archive the current active record and create its successor under the
    /// same code.
    ///
    /// The two writes are not atomic here. If the create fails after the
    /// archive succeeded, the unit is left archived with no live successor and
    /// the store error is returned.
    pub fn execute(&self, cmd: ReplaceWarehouse) -> DomainResult<Replacement> {
        let result = self.decide(&cmd);
        if let Err(e) = &result {
            debug!(error = %e, business_unit_code = %cmd.business_unit_code, "replace warehouse rejected");
        }
        let Replacement { archived, replacement } = result?;

        self.store.update(archived.clone())?;

        if let Err(e) = self.store.create(replacement.clone()) {
            error!(
                error = %e,
                business_unit_code = %archived.business_unit_code,
                "replacement create failed after archiving current warehouse"
            );
            return Err(e.into());
        }

        info!(
            business_unit_code = %replacement.business_unit_code,
            from_location = %archived.location,
            to_location = %replacement.location,
            capacity = replacement.capacity,
            stock = replacement.stock,
            "warehouse replaced"
        );
        Ok(Replacement { archived, replacement })
    }

    fn decide(&self, cmd: &ReplaceWarehouse) -> DomainResult<Replacement> {
        let target = cmd.business_unit_code.as_str();
        if is_blank(target) {
            return Err(DomainError::invalid_request(
                "businessUnitCode path parameter is required.",
            ));
        }

        let fields = require_fields(cmd.payload.as_ref())?;
        if fields.capacity <= 0 {
            return Err(DomainError::unprocessable("Capacity must be a positive integer."));
        }
        if fields.stock < 0 {
            return Err(DomainError::unprocessable("Stock must be zero or a positive integer."));
        }
        if !fields.business_unit_code.matches(target) {
            return Err(DomainError::invalid_request(
                "businessUnitCode in body must match path parameter.",
            ));
        }

        let snapshot = self.store.get_all()?;
        let target_code = BusinessUnitCode::new(target);
        let current = snapshot
            .iter()
            .find(|w| w.is_active() && w.business_unit_code == target_code)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Active warehouse with businessUnitCode '{target}' not found."
                ))
            })?;

        if fields.stock != current.stock {
            return Err(DomainError::unprocessable(format!(
                "Replacement rejected: new stock ({}) must match current stock ({}).",
                fields.stock, current.stock
            )));
        }
        if fields.capacity < current.stock {
            return Err(DomainError::unprocessable(format!(
                "Replacement rejected: capacity ({}) cannot be lower than current stock ({}).",
                fields.capacity, current.stock
            )));
        }

        let location = resolve_location(&self.locations, &fields.location)?;

        placement::ensure_free_slot(&location, &snapshot, Some(current))?;
        placement::ensure_capacity_envelope(&location, &snapshot, fields.capacity, Some(current))?;

        Ok(Replacement {
            archived: current.archived(cmd.occurred_at),
            replacement: Warehouse::new_active(
                current.business_unit_code.clone(),
                fields.location,
                fields.capacity,
                current.stock,
                cmd.occurred_at,
            ),
        })
    }
}
