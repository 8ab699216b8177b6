use chrono::{DateTime, Utc};
use tracing::{debug, info};

use fulfilment_core::{Archivable, DomainError, DomainResult, is_blank};

use crate::ports::WarehouseStore;
use crate::warehouse::Warehouse;

/// Command: archive the warehouse identified by a business unit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveWarehouse {
    pub business_unit_code: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ArchiveWarehouseUseCase<S> {
    store: S,
}

impl<S> ArchiveWarehouseUseCase<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Archive the first record (active or archived, in store iteration order)
    /// carrying the code. Returns the archived record.
    pub fn execute(&self, cmd: ArchiveWarehouse) -> DomainResult<Warehouse> {
        let result = self.decide(&cmd);
        if let Err(e) = &result {
            debug!(error = %e, business_unit_code = %cmd.business_unit_code, "archive warehouse rejected");
        }
        let archived = result?;

        self.store.update(archived.clone())?;

        info!(
            business_unit_code = %archived.business_unit_code,
            location = %archived.location,
            "warehouse archived"
        );
        Ok(archived)
    }

    fn decide(&self, cmd: &ArchiveWarehouse) -> DomainResult<Warehouse> {
        let code = cmd.business_unit_code.as_str();
        if is_blank(code) {
            return Err(DomainError::invalid_request("businessUnitCode is required to archive."));
        }

        let existing = self
            .store
            .find_by_business_unit_code(code)?
            .ok_or_else(|| DomainError::not_found(format!("Warehouse '{code}' not found.")))?;

        if existing.is_archived() {
            return Err(DomainError::conflict(format!("Warehouse '{code}' is already archived.")));
        }

        Ok(existing.archived(cmd.occurred_at))
    }
}
