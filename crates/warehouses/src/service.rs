//! Warehouse service facade.
//!
//! Binds one store and one location directory and exposes the operations the
//! transport layer calls. Mutations delegate to the use cases; every return
//! value is shaped into a [`WarehouseResponse`].

use chrono::{DateTime, Utc};

use fulfilment_core::{Archivable, DomainError, DomainResult, eq_ignore_case, is_blank};

use crate::ports::{LocationResolver, WarehouseStore};
use crate::response::{WarehouseResponse, shape_all};
use crate::usecases::{
    ArchiveWarehouse, ArchiveWarehouseUseCase, CreateWarehouse, CreateWarehouseUseCase, ReplaceWarehouse,
    ReplaceWarehouseUseCase,
};
use crate::warehouse::WarehousePayload;

#[derive(Debug, Clone)]
pub struct WarehouseService<S, L> {
    store: S,
    locations: L,
}

impl<S, L> WarehouseService<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    pub fn new(store: S, locations: L) -> Self {
        Self { store, locations }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every record, active and archived, in store iteration order.
    pub fn list(&self) -> DomainResult<Vec<WarehouseResponse>> {
        let snapshot = self.store.get_all()?;
        Ok(shape_all(&snapshot))
    }

    /// The active record for `code`, else the first archived one.
    ///
    /// Unlike `archive`, which acts on the first match in store order, this
    /// deliberately skips earlier archived history when a live record exists.
    pub fn get(&self, code: &str) -> DomainResult<WarehouseResponse> {
        if is_blank(code) {
            return Err(DomainError::invalid_request("Invalid id."));
        }

        let snapshot = self.store.get_all()?;
        let matching: Vec<_> = snapshot
            .iter()
            .filter(|w| eq_ignore_case(w.business_unit_code.as_str(), code))
            .collect();

        matching
            .iter()
            .find(|w| w.is_active())
            .or(matching.first())
            .map(|w| WarehouseResponse::from(*w))
            .ok_or_else(|| DomainError::not_found(format!("Warehouse with id '{code}' not found.")))
    }

    pub fn create(&self, payload: Option<WarehousePayload>, now: DateTime<Utc>) -> DomainResult<WarehouseResponse> {
        let created = CreateWarehouseUseCase::new(&self.store, &self.locations).execute(CreateWarehouse {
            payload,
            occurred_at: now,
        })?;
        Ok(WarehouseResponse::from(&created))
    }

    pub fn archive(&self, code: &str, now: DateTime<Utc>) -> DomainResult<()> {
        ArchiveWarehouseUseCase::new(&self.store).execute(ArchiveWarehouse {
            business_unit_code: code.to_string(),
            occurred_at: now,
        })?;
        Ok(())
    }

    pub fn replace(
        &self,
        code: &str,
        payload: Option<WarehousePayload>,
        now: DateTime<Utc>,
    ) -> DomainResult<WarehouseResponse> {
        let outcome = ReplaceWarehouseUseCase::new(&self.store, &self.locations).execute(ReplaceWarehouse {
            business_unit_code: code.to_string(),
            payload,
            occurred_at: now,
        })?;
        Ok(WarehouseResponse::from(&outcome.replacement))
    }
}
