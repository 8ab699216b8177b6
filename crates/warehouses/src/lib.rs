//! Warehouse placement and lifecycle engine.
//!
//! This crate contains the business rules for creating, archiving and
//! replacing warehouse units, implemented as deterministic domain logic over
//! two injected collaborators: a [`WarehouseStore`] and a [`LocationResolver`].
//! No HTTP, no concrete storage.

pub mod placement;
pub mod ports;
pub mod response;
pub mod service;
pub mod usecases;
pub mod warehouse;

#[cfg(test)]
pub(crate) mod testing;

pub use placement::{LocationUsage, capacity_covers_stock, capacity_envelope_allows, has_free_slot};
pub use ports::{DirectoryError, LocationResolver, StoreError, WarehouseStore};
pub use response::WarehouseResponse;
pub use service::WarehouseService;
pub use usecases::{
    ArchiveWarehouse, ArchiveWarehouseUseCase, CreateWarehouse, CreateWarehouseUseCase, Replacement,
    ReplaceWarehouse, ReplaceWarehouseUseCase,
};
pub use warehouse::{Location, Warehouse, WarehousePayload};
