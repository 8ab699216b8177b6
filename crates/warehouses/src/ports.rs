//! Collaborator ports consumed by the lifecycle use cases.
//!
//! The engine owns no storage and no location registry; it talks to both
//! through these traits. Implementations decide the backing (in-memory table,
//! database, remote service).

use std::sync::Arc;

use thiserror::Error;

use fulfilment_core::{DomainError, eq_ignore_case};

use crate::warehouse::{Location, Warehouse};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store-level uniqueness rejection (e.g. a second active record per code).
    #[error("store conflict: {0}")]
    Conflict(String),

    /// The record targeted by an update does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The store refused the record as malformed. Surfaces as `Unprocessable`.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("location directory unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for DomainError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Conflict(msg) => DomainError::conflict(msg),
            StoreError::NotFound(msg) => DomainError::not_found(msg),
            StoreError::InvalidRecord(msg) => DomainError::unprocessable(format!("store rejected record: {msg}")),
            StoreError::Unavailable(msg) => DomainError::unavailable(msg),
        }
    }
}

impl From<DirectoryError> for DomainError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::Unavailable(msg) => DomainError::unavailable(msg),
        }
    }
}

/// Durable collection of warehouse records.
///
/// `get_all` returns a snapshot in the store's iteration order; "first match"
/// lookups are defined against that order.
pub trait WarehouseStore: Send + Sync {
    fn get_all(&self) -> Result<Vec<Warehouse>, StoreError>;

    fn create(&self, warehouse: Warehouse) -> Result<(), StoreError>;

    /// Upsert by record identity (`Warehouse::id`).
    fn update(&self, warehouse: Warehouse) -> Result<(), StoreError>;

    fn remove(&self, warehouse: &Warehouse) -> Result<(), StoreError>;

    /// First record (active or archived) whose code matches case-insensitively.
    fn find_by_business_unit_code(&self, code: &str) -> Result<Option<Warehouse>, StoreError> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|w| eq_ignore_case(w.business_unit_code.as_str(), code)))
    }
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn get_all(&self) -> Result<Vec<Warehouse>, StoreError> {
        (**self).get_all()
    }

    fn create(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        (**self).remove(warehouse)
    }

    fn find_by_business_unit_code(&self, code: &str) -> Result<Option<Warehouse>, StoreError> {
        (**self).find_by_business_unit_code(code)
    }
}

impl<S> WarehouseStore for &S
where
    S: WarehouseStore + ?Sized,
{
    fn get_all(&self) -> Result<Vec<Warehouse>, StoreError> {
        (**self).get_all()
    }

    fn create(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        (**self).remove(warehouse)
    }

    fn find_by_business_unit_code(&self, code: &str) -> Result<Option<Warehouse>, StoreError> {
        (**self).find_by_business_unit_code(code)
    }
}

/// Lookup of a location identifier to its limits.
///
/// `Ok(None)` means "no such location". A blank identifier must yield
/// `Ok(None)` without attempting a lookup.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, identifier: &str) -> Result<Option<Location>, DirectoryError>;
}

impl<R> LocationResolver for Arc<R>
where
    R: LocationResolver + ?Sized,
{
    fn resolve(&self, identifier: &str) -> Result<Option<Location>, DirectoryError> {
        (**self).resolve(identifier)
    }
}

impl<R> LocationResolver for &R
where
    R: LocationResolver + ?Sized,
{
    fn resolve(&self, identifier: &str) -> Result<Option<Location>, DirectoryError> {
        (**self).resolve(identifier)
    }
}
