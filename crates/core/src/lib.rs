//! `fulfilment-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Archivable, Entity};
pub use error::{DomainError, DomainResult, ErrorKind};
pub use id::{BusinessUnitCode, LocationId, WarehouseId, eq_ignore_case, is_blank};
