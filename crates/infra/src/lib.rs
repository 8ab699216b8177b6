//! Infrastructure layer: storage and location adapters, config.

pub mod config;
pub mod location;
pub mod store;


pub use config::{AppConfig, ConfigError};
pub use location::{LocationTableError, StaticLocationDirectory};
pub use store::InMemoryWarehouseStore;
