//! Location directory backings.

pub mod static_directory;

pub use static_directory::{LocationTableError, StaticLocationDirectory};
