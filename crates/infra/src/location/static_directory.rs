use std::path::Path;

use thiserror::Error;

use fulfilment_core::{eq_ignore_case, is_blank};
use fulfilment_warehouses::{DirectoryError, Location, LocationResolver};

#[derive(Debug, Error)]
pub enum LocationTableError {
    #[error("failed to read locations file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locations: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Location directory over a fixed, ordered table.
///
/// Lookup is case-insensitive and untrimmed; the first matching entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocationDirectory {
    locations: Vec<Location>,
}

impl StaticLocationDirectory {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// The built-in site table.
    pub fn builtin() -> Self {
        Self::new(vec![
            Location::new("ZWOLLE-001", 1, 40),
            Location::new("ZWOLLE-002", 2, 50),
            Location::new("AMSTERDAM-001", 5, 100),
            Location::new("AMSTERDAM-002", 3, 75),
            Location::new("TILBURG-001", 1, 40),
            Location::new("HELMOND-001", 1, 45),
            Location::new("EINDHOVEN-001", 2, 70),
            Location::new("VETSBY-001", 1, 90),
        ])
    }

    /// Parse a JSON array of `{identification, maxNumberOfWarehouses, maxCapacity}`.
    pub fn from_json_str(json: &str) -> Result<Self, LocationTableError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Ok(Self::new(locations))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LocationTableError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LocationTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for StaticLocationDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocationResolver for StaticLocationDirectory {
    fn resolve(&self, identifier: &str) -> Result<Option<Location>, DirectoryError> {
        if is_blank(identifier) {
            return Ok(None);
        }
        Ok(self
            .locations
            .iter()
            .find(|l| eq_ignore_case(l.identification.as_str(), identifier))
            .cloned())
    }
}
