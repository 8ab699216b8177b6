//! Strongly-typed identifiers used across the domain.
//!
//! Business identifiers (`BusinessUnitCode`, `LocationId`) compare
//! case-insensitively and are never trimmed: `"mwh.001"` equals `"MWH.001"`
//! but `" MWH.001"` does not. The original spelling is preserved for display.

use core::hash::{Hash, Hasher};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Case-insensitive exact string comparison (no whitespace normalisation).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

/// True for empty or whitespace-only strings.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Code identifying a warehouse unit across its replacements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessUnitCode(String);

/// Identifier of a location (site) warehouses are assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

macro_rules! impl_case_insensitive_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                is_blank(&self.0)
            }

            /// Case-insensitive comparison against a raw string.
            pub fn matches(&self, other: &str) -> bool {
                eq_ignore_case(&self.0, other)
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                eq_ignore_case(&self.0, &other.0)
            }
        }

        impl Eq for $t {}

        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for c in self.0.chars().flat_map(char::to_lowercase) {
                    c.hash(state);
                }
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.matches(other)
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.matches(other)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_case_insensitive_newtype!(BusinessUnitCode);
impl_case_insensitive_newtype!(LocationId);

/// Opaque identity of one stored warehouse record.
///
/// A business unit code outlives its records (replacement archives one record
/// and creates another under the same code), so stores key records by this
/// identity instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WarehouseId(Uuid);

impl WarehouseId {
    /// Create a new identifier (UUIDv7, time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for WarehouseId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for WarehouseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_request(format!("WarehouseId: {e}")))?;
        Ok(Self(uuid))
    }
}
