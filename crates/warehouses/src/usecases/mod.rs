//! Lifecycle use cases: create, archive, replace.
//!
//! Each use case reads one snapshot from the store, runs every check against
//! it (first failure wins), and writes only when all checks pass. There is no
//! locking here; the store is the serialization boundary.

pub mod archive;
pub mod create;
pub mod replace;

pub use archive::{ArchiveWarehouse, ArchiveWarehouseUseCase};
pub use create::{CreateWarehouse, CreateWarehouseUseCase};
pub use replace::{Replacement, ReplaceWarehouse, ReplaceWarehouseUseCase};

use fulfilment_core::{BusinessUnitCode, DomainError, DomainResult, LocationId, is_blank};

use crate::ports::LocationResolver;
use crate::warehouse::{Location, WarehousePayload};

/// A payload with all four required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequiredFields {
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationId,
    pub capacity: i64,
    pub stock: i64,
}

/// Missing body is a malformed request; a missing or blank field is a rule
/// violation.
pub(crate) fn require_fields(payload: Option<&WarehousePayload>) -> DomainResult<RequiredFields> {
    let Some(data) = payload else {
        return Err(DomainError::invalid_request("Request body is required."));
    };

    let business_unit_code = match data.business_unit_code.as_deref() {
        Some(code) if !is_blank(code) => BusinessUnitCode::new(code),
        _ => return Err(DomainError::unprocessable("businessUnitCode is required.")),
    };
    let location = match data.location.as_deref() {
        Some(loc) if !is_blank(loc) => LocationId::new(loc),
        _ => return Err(DomainError::unprocessable("location is required.")),
    };
    let Some(capacity) = data.capacity else {
        return Err(DomainError::unprocessable("capacity is required."));
    };
    let Some(stock) = data.stock else {
        return Err(DomainError::unprocessable("stock is required."));
    };

    Ok(RequiredFields {
        business_unit_code,
        location,
        capacity,
        stock,
    })
}

pub(crate) fn resolve_location<L>(locations: &L, identifier: &LocationId) -> DomainResult<Location>
where
    L: LocationResolver + ?Sized,
{
    locations
        .resolve(identifier.as_str())?
        .ok_or_else(|| DomainError::unprocessable(format!("Invalid location '{identifier}'.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TableDirectory;
    use fulfilment_core::ErrorKind;

    #[test]
    fn missing_body_is_invalid_request() {
        assert_eq!(require_fields(None).unwrap_err().kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn each_missing_field_is_unprocessable_in_order() {
        let full = WarehousePayload::new("MWH.001", "ZWOLLE-001", 10, 5);

        let cases = [
            (WarehousePayload { business_unit_code: None, ..full.clone() }, "businessUnitCode is required."),
            (WarehousePayload { business_unit_code: Some("  ".into()), ..full.clone() }, "businessUnitCode is required."),
            (WarehousePayload { location: None, ..full.clone() }, "location is required."),
            (WarehousePayload { location: Some("".into()), ..full.clone() }, "location is required."),
            (WarehousePayload { capacity: None, ..full.clone() }, "capacity is required."),
            (WarehousePayload { stock: None, ..full.clone() }, "stock is required."),
            (WarehousePayload::default(), "businessUnitCode is required."),
        ];

        for (payload, expected) in cases {
            let err = require_fields(Some(&payload)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unprocessable);
            assert_eq!(err.message(), expected);
        }
    }

    #[test]
    fn complete_payload_passes_through_untouched() {
        let fields = require_fields(Some(&WarehousePayload::new(" MWH.001", "zwolle-001", 0, -1))).unwrap();
        assert_eq!(fields.business_unit_code.as_str(), " MWH.001");
        assert_eq!(fields.location.as_str(), "zwolle-001");
        assert_eq!(fields.capacity, 0);
        assert_eq!(fields.stock, -1);
    }

    #[test]
    fn unknown_location_is_unprocessable() {
        let dir = TableDirectory::new(vec![Location::new("ZWOLLE-001", 1, 40)]);
        assert!(resolve_location(&dir, &LocationId::new("zwolle-001")).is_ok());
        let err = resolve_location(&dir, &LocationId::new("NOWHERE")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
        assert_eq!(err.message(), "Invalid location 'NOWHERE'.");
    }
}
