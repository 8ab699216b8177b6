//! Placement rule engine.
//!
//! Pure decision logic over a snapshot of warehouse records and a resolved
//! [`Location`]. Nothing here performs IO or mutates a record; the use cases
//! fetch the snapshot, ask these rules, and only then write.
//!
//! "Matching" a location means a case-insensitive, untrimmed comparison of the
//! record's `location` against `Location::identification`. Only active records
//! count. An optional `excluding` record is skipped so a replacement does not
//! count the unit it is about to archive.

use fulfilment_core::{Archivable, DomainError, DomainResult, Entity};

use crate::warehouse::{Location, Warehouse};

/// Occupancy of one location as seen in a snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LocationUsage {
    pub active_warehouses: usize,
    pub used_capacity: i64,
}

/// Active records at `location`, minus `excluding` if given.
pub fn active_at<'a>(
    location: &'a Location,
    snapshot: &'a [Warehouse],
    excluding: Option<&'a Warehouse>,
) -> impl Iterator<Item = &'a Warehouse> + 'a {
    snapshot
        .iter()
        .filter(|w| w.is_active())
        .filter(move |w| w.location == location.identification)
        .filter(move |w| excluding.is_none_or(|ex| w.id() != ex.id()))
}

pub fn usage(location: &Location, snapshot: &[Warehouse], excluding: Option<&Warehouse>) -> LocationUsage {
    active_at(location, snapshot, excluding).fold(LocationUsage::default(), |acc, w| LocationUsage {
        active_warehouses: acc.active_warehouses + 1,
        used_capacity: acc.used_capacity.saturating_add(w.capacity),
    })
}

/// True iff the number of matching active records is strictly below the
/// location's warehouse limit.
pub fn has_free_slot(location: &Location, snapshot: &[Warehouse], excluding: Option<&Warehouse>) -> bool {
    let count = active_at(location, snapshot, excluding).count();
    count < location.max_number_of_warehouses as usize
}

/// True iff the matching active capacity plus `new_capacity` stays within
/// `max_capacity` (equality allowed).
pub fn capacity_envelope_allows(
    location: &Location,
    snapshot: &[Warehouse],
    new_capacity: i64,
    excluding: Option<&Warehouse>,
) -> bool {
    let projected = usage(location, snapshot, excluding)
        .used_capacity
        .saturating_add(new_capacity);
    projected <= location.max_capacity
}

pub fn capacity_covers_stock(capacity: i64, stock: i64) -> bool {
    capacity > 0 && stock >= 0 && capacity >= stock
}

/// [`has_free_slot`] as a rule check.
pub fn ensure_free_slot(
    location: &Location,
    snapshot: &[Warehouse],
    excluding: Option<&Warehouse>,
) -> DomainResult<()> {
    if has_free_slot(location, snapshot, excluding) {
        return Ok(());
    }
    Err(DomainError::unprocessable(format!(
        "Location '{}' already has the maximum number of warehouses ({}).",
        location.identification, location.max_number_of_warehouses
    )))
}

/// [`capacity_envelope_allows`] as a rule check.
pub fn ensure_capacity_envelope(
    location: &Location,
    snapshot: &[Warehouse],
    new_capacity: i64,
    excluding: Option<&Warehouse>,
) -> DomainResult<()> {
    if capacity_envelope_allows(location, snapshot, new_capacity, excluding) {
        return Ok(());
    }
    let used = usage(location, snapshot, excluding).used_capacity;
    Err(DomainError::unprocessable(format!(
        "Location '{}' cannot accommodate capacity {}. Current used capacity={}, maxCapacity={}.",
        location.identification, new_capacity, used, location.max_capacity
    )))
}

/// [`capacity_covers_stock`] as a rule check, reporting which half failed.
pub fn ensure_capacity_covers_stock(capacity: i64, stock: i64) -> DomainResult<()> {
    if capacity <= 0 {
        return Err(DomainError::unprocessable("Capacity must be a positive integer."));
    }
    if stock < 0 {
        return Err(DomainError::unprocessable("Stock must be zero or a positive integer."));
    }
    if capacity < stock {
        return Err(DomainError::unprocessable(format!(
            "Capacity ({capacity}) cannot be lower than stock ({stock})."
        )));
    }
    Ok(())
}
