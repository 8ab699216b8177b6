//! Entity traits: identity + continuity across state changes.

use chrono::{DateTime, Utc};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier (record identity, not business identity).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// An entity whose lifecycle ends in a terminal archived state.
///
/// Archival is one-way: once `archived_at` is set the record is history and is
/// never resurrected. Anything with `archived_at() == None` is considered active.
pub trait Archivable: Entity {
    fn archived_at(&self) -> Option<DateTime<Utc>>;

    fn is_active(&self) -> bool {
        self.archived_at().is_none()
    }

    fn is_archived(&self) -> bool {
        !self.is_active()
    }
}
