//! Household inventory domain model.
//!
//! # Responsibility
//! - Define the six record kinds owned by the inventory store.
//! - Define typed patches used for partial updates.
//! - Define the per-user snapshot shape persisted by repositories.
//!
//! # Invariants
//! - Every record is identified by an opaque, unique `RecordId`.
//! - Dates are display-formatted strings, not structured timestamps.
//! - Denormalized copies (item category title, loan item name) are
//!   point-in-time snapshots and are never re-synced.

pub mod activity;
pub mod category;
pub mod item;
pub mod loan;
pub mod location;
pub mod purchase;
pub mod snapshot;

use uuid::Uuid;

/// Opaque identifier shared by all inventory records.
///
/// Kept as a string so snapshots written with older id schemes still load.
pub type RecordId = String;

/// Generates a fresh collision-resistant record id.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_record_id;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<_> = (0..256).map(|_| new_record_id()).collect();
        assert_eq!(ids.len(), 256);
    }
}
