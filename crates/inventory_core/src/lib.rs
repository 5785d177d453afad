//! Core domain logic for the household inventory.
//! This crate owns every record collection and its persistence per user.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityType, NewActivity};
pub use model::category::{Category, CategoryPatch, NewCategory};
pub use model::item::{Item, ItemPatch, NewItem};
pub use model::loan::{Loan, NewLoan};
pub use model::location::{Location, LocationPatch, LocationType, NewLocation};
pub use model::purchase::{NewPurchaseItem, PurchaseItem, PurchaseItemPatch, PurchasePriority};
pub use model::snapshot::{DashboardStats, Snapshot, RECENT_ACTIVITY_LIMIT};
pub use model::{new_record_id, RecordId};
pub use repo::snapshot_repo::{
    storage_key, RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::identity::{IdentityProvider, StaticIdentity};
pub use service::inventory_store::InventoryStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
