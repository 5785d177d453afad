//! Per-user snapshot and derived dashboard statistics.

use super::activity::Activity;
use super::category::Category;
use super::item::Item;
use super::loan::Loan;
use super::location::Location;
use super::purchase::PurchaseItem;
use serde::{Deserialize, Serialize};

/// Number of activities surfaced on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Full state of the six collections for one identity.
///
/// Missing collections in a stored payload decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    pub loans: Vec<Loan>,
    /// Newest first.
    pub activities: Vec<Activity>,
    pub purchase_items: Vec<PurchaseItem>,
    pub locations: Vec<Location>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.items.is_empty()
            && self.loans.is_empty()
            && self.activities.is_empty()
            && self.purchase_items.is_empty()
            && self.locations.is_empty()
    }

    /// Derives dashboard counters from the current collections.
    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_items: self.items.len(),
            out_of_stock_items: self.items.iter().filter(|item| item.is_out_of_stock).count(),
            loaned_items: self.items.iter().filter(|item| item.is_on_loan).count(),
            total_categories: self.categories.len(),
            recent_activities: self
                .activities
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

/// Dashboard counters. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_items: usize,
    pub out_of_stock_items: usize,
    pub loaned_items: usize,
    pub total_categories: usize,
    pub recent_activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    #[test]
    fn partial_payload_decodes_missing_collections_as_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"categories":[]}"#).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn empty_snapshot_has_zero_stats() {
        let stats = Snapshot::default().dashboard_stats();
        assert_eq!(stats.total_items, 0);
        assert!(stats.recent_activities.is_empty());
    }
}
