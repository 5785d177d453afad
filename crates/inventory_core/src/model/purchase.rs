//! Wish-list (purchase) records.

use super::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PurchasePriority>,
    pub is_purchased: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_added: String,
    /// Present only while `is_purchased` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_purchased: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPurchaseItem {
    pub name: String,
    pub category: Option<String>,
    pub priority: Option<PurchasePriority>,
    pub estimated_price: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update for a wish-list entry. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseItemPatch {
    pub name: Option<String>,
    pub category: Option<Option<String>>,
    pub priority: Option<Option<PurchasePriority>>,
    pub is_purchased: Option<bool>,
    pub estimated_price: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
    pub date_purchased: Option<Option<String>>,
}

impl PurchaseItemPatch {
    /// Merges every set field into `entry`.
    pub fn apply_to(&self, entry: &mut PurchaseItem) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(category) = &self.category {
            entry.category = category.clone();
        }
        if let Some(priority) = self.priority {
            entry.priority = priority;
        }
        if let Some(is_purchased) = self.is_purchased {
            entry.is_purchased = is_purchased;
        }
        if let Some(estimated_price) = self.estimated_price {
            entry.estimated_price = estimated_price;
        }
        if let Some(notes) = &self.notes {
            entry.notes = notes.clone();
        }
        if let Some(date_purchased) = &self.date_purchased {
            entry.date_purchased = date_purchased.clone();
        }
    }
}

impl PurchaseItem {
    pub(crate) fn from_new(id: RecordId, date_added: String, data: NewPurchaseItem) -> Self {
        Self {
            id,
            name: data.name,
            category: data.category,
            priority: data.priority,
            is_purchased: false,
            estimated_price: data.estimated_price,
            notes: data.notes,
            date_added,
            date_purchased: None,
        }
    }

    /// Flips the purchased flag, stamping or clearing `date_purchased`.
    pub(crate) fn toggle_purchased(&mut self, today: String) {
        self.is_purchased = !self.is_purchased;
        self.date_purchased = if self.is_purchased { Some(today) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::{NewPurchaseItem, PurchaseItem, PurchasePriority};

    #[test]
    fn toggle_sets_then_clears_purchase_date() {
        let mut entry = PurchaseItem::from_new(
            "p1".to_string(),
            "2024-01-01".to_string(),
            NewPurchaseItem {
                name: "Ladder".to_string(),
                priority: Some(PurchasePriority::High),
                ..NewPurchaseItem::default()
            },
        );

        entry.toggle_purchased("2024-02-01".to_string());
        assert!(entry.is_purchased);
        assert_eq!(entry.date_purchased.as_deref(), Some("2024-02-01"));

        entry.toggle_purchased("2024-03-01".to_string());
        assert!(!entry.is_purchased);
        assert!(entry.date_purchased.is_none());
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&PurchasePriority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
