//! Item records and their patch type.
//!
//! # Invariants
//! - `category` and `location` are denormalized title/name copies taken when
//!   the item was registered or last patched; renames elsewhere do not
//!   propagate.
//! - `is_on_loan` is driven by the loan lifecycle, not by item edits.

use super::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    /// Category title snapshot.
    pub category: String,
    /// May dangle after the category is deleted.
    pub category_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_added: String,
    pub is_out_of_stock: bool,
    pub is_on_loan: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Location name snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<RecordId>,
}

/// Caller-supplied fields for a new item.
///
/// `id` and `date_added` are assigned by the store and `is_on_loan` starts
/// as `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub category_id: RecordId,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_out_of_stock: bool,
    pub price: Option<f64>,
    pub barcode: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<RecordId>,
}

/// Partial update for an item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<RecordId>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub is_out_of_stock: Option<bool>,
    pub is_on_loan: Option<bool>,
    pub price: Option<Option<f64>>,
    pub barcode: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub location_id: Option<Option<RecordId>>,
}

impl ItemPatch {
    pub(crate) fn loan_state(is_on_loan: bool) -> Self {
        Self {
            is_on_loan: Some(is_on_loan),
            ..Self::default()
        }
    }

    /// Merges every set field into `item`.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(category_id) = &self.category_id {
            item.category_id = category_id.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(image) = &self.image {
            item.image = image.clone();
        }
        if let Some(is_out_of_stock) = self.is_out_of_stock {
            item.is_out_of_stock = is_out_of_stock;
        }
        if let Some(is_on_loan) = self.is_on_loan {
            item.is_on_loan = is_on_loan;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(barcode) = &self.barcode {
            item.barcode = barcode.clone();
        }
        if let Some(location) = &self.location {
            item.location = location.clone();
        }
        if let Some(location_id) = &self.location_id {
            item.location_id = location_id.clone();
        }
    }
}

impl Item {
    pub(crate) fn from_new(id: RecordId, date_added: String, data: NewItem) -> Self {
        Self {
            id,
            name: data.name,
            category: data.category,
            category_id: data.category_id,
            description: data.description,
            image: data.image,
            date_added,
            is_out_of_stock: data.is_out_of_stock,
            is_on_loan: false,
            price: data.price,
            barcode: data.barcode,
            location: data.location,
            location_id: data.location_id,
        }
    }

    /// Whether the item can be handed out on a new loan.
    pub fn is_loanable(&self) -> bool {
        !self.is_on_loan && !self.is_out_of_stock
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemPatch, NewItem};

    #[test]
    fn patch_clears_and_sets_optional_fields() {
        let mut item = Item::from_new(
            "i1".to_string(),
            "2024-01-01".to_string(),
            NewItem {
                name: "Drill".to_string(),
                price: Some(49.5),
                barcode: Some("123".to_string()),
                ..NewItem::default()
            },
        );

        ItemPatch {
            price: Some(None),
            location: Some(Some("Garage".to_string())),
            ..ItemPatch::default()
        }
        .apply_to(&mut item);

        assert_eq!(item.price, None);
        assert_eq!(item.barcode.as_deref(), Some("123"));
        assert_eq!(item.location.as_deref(), Some("Garage"));
        assert!(!item.is_on_loan);
    }

    #[test]
    fn loanable_requires_in_stock_and_not_lent() {
        let mut item = Item::from_new("i1".to_string(), String::new(), NewItem::default());
        assert!(item.is_loanable());
        item.is_out_of_stock = true;
        assert!(!item.is_loanable());
        item.is_out_of_stock = false;
        ItemPatch::loan_state(true).apply_to(&mut item);
        assert!(!item.is_loanable());
    }
}
