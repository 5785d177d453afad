//! Activity log entries.
//!
//! # Invariants
//! - Entries are never mutated after creation.
//! - The log is ordered newest first.

use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    AddItem,
    DeleteItem,
    EditItem,
    LoanItem,
    ReturnItem,
    AddCategory,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::AddItem,
        ActivityType::DeleteItem,
        ActivityType::EditItem,
        ActivityType::LoanItem,
        ActivityType::ReturnItem,
        ActivityType::AddCategory,
    ];

    /// Stable wire name, as stored in snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddItem => "add_item",
            Self::DeleteItem => "delete_item",
            Self::EditItem => "edit_item",
            Self::LoanItem => "loan_item",
            Self::ReturnItem => "return_item",
            Self::AddCategory => "add_category",
        }
    }

    /// Human-readable label used by reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddItem => "Item added",
            Self::DeleteItem => "Deleted",
            Self::EditItem => "Item edited",
            Self::LoanItem => "Item loaned",
            Self::ReturnItem => "Item returned",
            Self::AddCategory => "Category added",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Activity payload before the recorder assigns `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityType,
    pub description: String,
    pub item_name: Option<String>,
    pub category_name: Option<String>,
    pub count: Option<u32>,
}

impl NewActivity {
    pub fn new(kind: ActivityType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            item_name: None,
            category_name: None,
            count: None,
        }
    }

    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    pub fn category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}
