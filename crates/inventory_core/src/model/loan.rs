//! Loan records.
//!
//! Loans are append/mutate only: there is no delete operation.

use super::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: RecordId,
    pub item_id: RecordId,
    /// Item name snapshot at loan time.
    pub item_name: String,
    /// Category title snapshot at loan time.
    pub category: String,
    pub recipient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_contact: Option<String>,
    pub loan_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_returned: bool,
}

/// Caller-supplied fields for a new loan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLoan {
    pub item_id: RecordId,
    pub item_name: String,
    pub category: String,
    pub recipient_name: String,
    pub recipient_contact: Option<String>,
    pub notes: Option<String>,
}

impl Loan {
    pub(crate) fn from_new(id: RecordId, loan_date: String, data: NewLoan) -> Self {
        Self {
            id,
            item_id: data.item_id,
            item_name: data.item_name,
            category: data.category,
            recipient_name: data.recipient_name,
            recipient_contact: data.recipient_contact,
            loan_date,
            return_date: None,
            notes: data.notes,
            is_returned: false,
        }
    }

    /// Marks the loan returned on `date`.
    ///
    /// Re-returning refreshes `return_date`.
    pub(crate) fn mark_returned(&mut self, date: String) {
        self.is_returned = true;
        self.return_date = Some(date);
    }
}
