//! Read-only queries and exports over inventory collections.
//!
//! # Invariants
//! - Nothing here mutates records; every function borrows its input.
//! - Text search is a case-insensitive substring match.

use crate::model::activity::{Activity, ActivityType};
use crate::model::item::Item;
use crate::model::loan::Loan;
use crate::model::purchase::PurchaseItem;
use std::collections::BTreeMap;

const ACTIVITY_CSV_HEADER: [&str; 5] = ["Activity type", "Item name", "Category", "Date", "Count"];

/// Item list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    /// Matches item name or category title.
    pub search: String,
    /// Exact category title.
    pub category: Option<String>,
}

pub fn search_items<'a>(items: &'a [Item], query: &ItemQuery) -> Vec<&'a Item> {
    let needle = query.search.to_lowercase();
    items
        .iter()
        .filter(|item| {
            contains_folded(&item.name, &needle) || contains_folded(&item.category, &needle)
        })
        .filter(|item| {
            query
                .category
                .as_deref()
                .map_or(true, |category| item.category == category)
        })
        .collect()
}

/// Items that can be offered for a new loan.
pub fn loanable_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_loanable()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoanStatusFilter {
    #[default]
    All,
    Active,
    Returned,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanQuery {
    /// Matches item name, recipient name or category.
    pub search: String,
    pub status: LoanStatusFilter,
}

pub fn search_loans<'a>(loans: &'a [Loan], query: &LoanQuery) -> Vec<&'a Loan> {
    let needle = query.search.to_lowercase();
    loans
        .iter()
        .filter(|loan| {
            contains_folded(&loan.item_name, &needle)
                || contains_folded(&loan.recipient_name, &needle)
                || contains_folded(&loan.category, &needle)
        })
        .filter(|loan| match query.status {
            LoanStatusFilter::All => true,
            LoanStatusFilter::Active => !loan.is_returned,
            LoanStatusFilter::Returned => loan.is_returned,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PurchaseFilter {
    #[default]
    All,
    Pending,
    Purchased,
}

pub fn filter_purchases(entries: &[PurchaseItem], filter: PurchaseFilter) -> Vec<&PurchaseItem> {
    entries
        .iter()
        .filter(|entry| match filter {
            PurchaseFilter::All => true,
            PurchaseFilter::Pending => !entry.is_purchased,
            PurchaseFilter::Purchased => entry.is_purchased,
        })
        .collect()
}

/// Wish-list counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseSummary {
    pub total: usize,
    pub pending: usize,
    pub purchased: usize,
    /// Sum of `estimated_price` over pending entries that have one.
    pub pending_estimated_cost: f64,
}

impl PurchaseSummary {
    pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a PurchaseItem>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut summary, entry| {
                summary.total += 1;
                if entry.is_purchased {
                    summary.purchased += 1;
                } else {
                    summary.pending += 1;
                    summary.pending_estimated_cost += entry.estimated_price.unwrap_or(0.0);
                }
                summary
            })
    }
}

/// `None` keeps every activity.
pub fn filter_activities(activities: &[Activity], kind: Option<ActivityType>) -> Vec<&Activity> {
    activities
        .iter()
        .filter(|activity| kind.map_or(true, |kind| activity.kind == kind))
        .collect()
}

/// Per-type activity totals. Types with no entries are reported as zero.
pub fn activity_counts(activities: &[Activity]) -> BTreeMap<ActivityType, usize> {
    let mut counts: BTreeMap<ActivityType, usize> =
        ActivityType::ALL.into_iter().map(|kind| (kind, 0)).collect();
    for activity in activities {
        *counts.entry(activity.kind).or_default() += 1;
    }
    counts
}

/// Renders activities as CSV, one row per entry in the given order.
pub fn export_activity_csv<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> String {
    let mut out = ACTIVITY_CSV_HEADER.join(",");
    for activity in activities {
        let count = activity.count.map(|count| count.to_string()).unwrap_or_default();
        let row = [
            activity.kind.label(),
            activity.item_name.as_deref().unwrap_or(""),
            activity.category_name.as_deref().unwrap_or(""),
            activity.date.as_str(),
            count.as_str(),
        ];
        out.push('\n');
        out.push_str(
            &row.iter()
                .map(|field| csv_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::{csv_field, export_activity_csv};
    use crate::model::activity::{Activity, ActivityType};

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Drill"), "Drill");
        assert_eq!(csv_field("Tools, garage"), "\"Tools, garage\"");
        assert_eq!(csv_field("12\" saw"), "\"12\"\" saw\"");
    }

    #[test]
    fn export_writes_header_and_rows() {
        let activity = Activity {
            id: "a1".to_string(),
            kind: ActivityType::AddItem,
            description: "New item added".to_string(),
            item_name: Some("Drill".to_string()),
            category_name: Some("Tools".to_string()),
            date: "2024-01-01".to_string(),
            count: Some(1),
        };

        let csv = export_activity_csv([&activity]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Activity type,Item name,Category,Date,Count");
        assert_eq!(lines[1], "Item added,Drill,Tools,2024-01-01,1");
    }
}
