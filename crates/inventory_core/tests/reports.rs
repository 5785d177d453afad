use inventory_core::db::open_db_in_memory;
use inventory_core::service::report::{
    activity_counts, export_activity_csv, filter_activities, filter_purchases, loanable_items,
    search_items, search_loans, ItemQuery, LoanQuery, LoanStatusFilter, PurchaseFilter,
    PurchaseSummary,
};
use inventory_core::{
    ActivityType, FixedClock, InventoryStore, ItemPatch, NewCategory, NewItem, NewLoan,
    NewPurchaseItem, SqliteSnapshotRepository,
};

fn item(name: &str, category: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: category.to_string(),
        category_id: category.to_lowercase(),
        ..NewItem::default()
    }
}

#[test]
fn item_search_matches_name_or_category_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let mut store =
        InventoryStore::with_clock(SqliteSnapshotRepository::new(&conn), FixedClock::new("2024-05-01"));
    store.add_item(item("Cordless Drill", "Tools"));
    store.add_item(item("Cookbook", "Books"));
    store.add_item(item("Toolbox", "Storage"));

    let by_name = search_items(
        store.items(),
        &ItemQuery {
            search: "TOOL".to_string(),
            category: None,
        },
    );
    let names: Vec<&str> = by_name.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Cordless Drill", "Toolbox"]);

    let in_books = search_items(
        store.items(),
        &ItemQuery {
            search: String::new(),
            category: Some("Books".to_string()),
        },
    );
    assert_eq!(in_books.len(), 1);
    assert_eq!(in_books[0].name, "Cookbook");

    assert_eq!(search_items(store.items(), &ItemQuery::default()).len(), 3);
}

#[test]
fn loanable_items_exclude_lent_and_out_of_stock() {
    let conn = open_db_in_memory().unwrap();
    let mut store =
        InventoryStore::with_clock(SqliteSnapshotRepository::new(&conn), FixedClock::new("2024-05-01"));
    let drill = store.add_item(item("Drill", "Tools"));
    let saw = store.add_item(item("Saw", "Tools"));
    store.add_item(item("Hammer", "Tools"));
    store.update_item(
        &saw,
        &ItemPatch {
            is_out_of_stock: Some(true),
            ..ItemPatch::default()
        },
    );
    store.add_loan(NewLoan {
        item_id: drill,
        item_name: "Drill".to_string(),
        category: "Tools".to_string(),
        recipient_name: "Sam".to_string(),
        ..NewLoan::default()
    });

    let loanable = loanable_items(store.items());
    assert_eq!(loanable.len(), 1);
    assert_eq!(loanable[0].name, "Hammer");
}

#[test]
fn loan_search_filters_by_status_and_text() {
    let conn = open_db_in_memory().unwrap();
    let mut store =
        InventoryStore::with_clock(SqliteSnapshotRepository::new(&conn), FixedClock::new("2024-05-01"));
    let drill = store.add_item(item("Drill", "Tools"));
    let novel = store.add_item(item("Novel", "Books"));
    let drill_loan = store.add_loan(NewLoan {
        item_id: drill,
        item_name: "Drill".to_string(),
        category: "Tools".to_string(),
        recipient_name: "Sam".to_string(),
        ..NewLoan::default()
    });
    store.add_loan(NewLoan {
        item_id: novel,
        item_name: "Novel".to_string(),
        category: "Books".to_string(),
        recipient_name: "Alex".to_string(),
        ..NewLoan::default()
    });
    store.return_loan(&drill_loan);

    let active = search_loans(
        store.loans(),
        &LoanQuery {
            status: LoanStatusFilter::Active,
            ..LoanQuery::default()
        },
    );
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].recipient_name, "Alex");

    let returned = search_loans(
        store.loans(),
        &LoanQuery {
            status: LoanStatusFilter::Returned,
            ..LoanQuery::default()
        },
    );
    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0].id, drill_loan);

    let by_recipient = search_loans(
        store.loans(),
        &LoanQuery {
            search: "sam".to_string(),
            status: LoanStatusFilter::All,
        },
    );
    assert_eq!(by_recipient.len(), 1);
    assert_eq!(by_recipient[0].item_name, "Drill");
}

#[test]
fn purchase_filter_and_summary() {
    let conn = open_db_in_memory().unwrap();
    let mut store =
        InventoryStore::with_clock(SqliteSnapshotRepository::new(&conn), FixedClock::new("2024-05-01"));
    let ladder = store.add_purchase_item(NewPurchaseItem {
        name: "Ladder".to_string(),
        estimated_price: Some(120.0),
        ..NewPurchaseItem::default()
    });
    store.add_purchase_item(NewPurchaseItem {
        name: "Paint".to_string(),
        estimated_price: Some(30.5),
        ..NewPurchaseItem::default()
    });
    store.add_purchase_item(NewPurchaseItem {
        name: "Brush".to_string(),
        ..NewPurchaseItem::default()
    });
    store.toggle_purchased(&ladder);

    let pending = filter_purchases(store.purchase_items(), PurchaseFilter::Pending);
    assert_eq!(pending.len(), 2);
    let purchased = filter_purchases(store.purchase_items(), PurchaseFilter::Purchased);
    assert_eq!(purchased.len(), 1);
    assert_eq!(purchased[0].name, "Ladder");

    let summary = PurchaseSummary::summarize(store.purchase_items());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.purchased, 1);
    assert!((summary.pending_estimated_cost - 30.5).abs() < f64::EPSILON);
}

#[test]
fn activity_filter_counts_and_csv_export() {
    let conn = open_db_in_memory().unwrap();
    let mut store =
        InventoryStore::with_clock(SqliteSnapshotRepository::new(&conn), FixedClock::new("2024-05-01"));
    let category_id = store.add_category(NewCategory::titled("Tools, garage"));
    store.add_item(item("Drill", "Tools"));
    let saw = store.add_item(item("Saw", "Tools"));
    store.delete_item(&saw);
    store.delete_category(&category_id);

    let counts = activity_counts(store.activities());
    assert_eq!(counts[&ActivityType::AddItem], 2);
    assert_eq!(counts[&ActivityType::DeleteItem], 2);
    assert_eq!(counts[&ActivityType::AddCategory], 1);
    assert_eq!(counts[&ActivityType::LoanItem], 0);

    let adds = filter_activities(store.activities(), Some(ActivityType::AddItem));
    assert_eq!(adds.len(), 2);
    assert_eq!(filter_activities(store.activities(), None).len(), 5);

    let csv = export_activity_csv(adds);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Activity type,Item name,Category,Date,Count");
    assert_eq!(lines[1], "Item added,Saw,Tools,2024-05-01,1");

    let full = export_activity_csv(store.activities());
    assert!(full.contains("Deleted,,\"Tools, garage\",2024-05-01,"));
}
