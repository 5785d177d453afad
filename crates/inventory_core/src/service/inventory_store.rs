//! Domain state store for one signed-in user.
//!
//! # Responsibility
//! - Hold the six record collections for the active identity.
//! - Apply mutations and keep loan/item state consistent.
//! - Append activity entries for notable mutations.
//! - Persist the full snapshot after every mutation.
//!
//! # Invariants
//! - Creating a loan marks its item on loan; returning it clears the flag.
//! - Mutations addressed to an unknown id are silent no-ops.
//! - Mutations never fail: persistence errors are logged and the in-memory
//!   state is kept.
//! - With no active identity nothing is persisted.
//! - Referenced ids (`category_id`, `item_id`) are not validated; dangling
//!   references are tolerated.

use crate::model::activity::{Activity, ActivityType, NewActivity};
use crate::model::category::{Category, CategoryPatch, NewCategory};
use crate::model::item::{Item, ItemPatch, NewItem};
use crate::model::loan::{Loan, NewLoan};
use crate::model::location::{Location, LocationPatch, NewLocation};
use crate::model::purchase::{NewPurchaseItem, PurchaseItem, PurchaseItemPatch};
use crate::model::snapshot::{DashboardStats, Snapshot};
use crate::model::{new_record_id, RecordId};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::service::activity_recorder::ActivityRecorder;
use crate::service::clock::{Clock, SystemClock};
use crate::service::identity::IdentityProvider;
use log::{debug, info, warn};

/// Authoritative in-memory inventory state for the active identity.
pub struct InventoryStore<R: SnapshotRepository> {
    repo: R,
    clock: Box<dyn Clock>,
    user_id: Option<String>,
    state: Snapshot,
}

impl<R: SnapshotRepository> InventoryStore<R> {
    /// Creates a signed-out store using the local wall clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }

    /// Creates a signed-out store with a custom date source.
    pub fn with_clock(repo: R, clock: impl Clock + 'static) -> Self {
        Self {
            repo,
            clock: Box::new(clock),
            user_id: None,
            state: Snapshot::default(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Follows the identity reported by `provider`.
    pub fn sync_identity(&mut self, provider: &dyn IdentityProvider) {
        let user_id = provider.current_user_id();
        self.switch_identity(user_id.as_deref());
    }

    /// Replaces in-memory state for a new identity.
    ///
    /// # Contract
    /// - `Some(id)`: loads that user's snapshot wholesale, or starts empty
    ///   when none is stored or the stored one cannot be read.
    /// - `None`: clears every collection without writing anything, so the
    ///   departing user's snapshot stays intact.
    /// - Switching to the already-active identity does nothing.
    pub fn switch_identity(&mut self, user_id: Option<&str>) {
        if self.user_id.as_deref() == user_id {
            return;
        }

        match user_id {
            Some(user_id) => {
                self.state = match self.repo.load(user_id) {
                    Ok(Some(snapshot)) => {
                        info!("event=identity_switch module=store status=loaded user_id={user_id}");
                        snapshot
                    }
                    Ok(None) => {
                        info!("event=identity_switch module=store status=empty user_id={user_id}");
                        Snapshot::default()
                    }
                    Err(err) => {
                        warn!(
                            "event=identity_switch module=store status=error user_id={user_id} error_code=snapshot_load_failed error={err}"
                        );
                        Snapshot::default()
                    }
                };
                self.user_id = Some(user_id.to_string());
            }
            None => {
                info!(
                    "event=identity_switch module=store status=signed_out previous_user_id={}",
                    self.user_id.as_deref().unwrap_or("-")
                );
                self.state = Snapshot::default();
                self.user_id = None;
            }
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn loans(&self) -> &[Loan] {
        &self.state.loans
    }

    /// Activity log, newest first.
    pub fn activities(&self) -> &[Activity] {
        &self.state.activities
    }

    pub fn purchase_items(&self) -> &[PurchaseItem] {
        &self.state.purchase_items
    }

    pub fn locations(&self) -> &[Location] {
        &self.state.locations
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.state.categories.iter().find(|category| category.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.state.items.iter().find(|item| item.id == id)
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.state.loans.iter().find(|loan| loan.id == id)
    }

    pub fn purchase_item(&self, id: &str) -> Option<&PurchaseItem> {
        self.state.purchase_items.iter().find(|entry| entry.id == id)
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.state.locations.iter().find(|location| location.id == id)
    }

    /// Derived counters; pure read over current collections.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.state.dashboard_stats()
    }

    pub fn add_category(&mut self, data: NewCategory) -> RecordId {
        let today = self.clock.today();
        let category = Category::from_new(new_record_id(), today.clone(), data);
        let id = category.id.clone();
        let title = category.title.clone();
        self.state.categories.push(category);
        self.record(
            NewActivity::new(ActivityType::AddCategory, "New category added").category_name(title),
            today,
        );
        debug!("event=category_add module=store status=ok category_id={id}");
        self.persist();
        id
    }

    /// Returns whether a category matched. Does not log an activity.
    pub fn update_category(&mut self, id: &str, patch: &CategoryPatch) -> bool {
        let Some(category) = self.state.categories.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        patch.apply_to(category);
        debug!("event=category_update module=store status=ok category_id={id}");
        self.persist();
        true
    }

    /// Removes a category. Items keep their `category_id`.
    ///
    /// Logged with `ActivityType::DeleteItem`; there is no category-specific
    /// delete type in the stored log format.
    pub fn delete_category(&mut self, id: &str) -> bool {
        let Some(index) = self.state.categories.iter().position(|c| c.id == id) else {
            return false;
        };
        let category = self.state.categories.remove(index);
        let today = self.clock.today();
        self.record(
            NewActivity::new(ActivityType::DeleteItem, "Category deleted")
                .category_name(category.title),
            today,
        );
        debug!("event=category_delete module=store status=ok category_id={id}");
        self.persist();
        true
    }

    pub fn add_item(&mut self, data: NewItem) -> RecordId {
        let today = self.clock.today();
        let item = Item::from_new(new_record_id(), today.clone(), data);
        let id = item.id.clone();
        let entry = NewActivity::new(ActivityType::AddItem, "New item added")
            .item_name(item.name.clone())
            .category_name(item.category.clone())
            .count(1);
        self.state.items.push(item);
        self.record(entry, today);
        debug!("event=item_add module=store status=ok item_id={id}");
        self.persist();
        id
    }

    /// Returns whether an item matched. Does not log an activity.
    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> bool {
        if !self.patch_item(id, patch) {
            return false;
        }
        debug!("event=item_update module=store status=ok item_id={id}");
        self.persist();
        true
    }

    /// Removes an item. Open loans that reference it are left as they are.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let Some(index) = self.state.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let item = self.state.items.remove(index);
        let today = self.clock.today();
        self.record(
            NewActivity::new(ActivityType::DeleteItem, "Item deleted")
                .item_name(item.name)
                .category_name(item.category),
            today,
        );
        debug!("event=item_delete module=store status=ok item_id={id}");
        self.persist();
        true
    }

    /// Records a loan and marks the referenced item as on loan.
    pub fn add_loan(&mut self, data: NewLoan) -> RecordId {
        let today = self.clock.today();
        let loan = Loan::from_new(new_record_id(), today.clone(), data);
        let id = loan.id.clone();
        let item_found = self.patch_item(&loan.item_id, &ItemPatch::loan_state(true));
        let entry = NewActivity::new(ActivityType::LoanItem, "Item loaned")
            .item_name(loan.item_name.clone())
            .category_name(loan.category.clone());
        debug!(
            "event=loan_add module=store status=ok loan_id={id} item_id={} item_found={item_found}",
            loan.item_id
        );
        self.state.loans.push(loan);
        self.record(entry, today);
        self.persist();
        id
    }

    /// Marks a loan returned and clears the item's loan flag.
    ///
    /// Returning an already-returned loan refreshes `return_date`.
    pub fn return_loan(&mut self, id: &str) -> bool {
        let today = self.clock.today();
        let Some(loan) = self.state.loans.iter_mut().find(|loan| loan.id == id) else {
            return false;
        };
        loan.mark_returned(today.clone());
        let item_id = loan.item_id.clone();
        let entry = NewActivity::new(ActivityType::ReturnItem, "Item returned")
            .item_name(loan.item_name.clone())
            .category_name(loan.category.clone());

        self.patch_item(&item_id, &ItemPatch::loan_state(false));
        self.record(entry, today);
        debug!("event=loan_return module=store status=ok loan_id={id} item_id={item_id}");
        self.persist();
        true
    }

    pub fn add_purchase_item(&mut self, data: NewPurchaseItem) -> RecordId {
        let entry = PurchaseItem::from_new(new_record_id(), self.clock.today(), data);
        let id = entry.id.clone();
        self.state.purchase_items.push(entry);
        debug!("event=purchase_add module=store status=ok purchase_id={id}");
        self.persist();
        id
    }

    pub fn update_purchase_item(&mut self, id: &str, patch: &PurchaseItemPatch) -> bool {
        let Some(entry) = self.state.purchase_items.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        patch.apply_to(entry);
        debug!("event=purchase_update module=store status=ok purchase_id={id}");
        self.persist();
        true
    }

    /// Flips the purchased flag, stamping or clearing the purchase date.
    pub fn toggle_purchased(&mut self, id: &str) -> bool {
        let today = self.clock.today();
        let Some(entry) = self.state.purchase_items.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.toggle_purchased(today);
        debug!(
            "event=purchase_toggle module=store status=ok purchase_id={id} is_purchased={}",
            entry.is_purchased
        );
        self.persist();
        true
    }

    pub fn delete_purchase_item(&mut self, id: &str) -> bool {
        let before = self.state.purchase_items.len();
        self.state.purchase_items.retain(|entry| entry.id != id);
        if self.state.purchase_items.len() == before {
            return false;
        }
        debug!("event=purchase_delete module=store status=ok purchase_id={id}");
        self.persist();
        true
    }

    pub fn add_location(&mut self, data: NewLocation) -> RecordId {
        let location = Location::from_new(new_record_id(), self.clock.today(), data);
        let id = location.id.clone();
        self.state.locations.push(location);
        debug!("event=location_add module=store status=ok location_id={id}");
        self.persist();
        id
    }

    pub fn update_location(&mut self, id: &str, patch: &LocationPatch) -> bool {
        let Some(location) = self.state.locations.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        patch.apply_to(location);
        debug!("event=location_update module=store status=ok location_id={id}");
        self.persist();
        true
    }

    /// Removes a location. Items keep their `location_id` and name copy.
    pub fn delete_location(&mut self, id: &str) -> bool {
        let before = self.state.locations.len();
        self.state.locations.retain(|location| location.id != id);
        if self.state.locations.len() == before {
            return false;
        }
        debug!("event=location_delete module=store status=ok location_id={id}");
        self.persist();
        true
    }

    fn patch_item(&mut self, id: &str, patch: &ItemPatch) -> bool {
        match self.state.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch.apply_to(item);
                true
            }
            None => false,
        }
    }

    fn record(&mut self, entry: NewActivity, date: String) {
        ActivityRecorder::new(&mut self.state.activities).record(entry, date);
    }

    fn persist(&self) {
        let Some(user_id) = self.user_id.as_deref() else {
            debug!("event=snapshot_save module=store status=skipped reason=signed_out");
            return;
        };
        if let Err(err) = self.repo.save(user_id, &self.state) {
            warn!(
                "event=snapshot_save module=store status=error user_id={user_id} error_code=snapshot_save_failed error={err}"
            );
        }
    }
}
