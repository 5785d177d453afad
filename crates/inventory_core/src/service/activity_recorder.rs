//! Append-only activity log writer.
//!
//! # Invariants
//! - New entries are always inserted at the front (newest first).
//! - Existing entries are never modified or removed.

use crate::model::activity::{Activity, NewActivity};
use crate::model::new_record_id;
use log::debug;

/// Write-only view over an activity log.
pub struct ActivityRecorder<'log> {
    log: &'log mut Vec<Activity>,
}

impl<'log> ActivityRecorder<'log> {
    pub fn new(log: &'log mut Vec<Activity>) -> Self {
        Self { log }
    }

    /// Prepends one entry stamped with `date` and a fresh id.
    pub fn record(&mut self, entry: NewActivity, date: String) -> &Activity {
        let activity = Activity {
            id: new_record_id(),
            kind: entry.kind,
            description: entry.description,
            item_name: entry.item_name,
            category_name: entry.category_name,
            date,
            count: entry.count,
        };
        debug!(
            "event=activity_record module=activity status=ok activity_id={} type={}",
            activity.id, activity.kind
        );
        self.log.insert(0, activity);
        &self.log[0]
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityRecorder;
    use crate::model::activity::{ActivityType, NewActivity};

    #[test]
    fn record_prepends_newest_first() {
        let mut log = Vec::new();
        let mut recorder = ActivityRecorder::new(&mut log);
        recorder.record(
            NewActivity::new(ActivityType::AddItem, "first"),
            "2024-01-01".to_string(),
        );
        recorder.record(
            NewActivity::new(ActivityType::LoanItem, "second").item_name("Drill"),
            "2024-01-02".to_string(),
        );

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].kind, ActivityType::LoanItem);
        assert_eq!(log[0].item_name.as_deref(), Some("Drill"));
        assert_eq!(log[1].kind, ActivityType::AddItem);
        assert_ne!(log[0].id, log[1].id);
    }
}
