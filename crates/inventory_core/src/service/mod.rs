//! Inventory use-case services.
//!
//! # Responsibility
//! - Own the in-memory collections for the signed-in user.
//! - Keep cross-record consistency (loan state, activity log).
//! - Provide read-only reporting queries over a snapshot.
//!
//! # Invariants
//! - Services never touch SQLite directly; persistence goes through
//!   `SnapshotRepository`.

pub mod activity_recorder;
pub mod clock;
pub mod identity;
pub mod inventory_store;
pub mod report;
