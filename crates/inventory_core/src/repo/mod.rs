//! Persistence contracts for per-user snapshots.
//!
//! # Responsibility
//! - Define the load/save contract the inventory store depends on.
//! - Keep SQLite and JSON encoding details out of the store.
//!
//! # Invariants
//! - Snapshots are namespaced per user id; no key is shared between users.
//! - Saves replace the previous snapshot wholesale (last writer wins).

pub mod snapshot_repo;
