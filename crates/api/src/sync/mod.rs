//! Upsert synchronization: maps remote records into local field sets
//! and mirrors them into storage.

pub mod marvel;
