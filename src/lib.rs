//! kit: a small content-addressed version control core
//!
//! File contents are stored by SHA-1 digest in an object store, whole-store
//! snapshots are recorded as time-ordered commits, and history is listed
//! newest first.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
