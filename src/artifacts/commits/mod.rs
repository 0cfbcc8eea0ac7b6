//! Commit records
//!
//! A commit is a snapshot of the entire object store at one point in time:
//!
//! - **Manifest**: one line per stored object, pairing its ID with a fresh
//!   digest of its content
//! - **Commit**: the manifest digest (`tree`) plus a free-text message
//! - **CommitId**: a time-ordered name that doubles as the storage file name
//!
//! Commits do not link to parents; each record stands on its own and history
//! order comes from the commit IDs alone.

pub mod commit;
pub mod commit_id;
pub mod manifest;
