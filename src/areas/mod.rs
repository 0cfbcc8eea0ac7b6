//! Core repository components
//!
//! - `database`: Content-addressed object store
//! - `history`: Commit records and their time-ordered listing
//! - `refs`: The HEAD reference
//! - `repository`: Repository root configuration and coordination

pub mod database;
pub mod history;
pub mod refs;
pub mod repository;
