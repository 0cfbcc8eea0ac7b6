//! Data structures stored in a kit repository
//!
//! - `objects`: content-addressed object identifiers
//! - `commits`: commit records, their manifest and time-ordered IDs

pub mod commits;
pub mod objects;
