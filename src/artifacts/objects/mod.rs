//! Content-addressed object identifiers
//!
//! Every object in the store is identified by the SHA-1 digest of its raw
//! bytes, written as 40 lowercase hexadecimal characters. There is no header
//! or type prefix: the digest covers the file content alone.

pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
