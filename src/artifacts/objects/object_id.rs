//! Object identifier (SHA-1 hex digest)
//!
//! ## Format
//!
//! 40 lowercase hex characters (e.g., "aaf4c61d...")
//!
//! ## Storage
//!
//! Objects are stored flat as `<root>/objects/<40-hex-digest>`.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{KitError, KitResult};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Object identifier: the SHA-1 digest of an object's content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Hash raw bytes into an object ID
    pub fn digest(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character lowercase hexadecimal string
    pub fn try_parse(id: String) -> KitResult<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(KitError::InvalidObjectId(format!(
                "{id} (expected {OBJECT_ID_LENGTH} characters, got {})",
                id.len()
            )));
        }
        if !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(KitError::InvalidObjectId(id));
        }
        Ok(Self(id))
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
