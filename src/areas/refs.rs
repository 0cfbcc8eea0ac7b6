//! HEAD reference
//!
//! `HEAD` is written once by `init` as a symbolic reference,
//! `ref: refs/heads/<branch>`. Nothing else reads or moves it yet; it marks
//! where branch support would attach.

use crate::errors::{KitError, KitResult};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Prefix of a symbolic reference
const SYMREF_PREFIX: &str = "ref: ";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository root (typically `.kit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Point HEAD at `refs/heads/<branch>`
    pub fn set_head(&self, branch: &str) -> KitResult<()> {
        let head_path = self.head_path();
        let content = format!("{SYMREF_PREFIX}refs/heads/{branch}\n");

        std::fs::write(&head_path, content)
            .map_err(|e| KitError::io("Unable to write HEAD file", head_path, e))
    }
}
