//! Commit record
//!
//! ## Format
//!
//! On disk, under `<root>/commits/<commit-id>`:
//! ```text
//! tree <manifest-digest>
//!
//! <commit message>
//! ```

use crate::artifacts::commits::commit_id::CommitId;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{KitError, KitResult};
use derive_new::new;

/// Immutable snapshot record: manifest digest plus message
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    tree: ObjectId,
    message: String,
}

impl Commit {
    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn serialize(&self) -> String {
        format!("tree {}\n\n{}\n", self.tree, self.message)
    }

    /// Parse a commit body as stored
    ///
    /// Only the single newline closing the message is dropped, so padding
    /// inside the message survives.
    pub fn parse(id: &CommitId, body: &str) -> KitResult<Self> {
        let malformed = |reason: &str| KitError::MalformedCommit {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let body = body.strip_suffix('\n').unwrap_or(body);
        let (header, message) = match body.split_once('\n') {
            Some((header, rest)) => (header, rest),
            None => (body, ""),
        };

        let tree = header
            .strip_prefix("tree ")
            .ok_or_else(|| malformed("missing tree line"))?;
        let tree = ObjectId::try_parse(tree.to_string())
            .map_err(|_| malformed("tree line does not hold an object id"))?;

        let message = message
            .strip_prefix('\n')
            .ok_or_else(|| malformed("missing blank line after tree"))?;

        Ok(Commit::new(tree, message.to_string()))
    }
}
