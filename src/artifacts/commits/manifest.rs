//! Object manifest behind a commit's `tree` line
//!
//! One line per stored object, `<object-id> <sha1(content)>`, joined with
//! `\n` (no trailing newline) and hashed once more to give the tree digest.
//! The content digest is recomputed from the bytes on disk rather than taken
//! from the file name.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ManifestEntry {
    object_id: ObjectId,
    content_digest: ObjectId,
}

impl ManifestEntry {
    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    pub fn content_digest(&self) -> &ObjectId {
        &self.content_digest
    }

    pub fn line(&self) -> String {
        format!("{} {}", self.object_id, self.content_digest)
    }
}

/// Snapshot of every object in the store, in store listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn build(objects: impl IntoIterator<Item = (ObjectId, Bytes)>) -> Self {
        let entries = objects
            .into_iter()
            .map(|(object_id, content)| ManifestEntry::new(object_id, ObjectId::digest(&content)))
            .collect();

        Manifest { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(ManifestEntry::line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Digest recorded on the commit's `tree` line
    pub fn digest(&self) -> ObjectId {
        ObjectId::digest(self.render().as_bytes())
    }
}
