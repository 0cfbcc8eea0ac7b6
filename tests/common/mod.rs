#![allow(dead_code)]


pub const EMPTY_DIGEST: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// SHA-1 hex digest, computed independently of the crate under test
pub fn sha1_hex(content: &[u8]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Tree digest of a store holding exactly `contents`
pub fn expected_tree_digest(contents: &[&[u8]]) -> String {
    let mut object_ids = contents
        .iter()
        .map(|content| sha1_hex(content))
        .collect::<Vec<_>>();
    object_ids.sort();
    object_ids.dedup();

    let lines = object_ids
        .iter()
        .map(|object_id| format!("{object_id} {object_id}"))
        .collect::<Vec<_>>()
        .join("\n");

    sha1_hex(lines.as_bytes())
}
