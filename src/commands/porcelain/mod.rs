//! Porcelain commands
//!
//! - `init`: Create the repository root, object and commit stores, and HEAD
//! - `add`: Store file contents in the object store
//! - `commit`: Record a snapshot of the whole object store
//! - `log`: Show commit history, newest first

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
