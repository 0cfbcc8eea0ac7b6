//! Error taxonomy shared by the repository areas
//!
//! Every variant is fatal for the invocation that raised it; the command layer
//! wraps these in `anyhow` with additional context before reporting them.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KitError {
    /// A required argument was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// A filesystem read, write or directory listing failed.
    #[error("{context} {}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The repository root was never initialized.
    #[error("not a kit repository: {} does not exist (run `kit init` first)", .0.display())]
    NotFound(PathBuf),

    #[error("repository already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("malformed commit {id}: {reason}")]
    MalformedCommit { id: String, reason: String },
}

impl KitError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KitError::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

pub type KitResult<T> = Result<T, KitError>;
