//! Time-ordered commit identifier
//!
//! ## Format
//!
//! - Base: local wall-clock time at second resolution, `YYYY-MM-DDThh-mm-ss`
//! - Sequence: optional `.NNN` suffix (`001` to `999`), present only when an
//!   earlier commit already claimed the same (or a later) base
//!
//! Only the canonical spelling is a commit ID, so the string order of the
//! file names always equals the creation order.

use crate::errors::{KitError, KitResult};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// `chrono` pattern for the timestamp part of a commit ID
pub const COMMIT_ID_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Width of the zero-padded `YYYY-MM-DDThh-mm-ss` base
const BASE_LENGTH: usize = 19;

/// Width of the zero-padded sequence suffix
const SEQUENCE_WIDTH: usize = 3;

/// Highest sequence number that still fits the suffix
pub const MAX_SEQUENCE: u32 = 999;

/// Name of a commit record, ordered by creation time
///
/// Field order matters: the derived `Ord` compares the timestamp first and
/// the disambiguation sequence second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId {
    base: String,
    sequence: u32,
}

impl CommitId {
    /// Allocate the ID for a commit created at `now`
    ///
    /// The result is strictly greater than `latest`. If the clock has not
    /// moved past the latest commit's second (or went backwards), the latest
    /// base is reused with the next sequence number instead of colliding.
    pub fn next<Tz>(now: &DateTime<Tz>, latest: Option<&CommitId>) -> KitResult<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let base = now.format(COMMIT_ID_FORMAT).to_string();

        match latest {
            Some(latest) if base <= latest.base => {
                let sequence = latest
                    .sequence
                    .checked_add(1)
                    .filter(|sequence| *sequence <= MAX_SEQUENCE)
                    .ok_or_else(|| {
                        KitError::InvalidCommitId(format!(
                            "{latest}: more than {MAX_SEQUENCE} commits within one second"
                        ))
                    })?;

                Ok(CommitId {
                    base: latest.base.clone(),
                    sequence,
                })
            }
            _ => Ok(CommitId { base, sequence: 0 }),
        }
    }

    /// Parse a commit ID from a commit file name
    ///
    /// Only the exact spelling produced by `Display` is accepted.
    pub fn try_parse(name: &str) -> KitResult<Self> {
        let invalid = || KitError::InvalidCommitId(name.to_string());

        let (base, sequence) = match name.split_once('.') {
            Some((base, sequence)) => {
                if sequence.len() != SEQUENCE_WIDTH
                    || !sequence.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(invalid());
                }
                let sequence = sequence.parse::<u32>().map_err(|_| invalid())?;
                if sequence == 0 {
                    return Err(invalid());
                }
                (base, sequence)
            }
            None => (name, 0),
        };

        if base.len() != BASE_LENGTH {
            return Err(invalid());
        }
        let timestamp =
            NaiveDateTime::parse_from_str(base, COMMIT_ID_FORMAT).map_err(|_| invalid())?;
        if timestamp.format(COMMIT_ID_FORMAT).to_string() != base {
            return Err(invalid());
        }

        let commit_id = CommitId {
            base: base.to_string(),
            sequence,
        };
        if commit_id.to_string() != name {
            return Err(invalid());
        }

        Ok(commit_id)
    }

    /// Timestamp part of the ID, without any sequence suffix
    pub fn timestamp(&self) -> &str {
        &self.base
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sequence == 0 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}.{:03}", self.base, self.sequence)
        }
    }
}
