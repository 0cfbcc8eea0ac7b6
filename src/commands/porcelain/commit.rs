use crate::areas::repository::Repository;
use crate::artifacts::commits::commit::Commit;
use crate::artifacts::commits::commit_id::CommitId;
use crate::artifacts::commits::manifest::Manifest;
use crate::errors::KitError;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::io::Write;

/// Overrides the commit clock, formatted as `%Y-%m-%d %H:%M:%S %z`
pub const COMMIT_DATE_ENV: &str = "KIT_COMMIT_DATE";

impl Repository {
    /// Join `words` into a message and commit the whole object store
    pub fn commit(&mut self, words: &[impl AsRef<str>]) -> anyhow::Result<()> {
        let now = commit_timestamp_from_env()?;
        let commit_id = self.commit_at(words, &now)?;

        writeln!(self.writer(), "Created commit {}", commit_id)?;

        Ok(())
    }

    pub fn commit_at(
        &self,
        words: &[impl AsRef<str>],
        now: &DateTime<FixedOffset>,
    ) -> anyhow::Result<CommitId> {
        let message = words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        if message.is_empty() {
            return Err(KitError::Validation("Please provide a commit message.".to_string()).into());
        }

        self.ensure_initialized()?;

        let objects = self
            .database()
            .list()
            .context("Unable to snapshot the object store")?;
        let manifest = Manifest::build(objects);
        tracing::debug!(objects = manifest.len(), "built manifest");

        let commit = Commit::new(manifest.digest(), message);
        let commit_id = self
            .history()
            .write(&commit, now)
            .context("Unable to record commit")?;

        Ok(commit_id)
    }
}

fn commit_timestamp_from_env() -> anyhow::Result<DateTime<FixedOffset>> {
    match std::env::var(COMMIT_DATE_ENV) {
        Ok(date_str) => DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z")
            .or_else(|_| DateTime::parse_from_rfc2822(&date_str))
            .with_context(|| format!("Invalid {COMMIT_DATE_ENV}: {date_str}")),
        Err(_) => Ok(chrono::Local::now().fixed_offset()),
    }
}
