use crate::artifacts::commits::commit::Commit;
use crate::artifacts::commits::commit_id::CommitId;
use crate::errors::{KitError, KitResult};
use chrono::{DateTime, TimeZone};
use fake::rand;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMP_COMMIT_PREFIX: &str = "tmp-commit-";

/// Commit records, one file per commit named by its commit ID
///
/// History carries no state of its own between calls: every operation
/// re-reads the commits directory.
#[derive(Debug)]
pub struct History {
    path: Box<Path>,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Commit IDs in creation order, oldest first
    pub fn list(&self) -> KitResult<Vec<CommitId>> {
        let entries = std::fs::read_dir(&self.path)
            .map_err(|e| KitError::io("Unable to read commits directory", &*self.path, e))?;

        let mut commit_ids = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| KitError::io("Unable to read commits directory", &*self.path, e))?;
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with(TEMP_COMMIT_PREFIX) {
                continue;
            }
            match CommitId::try_parse(&name) {
                Ok(commit_id) => commit_ids.push(commit_id),
                Err(e) => tracing::warn!(path = %entry.path().display(), "skipping foreign file: {e}"),
            }
        }
        commit_ids.sort();

        Ok(commit_ids)
    }

    pub fn latest(&self) -> KitResult<Option<CommitId>> {
        Ok(self.list()?.pop())
    }

    /// Persist `commit` under the next free commit ID for `now`
    ///
    /// The body is written to a temporary file first and then linked under its
    /// commit ID, so a record is either complete or absent. Linking never
    /// replaces an existing record; an ID that is already taken moves the
    /// allocation on to the next sequence number.
    pub fn write<Tz>(&self, commit: &Commit, now: &DateTime<Tz>) -> KitResult<CommitId>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let temp_commit_path = self.write_temp(commit.serialize().as_bytes())?;
        let linked = self.link_next(&temp_commit_path, now);

        if let Err(e) = std::fs::remove_file(&temp_commit_path) {
            tracing::warn!(path = %temp_commit_path.display(), "unable to remove temp commit file: {e}");
        }

        let commit_id = linked?;
        tracing::info!(commit = %commit_id, tree = %commit.tree(), "wrote commit");

        Ok(commit_id)
    }

    fn write_temp(&self, body: &[u8]) -> KitResult<PathBuf> {
        let temp_commit_path = self
            .path
            .join(format!("{TEMP_COMMIT_PREFIX}{}", rand::random::<u32>()));

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_commit_path)
            .map_err(|e| KitError::io("Unable to create commit file", &temp_commit_path, e))?;

        if let Err(e) = file.write_all(body) {
            let _ = std::fs::remove_file(&temp_commit_path);
            return Err(KitError::io(
                "Unable to write commit file",
                temp_commit_path,
                e,
            ));
        }

        Ok(temp_commit_path)
    }

    fn link_next<Tz>(&self, temp_commit_path: &Path, now: &DateTime<Tz>) -> KitResult<CommitId>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut latest = self.latest()?;

        loop {
            let commit_id = CommitId::next(now, latest.as_ref())?;
            let commit_path = self.path.join(commit_id.to_string());

            match std::fs::hard_link(temp_commit_path, &commit_path) {
                Ok(()) => return Ok(commit_id),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tracing::debug!(commit = %commit_id, "commit id already taken");
                    latest = Some(commit_id);
                }
                Err(e) => return Err(KitError::io("Unable to link commit file", commit_path, e)),
            }
        }
    }

    pub fn read_body(&self, commit_id: &CommitId) -> KitResult<String> {
        let commit_path = self.path.join(commit_id.to_string());

        std::fs::read_to_string(&commit_path)
            .map_err(|e| KitError::io("Unable to read commit file", commit_path, e))
    }

    pub fn read(&self, commit_id: &CommitId) -> KitResult<Commit> {
        Commit::parse(commit_id, &self.read_body(commit_id)?)
    }

    /// Every commit, newest first; a malformed record fails the whole listing
    pub fn log(&self) -> KitResult<Vec<(CommitId, Commit)>> {
        self.list()?
            .into_iter()
            .rev()
            .map(|commit_id| -> KitResult<(CommitId, Commit)> {
                let commit = self.read(&commit_id)?;
                Ok((commit_id, commit))
            })
            .collect()
    }
}
