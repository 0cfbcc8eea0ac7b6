use crate::areas::repository::Repository;
use crate::errors::KitError;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.path().exists() {
            return Err(KitError::AlreadyInitialized(self.path().to_path_buf()).into());
        }

        fs::create_dir_all(self.path()).with_context(|| {
            format!("Failed to create repository directory {}", self.path().display())
        })?;

        fs::create_dir(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir(self.history().commits_path())
            .context("Failed to create commits directory")?;

        self.refs()
            .set_head(DEFAULT_BRANCH)
            .context("Failed to create initial HEAD reference")?;

        tracing::info!(root = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty kit repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
