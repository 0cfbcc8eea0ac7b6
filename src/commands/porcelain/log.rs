use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print every commit body, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let entries = self.history().log().context("Unable to read history")?;
        tracing::debug!(commits = entries.len(), "listing history");

        for (_, commit) in entries {
            write!(self.writer(), "\n{}\n\n", commit.serialize().trim())?;
        }

        Ok(())
    }
}
