use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Store each file's content in order; files stored before a failure stay stored
    pub fn add(&mut self, paths: &[impl AsRef<Path>]) -> anyhow::Result<()> {
        if paths.is_empty() {
            writeln!(self.writer(), "Nothing specified, nothing added.")?;
            return Ok(());
        }

        self.ensure_initialized()?;

        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read(path)
                .with_context(|| format!("Unable to read file {}", path.display()))?;

            let object_id = self
                .database()
                .put(&content)
                .with_context(|| format!("Unable to store file {}", path.display()))?;

            tracing::debug!(file = %path.display(), oid = %object_id, "added file");
        }

        Ok(())
    }
}
