use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::refs::Refs;
use crate::errors::{KitError, KitResult};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Default name of the repository root inside the working directory
pub const KIT_DIR: &str = ".kit";

pub const OBJECTS_DIR: &str = "objects";
pub const COMMITS_DIR: &str = "commits";

/// A kit repository rooted at an explicit directory
///
/// All state lives on disk under `path`; several repositories can coexist in
/// one process.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    history: History,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose root directory is `path` (it may not exist yet)
    pub fn new(path: impl Into<PathBuf>, writer: Box<dyn std::io::Write>) -> Self {
        let path = path.into();

        let database = Database::new(path.join(OBJECTS_DIR).into_boxed_path());
        let history = History::new(path.join(COMMITS_DIR).into_boxed_path());
        let refs = Refs::new(path.clone().into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            history,
            refs,
        }
    }

    /// Open the repository rooted at `<work_dir>/.kit`
    pub fn in_work_dir(work_dir: &Path, writer: Box<dyn std::io::Write>) -> Self {
        Self::new(work_dir.join(KIT_DIR), writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.path.is_dir()
    }

    pub fn ensure_initialized(&self) -> KitResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(KitError::NotFound(self.path.to_path_buf()))
        }
    }
}
