use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{KitError, KitResult};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMP_OBJECT_PREFIX: &str = "tmp-obj-";

/// Content-addressed object store
///
/// Objects are raw file contents written verbatim under their SHA-1 digest.
/// An object that already exists is never rewritten.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store `content` and return its ID, skipping the write if it is already present
    pub fn put(&self, content: &[u8]) -> KitResult<ObjectId> {
        let object_id = ObjectId::digest(content);
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.write_object(&object_path, content)?;
        tracing::debug!(oid = %object_id, bytes = content.len(), "stored object");

        Ok(object_id)
    }

    pub fn load(&self, object_id: &ObjectId) -> KitResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(KitError::ObjectNotFound(object_id.to_string()))
            }
            Err(e) => Err(KitError::io("Unable to read object file", object_path, e)),
        }
    }

    /// Every stored object with its content, sorted by object ID
    pub fn list(&self) -> KitResult<Vec<(ObjectId, Bytes)>> {
        let entries = std::fs::read_dir(&self.path)
            .map_err(|e| KitError::io("Unable to read objects directory", &*self.path, e))?;

        let mut object_ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                KitError::io("Unable to read objects directory", &*self.path, e)
            })?;
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with(TEMP_OBJECT_PREFIX) {
                continue;
            }
            match ObjectId::try_parse(name) {
                Ok(object_id) => object_ids.push(object_id),
                Err(e) => tracing::warn!(path = %entry.path().display(), "skipping foreign file: {e}"),
            }
        }
        object_ids.sort();

        object_ids
            .into_iter()
            .map(|object_id| -> KitResult<(ObjectId, Bytes)> {
                let content = self.load(&object_id)?;
                Ok((object_id, content))
            })
            .collect()
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> KitResult<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .map_err(|e| KitError::io("Unable to open object file", &temp_object_path, e))?;

        if let Err(e) = file.write_all(content) {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(KitError::io(
                "Unable to write object file",
                temp_object_path,
                e,
            ));
        }
        drop(file);

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_object_path);
            KitError::io("Unable to rename object file to", object_path, e)
        })
    }

    fn generate_temp_name() -> PathBuf {
        PathBuf::from(format!("{TEMP_OBJECT_PREFIX}{}", rand::random::<u32>()))
    }
}
