use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hc_core::ports::{ConfigStoreError, ConfigStorePort};
use tracing::debug;

use super::validate_key;

/// One file per key: `<root>/<key>.json`.
///
/// Writes go through a sibling temp file and a rename, so a reader sees
/// either the old or the new bytes.
pub struct FileConfigStore {
    root: PathBuf,
}

impl FileConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ConfigStoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    fn atomic_write(&self, path: &Path, bytes: &[u8]) -> Result<(), ConfigStoreError> {
        fs::create_dir_all(&self.root)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes)?;
        // replacing an existing file is atomic on POSIX; Windows gives no such guarantee
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl ConfigStorePort for FileConfigStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigStoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigStoreError> {
        let path = self.path_for(key)?;
        self.atomic_write(&path, bytes)?;
        debug!(key, path = %path.display(), len = bytes.len(), "Saved preference");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ConfigStoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
