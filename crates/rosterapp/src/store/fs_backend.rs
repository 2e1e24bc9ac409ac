use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem key-value backend: one `<key>.json` file per key under `root`.
///
/// Constructed without a root, the backend reports itself unavailable and
/// roster runs purely in memory.
pub struct FsBackend {
    root: Option<PathBuf>,
}

impl FsBackend {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.get_root()?.join(Self::file_name(key)?))
    }

    fn get_root(&self) -> Result<&Path> {
        self.root
            .as_deref()
            .ok_or_else(|| RosterError::Store("No data directory available".to_string()))
    }

    fn file_name(key: &str) -> Result<String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RosterError::Store(format!("Invalid storage key: '{}'", key)));
        }
        Ok(format!("{}.json", key))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let root = self.get_root()?;
        self.ensure_dir(root)?;
        let target = root.join(Self::file_name(key)?);

        // Atomic Write
        let tmp_path = root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RosterError::Io)?;
        if let Err(err) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RosterError::Io(err));
        }

        Ok(())
    }

    fn available(&self) -> bool {
        self.root.is_some()
    }
}
