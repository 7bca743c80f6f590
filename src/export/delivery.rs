use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;

use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};

/// Capability that hands a finished file to its destination (disk, a download, a buffer).
pub trait FileDelivery: Send + Sync {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ThumbsmithResult<()>;
}

/// Writes files into a directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `file_name` lands.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ThumbsmithResult<()> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(ThumbsmithError::export(format!(
                "invalid file name \"{file_name}\""
            )));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir {}", self.dir.display()))?;
        let path = self.path_for(file_name);
        std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

/// Collects delivered files in memory.
#[derive(Debug, Default)]
pub struct InMemoryDelivery {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl InMemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered `(file_name, bytes)` pairs, oldest first.
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileDelivery for InMemoryDelivery {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ThumbsmithResult<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| ThumbsmithError::export("in-memory delivery lock poisoned"))?;
        files.push((file_name.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/delivery.rs"]
mod tests;
