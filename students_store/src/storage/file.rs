use std::fs::{create_dir_all, read_to_string};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use super::Storage;

/// Keeps every key in its own `<dir>/<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStorage(pub PathBuf);

impl FileStorage {
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.0.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        read_to_string(&path)
            .with_context(|| format!("Failed file read {:?}", path))
            .map(Some)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        create_dir_all(&self.0)
            .with_context(|| format!("Failed directory creation {:?}", self.0))?;

        let mut tmp_file = NamedTempFile::new_in(&self.0)?;
        tmp_file
            .write_all(value.as_bytes())
            .with_context(|| format!("Failed snapshot writing for key '{}'", key))?;
        tmp_file.flush()?;
        tmp_file.persist(self.key_path(key))?;

        Ok(())
    }
}
