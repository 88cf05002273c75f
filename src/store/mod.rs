pub mod entry;
pub mod seed;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::{Category, Record};

/// One JSON record list per category inside a data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.json", category.def().storage_key))
    }

    pub fn load(&self, category: Category) -> Result<Vec<Record>, StoreError> {
        let path = self.path_for(category);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found; starting with an empty list", path.display());
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
        debug!("loaded {} record(s) from {}", records.len(), path.display());
        Ok(records)
    }

    pub fn save(&self, category: Category, records: &[Record]) -> Result<(), StoreError> {
        let path = self.path_for(category);
        ensure_dir(&self.dir)?;
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!("saved {} record(s) to {}", records.len(), path.display());
        Ok(())
    }

    pub fn clear(&self, category: Category) -> Result<(), StoreError> {
        let path = self.path_for(category);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("cleared {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
