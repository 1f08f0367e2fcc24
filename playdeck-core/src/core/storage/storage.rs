use std::fs;
use std::path::PathBuf;

use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::storage::{self, StorageError};

/// The storage is responsible for reading and writing application documents
/// within its base directory.
///
/// Documents are stored as JSON.
#[derive(Debug, Clone)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a new storage for the given directory.
    pub fn from_directory(path: &str) -> Self {
        Self {
            base_path: PathBuf::from(path),
        }
    }

    /// Verify if the given filename exists within the storage.
    pub fn exists(&self, filename: &str) -> bool {
        self.base_path.join(filename).exists()
    }

    /// Read the given filename and deserialize its contents.
    ///
    /// It returns the deserialized document, else the [StorageError].
    pub fn read<T: DeserializeOwned>(&self, filename: &str) -> storage::Result<T> {
        let path = self.base_path.join(filename);
        trace!("Reading document {:?}", path);

        if !path.exists() {
            return Err(StorageError::FileNotFound(filename.to_string()));
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| StorageError::ReadingFailed(filename.to_string(), e.to_string()))?;
        serde_json::from_str(&contents)
            .map_err(|e| StorageError::ReadingFailed(filename.to_string(), e.to_string()))
    }

    /// Serialize the given value and write it to the given filename.
    ///
    /// Parent directories are created as needed.
    pub fn write<T: Serialize>(&self, filename: &str, value: &T) -> storage::Result<()> {
        let path = self.base_path.join(filename);
        trace!("Writing document {:?}", path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::WritingFailed(filename.to_string(), e.to_string()))?;
        }

        let contents = serde_json::to_string(value)
            .map_err(|e| StorageError::WritingFailed(filename.to_string(), e.to_string()))?;
        fs::write(&path, contents)
            .map_err(|e| StorageError::WritingFailed(filename.to_string(), e.to_string()))?;

        debug!("Written document {:?}", path);
        Ok(())
    }
}

impl From<&str> for Storage {
    fn from(value: &str) -> Self {
        Self {
            base_path: PathBuf::from(value),
        }
    }
}

impl From<&PathBuf> for Storage {
    fn from(value: &PathBuf) -> Self {
        Self {
            base_path: value.clone(),
        }
    }
}
