use std::path::PathBuf;
use thiserror::Error;

use crate::config::document::DocumentError;

/// Errors that can occur while reading or writing the shortcut store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store directory cannot be created or written to.
    #[error("Store directory not writable: {0}")]
    StoreDirNotWritable(PathBuf),
    /// Export requested before anything was persisted.
    #[error("No shortcuts available to export (nothing stored at {0})")]
    NothingToExport(PathBuf),
    /// Imported file is not a shortcuts document.
    #[error("Invalid file format. Please choose a JSON file with a \"shortcuts\" array ({0})")]
    InvalidImport(#[source] DocumentError),
    /// Backup selected for restore is not a shortcuts document.
    #[error("Backup {path} is not a valid shortcuts file: {source}")]
    InvalidBackup {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Document could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Errors the user caused and should be told about
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidImport(_) | StoreError::NothingToExport(_)
        )
    }
}
