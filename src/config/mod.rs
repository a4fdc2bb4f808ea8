//! Shortcut store management with atomic writes and backup support.
//!
//! The store is a single JSON file holding the ordered shortcut list.
//! Key features:
//!
//! - **Self-healing load**: a missing or corrupt store is replaced by the
//!   default collection (the corrupt file is backed up first); single bad
//!   entries are dropped and the rest is kept
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Backups**: import, reset and restore take a timestamped backup first
//! - **Import/export**: whole-document copy in and out of the store
//!
//! # Example
//!
//! ```no_run
//! use newtab_shortcuts::config::StoreManager;
//!
//! let store = StoreManager::new("/home/user/.config/newtab-shortcuts/shortcuts.json".into())?;
//! let (document, outcome) = store.load()?;
//! println!("{} shortcuts ({})", document.shortcuts.len(), outcome);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod error;
pub mod transaction;

use chrono::Local;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::ShortcutsDocument;

pub use document::{parse_document, parse_store, DocumentError};
pub use error::StoreError;
pub use transaction::StoreTransaction;

/// Store location used when neither `--store` nor the environment says otherwise
pub const DEFAULT_STORE_PATH: &str = "~/.config/newtab-shortcuts/shortcuts.json";

/// Environment variable overriding the store location
pub const STORE_PATH_ENV: &str = "NEWTAB_SHORTCUTS_STORE";

/// File name suggested for exports
pub const EXPORT_FILE_NAME: &str = "shortcuts.json";

/// Expands `~` in a user-supplied store path
pub fn resolve_store_path(raw: &Path) -> PathBuf {
    let text = raw.to_string_lossy();
    PathBuf::from(shellexpand::tilde(text.as_ref()).as_ref())
}

/// Why `load` fell back to the default collection
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultReason {
    /// No store file yet
    Missing,
    /// Store file existed but was rejected; carries the parse error
    Corrupt(String),
}

/// What `load` found
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Store parsed; number of shortcuts
    Loaded(usize),
    /// Defaults were installed and persisted
    Defaulted(DefaultReason),
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Loaded(count) => write!(f, "loaded {} from store", count),
            LoadOutcome::Defaulted(DefaultReason::Missing) => write!(f, "defaults installed"),
            LoadOutcome::Defaulted(DefaultReason::Corrupt(reason)) => {
                write!(f, "store was corrupt ({}), defaults installed", reason)
            }
        }
    }
}

/// Manages the shortcut store file with safe atomic operations.
///
/// Reads are plain; every write goes through an atomic rename, and writes
/// that replace the whole collection (import, reset, restore) go through a
/// `StoreTransaction` so a backup exists first.
#[derive(Debug)]
pub struct StoreManager {
    /// Path to the JSON store
    store_path: PathBuf,
    backup_dir: PathBuf,
}

impl StoreManager {
    /// Creates a StoreManager for the given store file.
    ///
    /// The file itself does not need to exist (`load` will create it), but
    /// its directory and the `backups/` directory next to it are created
    /// here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreDirNotWritable` if either directory cannot
    /// be created or is read-only.
    pub fn new(store_path: PathBuf) -> Result<Self, StoreError> {
        let store_dir = store_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if store_path.read_link().is_ok() {
            tracing::warn!(
                "Store file is a symlink: {} (allowed, but be aware of what it points to)",
                store_path.display()
            );
        }

        // e.g., ~/.config/newtab-shortcuts/shortcuts.json → ~/.config/newtab-shortcuts/backups/
        let backup_dir = store_dir.join("backups");

        fs::create_dir_all(&backup_dir)
            .map_err(|_| StoreError::StoreDirNotWritable(backup_dir.clone()))?;

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(StoreError::StoreDirNotWritable(backup_dir));
        }

        Ok(Self {
            store_path,
            backup_dir,
        })
    }

    /// Path of the JSON store
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Directory holding timestamped backups
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Raw store content, or `None` if nothing has been persisted yet
    pub fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.store_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads the collection, installing defaults if the store is missing or corrupt
    ///
    /// "Corrupt" means unparseable JSON or no `shortcuts` array. Entries that
    /// fail validation are skipped with a warning and the valid ones are
    /// kept, and the store is rewritten in normalised form if it differs.
    /// Before a rewrite that drops data (defaults over a corrupt file, or
    /// skipped entries) the previous file is copied into the backup
    /// directory; failing to take that backup is logged and does not stop
    /// the recovery.
    ///
    /// # Errors
    ///
    /// Only I/O failures reading the file or writing the defaults.
    pub fn load(&self) -> Result<(ShortcutsDocument, LoadOutcome), StoreError> {
        let Some(content) = self.read_raw()? else {
            let defaults = ShortcutsDocument::defaults();
            self.persist(&defaults)?;
            tracing::info!("No store at {}, default shortcuts saved", self.store_path.display());
            return Ok((defaults, LoadOutcome::Defaulted(DefaultReason::Missing)));
        };

        match parse_store(&content) {
            Ok((document, rejected)) => {
                for entry in &rejected {
                    tracing::warn!("Skipping shortcut in {}: {}", self.store_path.display(), entry);
                }

                // Persisted URLs always carry a scheme, so normalised entries go back to disk
                if document::to_json(&document)? != content {
                    if !rejected.is_empty() {
                        self.backup_before_repair();
                    }
                    self.persist(&document)?;
                    tracing::info!("Store {} rewritten in normal form", self.store_path.display());
                }

                let count = document.shortcuts.len();
                tracing::debug!("Loaded {} shortcuts from {}", count, self.store_path.display());
                Ok((document, LoadOutcome::Loaded(count)))
            }
            Err(e) => {
                tracing::warn!("Store {} is corrupt: {}", self.store_path.display(), e);
                self.backup_before_repair();

                let defaults = ShortcutsDocument::defaults();
                self.persist(&defaults)?;
                Ok((
                    defaults,
                    LoadOutcome::Defaulted(DefaultReason::Corrupt(e.to_string())),
                ))
            }
        }
    }

    /// Atomically writes `document` to the store
    pub fn persist(&self, document: &ShortcutsDocument) -> Result<(), StoreError> {
        let content = document::to_json(document)?;
        transaction::write_atomic(&self.store_path, &content)
    }

    /// Copies the persisted document to `destination`
    ///
    /// # Errors
    ///
    /// `StoreError::NothingToExport` if the store has never been written.
    pub fn export_to(&self, destination: &Path) -> Result<(), StoreError> {
        let content = self
            .read_raw()?
            .ok_or_else(|| StoreError::NothingToExport(self.store_path.clone()))?;

        transaction::write_atomic(destination, &content)?;
        tracing::info!("Exported shortcuts to {}", destination.display());
        Ok(())
    }

    /// Replaces the store with the document in `source`
    ///
    /// The file must be a valid shortcuts document; otherwise the store is
    /// left untouched. The current store is backed up before it is replaced.
    ///
    /// # Returns
    ///
    /// The imported (normalised) document.
    pub fn import_from(&self, source: &Path) -> Result<ShortcutsDocument, StoreError> {
        let content = fs::read_to_string(source)?;
        let document = parse_document(&content).map_err(StoreError::InvalidImport)?;

        self.replace_store(&document)?;

        tracing::info!(
            "Imported {} shortcuts from {}",
            document.shortcuts.len(),
            source.display()
        );
        Ok(document)
    }

    /// Overwrites the store with the default collection, after a backup
    pub fn reset(&self) -> Result<ShortcutsDocument, StoreError> {
        let defaults = ShortcutsDocument::defaults();
        self.replace_store(&defaults)?;
        Ok(defaults)
    }

    /// Lists backups, newest first
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, StoreError> {
        let prefix = format!("{}.", self.store_file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically
        backups.sort();
        backups.reverse();
        Ok(backups)
    }

    /// Restores the store from a backup file, backing up the current store first
    pub fn restore_backup(&self, backup_path: &Path) -> Result<ShortcutsDocument, StoreError> {
        let content = fs::read_to_string(backup_path)?;
        let document = parse_document(&content).map_err(|source| StoreError::InvalidBackup {
            path: backup_path.to_path_buf(),
            source,
        })?;

        self.replace_store(&document)?;

        tracing::info!("Restored store from {}", backup_path.display());
        Ok(document)
    }

    /// Replaces the whole store inside a `StoreTransaction`
    fn replace_store(&self, document: &ShortcutsDocument) -> Result<(), StoreError> {
        let content = document::to_json(document)?;
        let tx = StoreTransaction::begin(self)?;

        if let Some(backup) = tx.backup_path() {
            tracing::info!("Previous store backed up to {}", backup.display());
        }

        tx.commit(&content)
    }

    /// Backs up a store that `load` is about to rewrite, logging any failure
    fn backup_before_repair(&self) {
        match self.create_timestamped_backup() {
            Ok(Some(path)) => tracing::warn!("Previous store saved to {}", path.display()),
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not back up store before repairing it: {}", e),
        }
    }

    fn store_file_name(&self) -> Result<&str, StoreError> {
        self.store_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StoreError::BackupFailed(format!(
                    "Store path has no usable file name: {}",
                    self.store_path.display()
                ))
            })
    }

    /// Copies the current store into the backup directory
    ///
    /// Returns `Ok(None)` when there is no store file to back up. Backups
    /// taken within the same second get a numeric suffix instead of
    /// overwriting each other.
    pub(crate) fn create_timestamped_backup(&self) -> Result<Option<PathBuf>, StoreError> {
        let Some(content) = self.read_raw()? else {
            return Ok(None);
        };

        // Generate timestamp in YYYY-MM-DD_HHMMSS format
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let base_name = format!("{}.{}", self.store_file_name()?, timestamp);

        let mut backup_path = self.backup_dir.join(&base_name);
        let mut counter = 1;
        while backup_path.exists() {
            backup_path = self.backup_dir.join(format!("{}-{}", base_name, counter));
            counter += 1;
        }

        fs::write(&backup_path, content)
            .map_err(|e| StoreError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        tracing::debug!("Backup written to {}", backup_path.display());
        Ok(Some(backup_path))
    }
}

#[cfg(test)]
mod tests;
