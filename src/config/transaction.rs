// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Store transaction management with automatic backups
//!
//! Provides atomic whole-document replacement of the shortcut store.

use atomic_write_file::AtomicWriteFile;
use std::{io::Write, path::Path, path::PathBuf};

use crate::config::{StoreError, StoreManager};

/// Writes `content` to `path` via temp file + rename
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    // Open file for atomic writing
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| StoreError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    // Write content
    file.write_all(content.as_bytes())
        .map_err(|e| StoreError::WriteFailed(format!("Failed to write content: {}", e)))?;

    // Commit atomically
    file.commit()
        .map_err(|e| StoreError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}

/// Atomic store replacement with automatic backup.
///
/// - **Atomic**: the store is either the old or the new document, never a mix
/// - **Durable**: the backup is taken before anything is written
///
/// # Lifecycle
///
/// 1. `begin()` - Backs up the current store (if there is one)
/// 2. Caller prepares the new document in memory
/// 3. `commit()` - Writes atomically; on failure the store is unchanged
///
/// # Example
///
/// ```no_run
/// use newtab_shortcuts::config::{StoreManager, StoreTransaction};
/// use std::path::PathBuf;
///
/// let store = StoreManager::new(PathBuf::from("shortcuts.json"))?;
/// let tx = StoreTransaction::begin(&store)?;
///
/// let new_content = r#"{"shortcuts":[{"name":"X","url":"https://x.com"}]}"#;
///
/// match tx.commit(new_content) {
///     Ok(()) => println!("Store replaced"),
///     Err(e) => eprintln!("Commit failed: {}", e),
/// }
/// # Ok::<(), newtab_shortcuts::config::StoreError>(())
/// ```
pub struct StoreTransaction<'a> {
    manager: &'a StoreManager,
    backup_path: Option<PathBuf>,
}

impl<'a> StoreTransaction<'a> {
    /// Begins a new transaction by backing up the current store.
    ///
    /// When no store file exists yet there is nothing to back up, and
    /// `backup_path()` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the backup cannot be
    /// written. No changes are made in that case.
    pub fn begin(manager: &'a StoreManager) -> Result<Self, StoreError> {
        // Backup first, before anything can be written
        let backup_path = manager.create_timestamped_backup()?;

        Ok(Self {
            manager,
            backup_path,
        })
    }

    /// Backup taken by `begin()`
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Commits the transaction by atomically writing `new_content` to the store.
    ///
    /// Consumes the transaction, so a transaction cannot be committed twice.
    /// The backup stays in the backup directory.
    ///
    /// # Errors
    ///
    /// If the write fails the store is unchanged and the backup is still
    /// available.
    pub fn commit(self, new_content: &str) -> Result<(), StoreError> {
        write_atomic(self.manager.store_path(), new_content)
    }
}
