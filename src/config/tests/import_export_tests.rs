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

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{StoreError, StoreManager, EXPORT_FILE_NAME};
use crate::core::types::{default_shortcuts, Shortcut};

/// Helper: manager with defaults already persisted
fn loaded_store() -> (TempDir, StoreManager) {
    let temp_dir = TempDir::new().unwrap();
    let manager = StoreManager::new(temp_dir.path().join("shortcuts.json")).unwrap();
    manager.load().unwrap();
    (temp_dir, manager)
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_copies_store() {
    let (temp_dir, manager) = loaded_store();
    let destination = temp_dir.path().join(EXPORT_FILE_NAME);

    manager.export_to(&destination).unwrap();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        fs::read_to_string(manager.store_path()).unwrap()
    );
}

#[test]
fn test_export_without_store_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manager = StoreManager::new(temp_dir.path().join("shortcuts.json")).unwrap();
    let destination = temp_dir.path().join("out.json");

    let result = manager.export_to(&destination);

    assert!(matches!(result, Err(StoreError::NothingToExport(_))));
    assert!(result.unwrap_err().is_user_facing());
    assert!(!destination.exists());
}

#[test]
fn test_export_then_import_elsewhere() {
    let (temp_dir, source) = loaded_store();
    let exported = temp_dir.path().join("exported.json");
    source.export_to(&exported).unwrap();

    let other_dir = TempDir::new().unwrap();
    let target = StoreManager::new(other_dir.path().join("shortcuts.json")).unwrap();
    let document = target.import_from(&exported).unwrap();

    assert_eq!(document.shortcuts, default_shortcuts());
}

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_import_replaces_store() {
    let (temp_dir, manager) = loaded_store();
    let file = write_file(
        &temp_dir,
        "import.json",
        r#"{"shortcuts":[{"name":"X","url":"https://x.com"}]}"#,
    );

    let document = manager.import_from(&file).unwrap();

    assert_eq!(document.shortcuts, vec![Shortcut::new("X", "https://x.com")]);
    let (loaded, _) = manager.load().unwrap();
    assert_eq!(loaded.shortcuts, vec![Shortcut::new("X", "https://x.com")]);
}

#[test]
fn test_import_backs_up_previous_store() {
    let (temp_dir, manager) = loaded_store();
    let before = fs::read_to_string(manager.store_path()).unwrap();
    let file = write_file(&temp_dir, "import.json", r#"{"shortcuts":[]}"#);

    manager.import_from(&file).unwrap();

    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), before);
}

#[test]
fn test_import_wrong_shape_rejected() {
    let (temp_dir, manager) = loaded_store();
    let before = fs::read_to_string(manager.store_path()).unwrap();
    let file = write_file(&temp_dir, "import.json", r#"{"notShortcuts": []}"#);

    let result = manager.import_from(&file);

    assert!(matches!(result, Err(StoreError::InvalidImport(_))));
    assert_eq!(
        fs::read_to_string(manager.store_path()).unwrap(),
        before,
        "Store must be untouched"
    );
    assert!(manager.list_backups().unwrap().is_empty(), "No backup for a rejected import");
}

#[test]
fn test_import_not_json_rejected() {
    let (temp_dir, manager) = loaded_store();
    let file = write_file(&temp_dir, "notes.txt", "just some notes");

    let err = manager.import_from(&file).unwrap_err();

    assert!(err.is_user_facing());
    assert!(err.to_string().contains("shortcuts"));
}

#[test]
fn test_import_missing_file_is_io_error() {
    let (temp_dir, manager) = loaded_store();

    let result = manager.import_from(&temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(StoreError::Io(_))));
}
