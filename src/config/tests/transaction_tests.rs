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

use std::fs;
use tempfile::TempDir;

use crate::config::{StoreManager, StoreTransaction};

// ============================================================================
// StoreTransaction Tests
// ============================================================================

#[test]
fn test_transaction_basic_flow() {
    // Setup: Create temp store with original content
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("shortcuts.json");
    let original_content = r#"{"shortcuts":[{"name":"A","url":"https://a.example"}]}"#;
    fs::write(&store_path, original_content).unwrap();

    let manager = StoreManager::new(store_path.clone()).unwrap();

    // Begin transaction (creates backup)
    let tx = StoreTransaction::begin(&manager).unwrap();
    assert!(tx.backup_path().is_some());

    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 1, "Should have created one backup");

    // Commit new content
    let new_content = r#"{"shortcuts":[{"name":"B","url":"https://b.example"}]}"#;
    tx.commit(new_content).unwrap();

    assert_eq!(fs::read_to_string(&store_path).unwrap(), new_content);

    // Backup still holds the original
    let backups_after = manager.list_backups().unwrap();
    assert_eq!(backups_after.len(), 1, "Backup should still exist after commit");
    assert_eq!(
        fs::read_to_string(&backups_after[0]).unwrap(),
        original_content,
        "Backup should contain original content"
    );
}

#[test]
fn test_transaction_without_existing_store() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("shortcuts.json");
    let manager = StoreManager::new(store_path.clone()).unwrap();

    let tx = StoreTransaction::begin(&manager).unwrap();
    assert!(tx.backup_path().is_none(), "Nothing to back up yet");
    assert!(manager.list_backups().unwrap().is_empty());

    tx.commit(r#"{"shortcuts":[]}"#).unwrap();
    assert!(store_path.exists());
}

#[test]
fn test_commit_leaves_no_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("shortcuts.json");
    let manager = StoreManager::new(store_path).unwrap();

    StoreTransaction::begin(&manager)
        .unwrap()
        .commit(r#"{"shortcuts":[]}"#)
        .unwrap();

    let mut names: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["backups", "shortcuts.json"]);
}
