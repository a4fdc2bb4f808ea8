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

use crate::config::{DefaultReason, LoadOutcome, StoreManager};
use crate::core::types::{default_shortcuts, Shortcut, ShortcutsDocument};

/// Helper: store path inside a fresh temp dir (file not created)
fn temp_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("shortcuts.json");
    (temp_dir, store_path)
}

// ============================================================================
// StoreManager::new
// ============================================================================

#[test]
fn test_new_creates_backup_dir() {
    let (_temp_dir, store_path) = temp_store();

    let manager = StoreManager::new(store_path.clone()).unwrap();

    let backup_dir = store_path.parent().unwrap().join("backups");
    assert!(backup_dir.is_dir(), "Backup directory should be created");
    assert_eq!(manager.backup_dir(), backup_dir.as_path());
}

#[test]
fn test_new_creates_missing_store_dir() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("nested").join("deeper").join("shortcuts.json");

    let manager = StoreManager::new(store_path.clone());

    assert!(manager.is_ok(), "Should create parent directories");
    assert!(store_path.parent().unwrap().is_dir());
    assert!(!store_path.exists(), "Store file is only written by load/persist");
}

#[test]
fn test_symlinked_store_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let real_store = temp_dir.path().join("real.json");
    let link_store = temp_dir.path().join("shortcuts.json");
    fs::write(&real_store, r#"{"shortcuts":[]}"#).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::symlink;
        symlink(&real_store, &link_store).unwrap();

        let manager = StoreManager::new(link_store).unwrap();
        let (document, _) = manager.load().unwrap();
        assert!(document.shortcuts.is_empty());
    }

    #[cfg(not(unix))]
    {
        println!("Skipping symlink test on non-Unix system");
    }
}

// ============================================================================
// load / persist
// ============================================================================

#[test]
fn test_load_missing_store_installs_defaults() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path.clone()).unwrap();

    let (document, outcome) = manager.load().unwrap();

    assert_eq!(outcome, LoadOutcome::Defaulted(DefaultReason::Missing));
    assert_eq!(document.shortcuts, default_shortcuts());
    assert!(store_path.exists(), "Defaults should be persisted");

    // A second load reads what was persisted
    let (again, outcome) = manager.load().unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(4));
    assert_eq!(again, document);
}

#[test]
fn test_load_corrupt_store_installs_defaults() {
    let corrupt_inputs = [
        "{ not json",
        r#"{"notShortcuts": []}"#,
        r#"{"shortcuts": {"name": "X"}}"#,
        "",
    ];

    for corrupt in corrupt_inputs {
        let (_temp_dir, store_path) = temp_store();
        fs::write(&store_path, corrupt).unwrap();
        let manager = StoreManager::new(store_path.clone()).unwrap();

        let (document, outcome) = manager.load().unwrap();

        assert!(
            matches!(outcome, LoadOutcome::Defaulted(DefaultReason::Corrupt(_))),
            "Input {:?} should be treated as corrupt",
            corrupt
        );
        assert_eq!(document.shortcuts.len(), 4);

        let (reloaded, outcome) = manager.load().unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(4), "Defaults should be re-persisted");
        assert_eq!(reloaded, document);
    }
}

#[test]
fn test_load_skips_invalid_entries_and_keeps_the_rest() {
    let (_temp_dir, store_path) = temp_store();
    let original = r#"{"shortcuts":[
        {"name":"Mine","url":"https://mine.example"},
        {"name":"","url":"https://b.example"},
        {"name":"X"},
        {"name":"Docs","url":"https://docs.example"}
    ]}"#;
    fs::write(&store_path, original).unwrap();
    let manager = StoreManager::new(store_path.clone()).unwrap();

    let (document, outcome) = manager.load().unwrap();

    let kept = vec![
        Shortcut::new("Mine", "https://mine.example"),
        Shortcut::new("Docs", "https://docs.example"),
    ];
    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert_eq!(document.shortcuts, kept);

    // The cleaned collection is what's on disk now
    let (reloaded, _) = manager.load().unwrap();
    assert_eq!(reloaded.shortcuts, kept);

    // The dropped entries survive in a backup
    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), original);
}

#[test]
fn test_load_writes_normalised_urls_back() {
    let (_temp_dir, store_path) = temp_store();
    fs::write(
        &store_path,
        r#"{"shortcuts":[{"name":"Mail","url":"mail.example.com"}]}"#,
    )
    .unwrap();
    let manager = StoreManager::new(store_path.clone()).unwrap();

    let (document, outcome) = manager.load().unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(1));
    assert_eq!(document.shortcuts, vec![Shortcut::new("Mail", "https://mail.example.com")]);

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store_path).unwrap()).unwrap();
    assert_eq!(on_disk["shortcuts"][0]["url"], "https://mail.example.com");

    let exported = store_path.with_file_name("exported.json");
    manager.export_to(&exported).unwrap();
    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&exported).unwrap()).unwrap();
    assert_eq!(exported["shortcuts"][0]["url"], "https://mail.example.com");

    assert!(
        manager.list_backups().unwrap().is_empty(),
        "Adding a scheme loses nothing, so no backup"
    );
}

#[test]
fn test_load_leaves_normalised_store_alone() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path.clone()).unwrap();
    manager.load().unwrap();
    let before = fs::metadata(&store_path).unwrap().modified().unwrap();
    let content = fs::read_to_string(&store_path).unwrap();

    manager.load().unwrap();

    assert_eq!(fs::read_to_string(&store_path).unwrap(), content);
    assert_eq!(fs::metadata(&store_path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_corrupt_store_is_backed_up() {
    let (_temp_dir, store_path) = temp_store();
    fs::write(&store_path, "{ broken").unwrap();
    let manager = StoreManager::new(store_path).unwrap();

    manager.load().unwrap();

    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "{ broken");
}

#[test]
fn test_persist_then_load_round_trip() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path).unwrap();

    let document = ShortcutsDocument {
        shortcuts: vec![
            Shortcut::new("Rust", "https://www.rust-lang.org"),
            Shortcut::new("Intranet", "http://wiki.local/start"),
            Shortcut::new("Ünïcode name", "https://example.org/päth"),
        ],
    };

    manager.persist(&document).unwrap();
    let (loaded, outcome) = manager.load().unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(3));
    assert_eq!(loaded, document);
}

#[test]
fn test_persisted_layout() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path.clone()).unwrap();

    manager.persist(&ShortcutsDocument::defaults()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store_path).unwrap()).unwrap();
    assert_eq!(value["shortcuts"][0]["name"], "YouTube");
    assert_eq!(value["shortcuts"][0]["url"], "https://www.youtube.com/");
    assert_eq!(value["shortcuts"].as_array().unwrap().len(), 4);
}

// ============================================================================
// Backups
// ============================================================================

#[test]
fn test_backup_name_format() {
    let (_temp_dir, store_path) = temp_store();
    fs::write(&store_path, r#"{"shortcuts":[]}"#).unwrap();
    let manager = StoreManager::new(store_path).unwrap();

    let backup_path = manager.create_timestamped_backup().unwrap().unwrap();

    assert_eq!(backup_path.parent().unwrap(), manager.backup_dir());

    // "shortcuts.json.2025-10-10_221500" -> "2025-10-10_221500"
    let filename = backup_path.file_name().unwrap().to_str().unwrap();
    let timestamp = filename.strip_prefix("shortcuts.json.").unwrap();
    let parsed = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d_%H%M%S");
    assert!(parsed.is_ok(), "Timestamp should be valid chrono format: {}", timestamp);
}

#[test]
fn test_backup_without_store_is_none() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path).unwrap();

    assert!(manager.create_timestamped_backup().unwrap().is_none());
}

#[test]
fn test_backups_in_same_second_dont_overwrite() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path.clone()).unwrap();

    fs::write(&store_path, "first").unwrap();
    let first = manager.create_timestamped_backup().unwrap().unwrap();
    fs::write(&store_path, "second").unwrap();
    let second = manager.create_timestamped_backup().unwrap().unwrap();

    assert_ne!(first, second);
    assert_eq!(fs::read_to_string(&first).unwrap(), "first");
    assert_eq!(fs::read_to_string(&second).unwrap(), "second");

    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0], second, "Newest backup should be listed first");
}

#[test]
fn test_restore_backup() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path).unwrap();

    manager.load().unwrap();
    let backup = manager.create_timestamped_backup().unwrap().unwrap();
    manager
        .persist(&ShortcutsDocument {
            shortcuts: vec![Shortcut::new("Only", "https://only.example")],
        })
        .unwrap();

    let restored = manager.restore_backup(&backup).unwrap();

    assert_eq!(restored.shortcuts, default_shortcuts());
    let (loaded, _) = manager.load().unwrap();
    assert_eq!(loaded.shortcuts, default_shortcuts());
}

#[test]
fn test_restore_rejects_invalid_backup() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path).unwrap();
    manager.load().unwrap();

    let bogus = manager.backup_dir().join("shortcuts.json.bogus");
    fs::write(&bogus, "not json").unwrap();

    assert!(manager.restore_backup(&bogus).is_err());
    let (loaded, _) = manager.load().unwrap();
    assert_eq!(loaded.shortcuts, default_shortcuts(), "Store should be unchanged");
}

#[test]
fn test_reset_restores_defaults_with_backup() {
    let (_temp_dir, store_path) = temp_store();
    let manager = StoreManager::new(store_path).unwrap();
    manager
        .persist(&ShortcutsDocument {
            shortcuts: vec![Shortcut::new("Mine", "https://mine.example")],
        })
        .unwrap();

    let document = manager.reset().unwrap();

    assert_eq!(document.shortcuts, default_shortcuts());
    assert_eq!(manager.list_backups().unwrap().len(), 1);
}
