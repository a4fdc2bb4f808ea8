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

//! File system watcher for live store monitoring
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! Zero CPU overhead when the store is unchanged; the GUI polls
//! `check_for_changes` from a main-loop timer.
//!
//! Atomic writes replace the store file by renaming a temp file over it, which
//! would silently end a watch on the file itself. The watcher therefore
//! watches the store's directory and filters for events on the store path.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

/// Watches the shortcut store for modifications
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    store_path: PathBuf,
}

impl FileWatcher {
    pub fn new(store_path: &Path) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let watch_dir = store_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            store_path: store_path.to_path_buf(),
        })
    }

    /// Drains pending events; true if any touched the store (non-blocking)
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            match event_result {
                Ok(event) if self.is_store_event(&event) => changed = true,
                Ok(_) => {}
                Err(e) => tracing::warn!("Store watcher error: {}", e),
            }
        }
        changed
    }

    fn is_store_event(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| p.file_name() == self.store_path.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, thread, time::Duration};
    use tempfile::TempDir;

    /// Polls for up to a second; inotify delivery is asynchronous
    fn wait_for_change(watcher: &FileWatcher) -> bool {
        for _ in 0..20 {
            if watcher.check_for_changes() {
                return true;
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }

    #[test]
    fn test_detects_store_write() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("shortcuts.json");
        fs::write(&store_path, "{}").unwrap();

        let watcher = FileWatcher::new(&store_path).unwrap();
        fs::write(&store_path, r#"{"shortcuts":[]}"#).unwrap();

        assert!(wait_for_change(&watcher));
    }

    #[test]
    fn test_ignores_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("shortcuts.json");
        fs::write(&store_path, "{}").unwrap();

        let watcher = FileWatcher::new(&store_path).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();

        assert!(!wait_for_change(&watcher));
    }
}
