// Copyright 2025 bakri (tidynest@proton.me)
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

//! New-tab shortcut manager
//!
//! A personal start page: a grid of website shortcuts you can add, edit,
//! delete and reorder by drag-and-drop, backed by a JSON file and usable
//! from both a GTK4 window and the command line.
//!
//! # Features
//!
//! - **CRUD Operations:** Add, edit, delete, move and swap shortcuts
//! - **Drag-and-Drop:** Reorder tiles directly in the grid
//! - **Import/Export:** Copy the whole collection to and from a JSON file
//! - **Automatic Backups:** Timestamped backups before every bulk replace
//! - **Self-Healing Store:** A missing or corrupt store falls back to defaults
//! - **Atomic Operations:** Temp-file-then-rename writes, never a half-written store
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, validation, collection, modes, view model)
//! - **`config`:** File operations (loading, atomic writes, import/export, backups)
//! - **`ui`:** GTK4 GUI components (MVC pattern) and the shared Controller
//!
//! # Examples
//!
//! ## Working with the collection
//!
//! ```
//! use newtab_shortcuts::core::ShortcutList;
//!
//! let mut list = ShortcutList::new();
//! list.add("GitHub", "github.com")?;
//! list.add("Docs", "https://docs.rs")?;
//! list.swap(0, 1)?;
//!
//! assert_eq!(list.get(1).map(|s| s.url.as_str()), Some("https://github.com"));
//! # Ok::<(), newtab_shortcuts::core::ShortcutError>(())
//! ```
//!
//! ## Persisting changes
//!
//! ```no_run
//! use newtab_shortcuts::ui::Controller;
//! use std::path::PathBuf;
//!
//! let controller = Controller::new(PathBuf::from("/tmp/shortcuts.json"))?;
//! controller.load()?;
//! controller.add_shortcut("Mail", "mail.example.com")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use newtab_shortcuts::ui::App;
//! use std::path::PathBuf;
//!
//! let app = App::new(PathBuf::from("/tmp/shortcuts.json"))?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), newtab_shortcuts::config::StoreError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Shortcut, ShortcutId, ShortcutList};
