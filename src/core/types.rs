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

//! src/core/types.rs
//!
//! Core type definitions for shortcut management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Shortcut`: A named link rendered as one tile
//! - `ShortcutId`: Stable in-memory identity for a tile
//! - `ShortcutsDocument`: The JSON document persisted to the store
//!
//! The persisted shape is `{ "shortcuts": [ { "name", "url" }, ... ] }`.
//! Ids are never written to disk; they are handed out when a collection
//! is loaded and when entries are added.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-defined link shown as a tile
///
/// Both fields are expected to have passed validation
/// (`core::validator::validate_shortcut`) before they reach a collection.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Shortcut {
    /// Label under the tile
    pub name: String,

    /// Absolute http(s) URL the tile opens
    pub url: String,
}

impl Shortcut {
    /// Creates a shortcut without validating it
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.name, self.url)
    }
}

/// Stable identity for one entry of a loaded collection
///
/// Positions shift whenever the list is mutated, so anything that outlives a
/// single gesture (a delete button, an open edit dialog, a drag in flight)
/// holds an id and resolves it to a position when it acts.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShortcutId(u64);

impl ShortcutId {
    /// Wraps a raw id (as carried through a GTK drag payload)
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, for transport through untyped channels
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The JSON document kept in the store and written by export
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShortcutsDocument {
    /// Ordered shortcuts; order is display order
    pub shortcuts: Vec<Shortcut>,
}

impl ShortcutsDocument {
    /// The four shortcuts installed when the store is missing or corrupt
    pub fn defaults() -> Self {
        Self {
            shortcuts: default_shortcuts(),
        }
    }
}

/// Default collection: YouTube, Google, GitHub, DeepSeek
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("YouTube", "https://www.youtube.com/"),
        Shortcut::new("Google", "https://www.google.com"),
        Shortcut::new("GitHub", "https://github.com"),
        Shortcut::new("DeepSeek", "https://chat.deepseek.com/"),
    ]
}
