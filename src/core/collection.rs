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

//! src/core/collection.rs
//!
//! Ordered shortcut collection with stable ids
//!
//! `ShortcutList` is the in-memory model behind the tile grid. Order is
//! user-significant and is exactly the order written to the store.
//!
//! Every mutation is bounds-checked. Positional operations (`edit`, `delete`,
//! `reorder`, `swap`) fail with `IndexOutOfBounds` instead of clamping, and
//! id-based lookups fail with `UnknownId` once the entry is gone.

use thiserror::Error;

use crate::core::types::{Shortcut, ShortcutId};
use crate::core::validator::{validate_shortcut, ValidationError};

/// Errors from collection mutations
#[derive(Debug, Error, PartialEq)]
pub enum ShortcutError {
    /// Input failed validation (user-facing)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Position does not exist in the collection
    #[error("Invalid shortcut index {index} (collection has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Id no longer refers to an entry
    #[error("Shortcut {0} no longer exists")]
    UnknownId(ShortcutId),

    /// Save requested while no edit dialog is open
    #[error("No shortcut is being edited")]
    NotEditing,
}

impl ShortcutError {
    /// Validation errors are shown to the user; the rest are only logged
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ShortcutError::Validation(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: ShortcutId,
    shortcut: Shortcut,
}

/// Ordered list of shortcuts, each tagged with a `ShortcutId`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShortcutList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ShortcutList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from already-validated shortcuts, assigning fresh ids
    pub fn from_shortcuts(shortcuts: Vec<Shortcut>) -> Self {
        let mut list = Self::new();
        for shortcut in shortcuts {
            list.push(shortcut);
        }
        list
    }

    fn allocate_id(&mut self) -> ShortcutId {
        self.next_id += 1;
        ShortcutId::from_raw(self.next_id)
    }

    fn push(&mut self, shortcut: Shortcut) -> ShortcutId {
        let id = self.allocate_id();
        self.entries.push(Entry { id, shortcut });
        id
    }

    fn check_index(&self, index: usize) -> Result<(), ShortcutError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ShortcutError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Number of shortcuts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no shortcuts
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shortcut at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Shortcut> {
        self.entries.get(index).map(|e| &e.shortcut)
    }

    /// Shortcut with the given id, if it still exists
    pub fn get_by_id(&self, id: ShortcutId) -> Option<&Shortcut> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.shortcut)
    }

    /// Id of the entry at `index`
    pub fn id_at(&self, index: usize) -> Option<ShortcutId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current position of `id`
    pub fn position_of(&self, id: ShortcutId) -> Result<usize, ShortcutError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(ShortcutError::UnknownId(id))
    }

    /// Iterates `(id, shortcut)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ShortcutId, &Shortcut)> {
        self.entries.iter().map(|e| (e.id, &e.shortcut))
    }

    /// Snapshot of the shortcuts in order, without ids (what gets persisted)
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        self.entries.iter().map(|e| e.shortcut.clone()).collect()
    }

    /// Validates and appends a shortcut
    ///
    /// # Errors
    ///
    /// `ShortcutError::Validation` if the name or URL is rejected; the list
    /// is left unchanged.
    pub fn add(&mut self, name: &str, url: &str) -> Result<ShortcutId, ShortcutError> {
        let shortcut = validate_shortcut(name, url)?;
        Ok(self.push(shortcut))
    }

    /// Validates and replaces the shortcut at `index`, keeping its id
    pub fn edit(&mut self, index: usize, name: &str, url: &str) -> Result<(), ShortcutError> {
        self.check_index(index)?;
        let shortcut = validate_shortcut(name, url)?;
        self.entries[index].shortcut = shortcut;
        Ok(())
    }

    /// Removes and returns the shortcut at `index`
    pub fn delete(&mut self, index: usize) -> Result<Shortcut, ShortcutError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index).shortcut)
    }

    /// Moves the shortcut at `from` so that it ends up at position `to`
    ///
    /// `[A, B, C]` with `reorder(0, 2)` becomes `[B, C, A]`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ShortcutError> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from != to {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
        }
        Ok(())
    }

    /// Exchanges the shortcuts at two positions
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ShortcutError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.entries.swap(a, b);
        Ok(())
    }

    /// `delete` addressed by id
    pub fn delete_by_id(&mut self, id: ShortcutId) -> Result<Shortcut, ShortcutError> {
        let index = self.position_of(id)?;
        self.delete(index)
    }

    /// Moves `source` to wherever `target` currently sits
    pub fn move_onto(&mut self, source: ShortcutId, target: ShortcutId) -> Result<(), ShortcutError> {
        let from = self.position_of(source)?;
        let to = self.position_of(target)?;
        self.reorder(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn abc() -> ShortcutList {
        ShortcutList::from_shortcuts(vec![
            Shortcut::new("A", "https://a.example"),
            Shortcut::new("B", "https://b.example"),
            Shortcut::new("C", "https://c.example"),
        ])
    }

    fn names(list: &ShortcutList) -> Vec<String> {
        list.iter().map(|(_, s)| s.name.clone()).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = abc();
        let added = list.add("D", "d.example").unwrap();

        let ids: HashSet<_> = list.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(list.id_at(3), Some(added));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = abc();
        let removed = list.id_at(2).unwrap();
        list.delete(2).unwrap();
        let added = list.add("D", "d.example").unwrap();

        assert_ne!(added, removed);
        let ids: HashSet<_> = list.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&removed));
    }

    #[test]
    fn test_edit_keeps_id() {
        let mut list = abc();
        let id = list.id_at(1).unwrap();

        list.edit(1, "Bee", "bee.example").unwrap();

        assert_eq!(list.id_at(1), Some(id));
        assert_eq!(list.get(1).unwrap().url, "https://bee.example");
    }

    #[test]
    fn test_position_follows_moves() {
        let mut list = abc();
        let a = list.id_at(0).unwrap();

        list.reorder(0, 2).unwrap();

        assert_eq!(list.position_of(a), Ok(2));
        assert_eq!(names(&list), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_deleted_id_is_unknown() {
        let mut list = abc();
        let b = list.id_at(1).unwrap();

        list.delete_by_id(b).unwrap();

        assert_eq!(list.position_of(b), Err(ShortcutError::UnknownId(b)));
        assert!(list.get_by_id(b).is_none());
    }
}
