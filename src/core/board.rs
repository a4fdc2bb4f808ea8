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

//! Shortcut board state container
//!
//! `Board` owns everything the tile grid shows: the collection, the mode
//! flags, the shortcut whose edit dialog is open, and the drag in flight.
//! It knows nothing about storage; the Controller persists after each
//! successful mutation and restores a snapshot if that fails.
//!
//! # Example
//!
//! ```
//! use newtab_shortcuts::core::Board;
//!
//! let mut board = Board::with_defaults();
//! board.toggle_add_mode();
//! board.add("Mail", "mail.example.com")?;
//!
//! assert_eq!(board.list().len(), 5);
//! assert!(!board.modes().is_adding());
//! # Ok::<(), newtab_shortcuts::core::ShortcutError>(())
//! ```

use crate::core::collection::{ShortcutError, ShortcutList};
use crate::core::drag::DragSession;
use crate::core::modes::Modes;
use crate::core::types::{default_shortcuts, Shortcut, ShortcutId};
use crate::core::view::{build_view, GridView};

/// Owned state behind the tile grid
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    list: ShortcutList,
    modes: Modes,
    editing: Option<ShortcutId>,
    drag: DragSession,
}

impl Board {
    /// Creates a board around an existing list, with both modes off
    pub fn new(list: ShortcutList) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    /// Board holding the four default shortcuts
    pub fn with_defaults() -> Self {
        Self::new(ShortcutList::from_shortcuts(default_shortcuts()))
    }

    pub fn list(&self) -> &ShortcutList {
        &self.list
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    /// Shortcut whose edit dialog is open
    pub fn editing(&self) -> Option<ShortcutId> {
        self.editing
    }

    /// Tile currently being dragged
    pub fn drag_source(&self) -> Option<ShortcutId> {
        self.drag.source()
    }

    /// Swaps in a freshly loaded list
    ///
    /// Ids from the old list are meaningless afterwards, so the open edit
    /// dialog and any drag in flight are dropped. Modes are kept.
    pub fn replace_list(&mut self, list: ShortcutList) {
        self.list = list;
        self.editing = None;
        self.drag.end();
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Appends a validated shortcut and leaves add mode
    pub fn add(&mut self, name: &str, url: &str) -> Result<ShortcutId, ShortcutError> {
        let id = self.list.add(name, url)?;
        self.modes.set_add(false);
        Ok(id)
    }

    /// Replaces the shortcut at `index` and closes the edit dialog
    pub fn edit(&mut self, index: usize, name: &str, url: &str) -> Result<(), ShortcutError> {
        self.list.edit(index, name, url)?;
        self.editing = None;
        Ok(())
    }

    /// Removes the shortcut at `index`
    pub fn delete(&mut self, index: usize) -> Result<Shortcut, ShortcutError> {
        let id = self.list.id_at(index);
        let removed = self.list.delete(index)?;
        if self.editing.is_some() && self.editing == id {
            self.editing = None;
        }
        Ok(removed)
    }

    /// Removes the shortcut with `id`
    pub fn delete_by_id(&mut self, id: ShortcutId) -> Result<Shortcut, ShortcutError> {
        let index = self.list.position_of(id)?;
        self.delete(index)
    }

    /// Moves the shortcut at `from` to position `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ShortcutError> {
        self.list.reorder(from, to)
    }

    /// Exchanges two shortcuts
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ShortcutError> {
        self.list.swap(a, b)
    }

    // ------------------------------------------------------------------
    // Edit dialog
    // ------------------------------------------------------------------

    /// Opens the edit dialog for `id` and returns the values to pre-fill
    ///
    /// Both modes are switched off while the dialog is open.
    pub fn begin_edit(&mut self, id: ShortcutId) -> Result<Shortcut, ShortcutError> {
        let shortcut = self
            .list
            .get_by_id(id)
            .cloned()
            .ok_or(ShortcutError::UnknownId(id))?;

        self.editing = Some(id);
        self.modes.set_add(false);
        self.modes.set_edit(false);
        Ok(shortcut)
    }

    /// Saves the open edit dialog
    pub fn save_edit(&mut self, name: &str, url: &str) -> Result<(), ShortcutError> {
        let id = self.editing.ok_or(ShortcutError::NotEditing)?;
        let index = self.list.position_of(id)?;
        self.edit(index, name, url)
    }

    /// Closes the edit dialog without changes
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.modes.toggle_edit()
    }

    pub fn toggle_add_mode(&mut self) -> bool {
        self.modes.toggle_add()
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    pub fn drag_start(&mut self, source: ShortcutId) {
        self.drag.start(source);
    }

    /// Applies a drop onto `target`
    ///
    /// Returns `Ok(true)` when the list changed. The session stays open
    /// until `drag_end`.
    pub fn drop_on(&mut self, target: ShortcutId) -> Result<bool, ShortcutError> {
        match self.drag.drop_on(target) {
            Some(mv) => {
                self.list.move_onto(mv.source, mv.target)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Full view model for the current state
    pub fn view(&self) -> GridView {
        build_view(&self.list, self.modes)
    }
}
