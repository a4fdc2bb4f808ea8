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

//! Edit-mode and add-mode flags
//!
//! The two modes are mutually exclusive: switching one on switches the other
//! off. Switching a mode off leaves the other alone.

/// UI mode flags for the tile grid
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Modes {
    edit: bool,
    add: bool,
}

impl Modes {
    /// Both modes off
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit mode shows per-tile delete/edit controls and import/export
    pub fn is_editing(&self) -> bool {
        self.edit
    }

    /// Add mode shows the new-shortcut form
    pub fn is_adding(&self) -> bool {
        self.add
    }

    /// Flips edit mode; returns the new state
    pub fn toggle_edit(&mut self) -> bool {
        self.set_edit(!self.edit);
        self.edit
    }

    /// Flips add mode; returns the new state
    pub fn toggle_add(&mut self) -> bool {
        self.set_add(!self.add);
        self.add
    }

    pub fn set_edit(&mut self, on: bool) {
        self.edit = on;
        if on {
            self.add = false;
        }
    }

    pub fn set_add(&mut self, on: bool) {
        self.add = on;
        if on {
            self.edit = false;
        }
    }

    /// Label for the edit toggle button
    pub fn edit_button_label(&self) -> &'static str {
        if self.edit {
            "Done"
        } else {
            "Edit"
        }
    }

    /// Label for the add toggle button
    pub fn add_button_label(&self) -> &'static str {
        if self.add {
            "Cancel"
        } else {
            "New"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_exclusive() {
        let mut modes = Modes::new();

        assert!(modes.toggle_add());
        assert!(modes.toggle_edit());
        assert!(!modes.is_adding(), "Entering edit mode should leave add mode");

        assert!(modes.toggle_add());
        assert!(!modes.is_editing(), "Entering add mode should leave edit mode");
    }

    #[test]
    fn test_turning_off_leaves_other_mode() {
        let mut modes = Modes::new();
        modes.set_edit(true);
        modes.set_add(false);

        assert!(modes.is_editing());
    }

    #[test]
    fn test_button_labels() {
        let mut modes = Modes::new();
        assert_eq!(modes.edit_button_label(), "Edit");
        assert_eq!(modes.add_button_label(), "New");

        modes.toggle_edit();
        assert_eq!(modes.edit_button_label(), "Done");

        modes.toggle_add();
        assert_eq!(modes.add_button_label(), "Cancel");
        assert_eq!(modes.edit_button_label(), "Edit");
    }
}
