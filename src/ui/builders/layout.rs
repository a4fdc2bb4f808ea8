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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::core::GridView;
use crate::ui::{
    components::{AddForm, ShortcutGrid},
    Controller,
};
use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation};
use std::rc::Rc;

/// Row of page-level buttons above the grid
pub struct Toolbar {
    pub widget: GtkBox,
    pub import_button: Button,
    pub export_button: Button,
    pub edit_button: Button,
    pub new_button: Button,
}

impl Toolbar {
    fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(8)
            .halign(Align::End)
            .margin_start(24)
            .margin_end(24)
            .margin_top(12)
            .build();
        widget.add_css_class("toolbar");

        let import_button = Button::builder()
            .label("Import")
            .action_name("app.import")
            .visible(false)
            .build();

        let export_button = Button::builder()
            .label("Export")
            .action_name("app.export")
            .visible(false)
            .build();

        let edit_button = Button::builder().label("Edit").build();

        let new_button = Button::builder().label("New").build();
        new_button.add_css_class("suggested-action");

        widget.append(&import_button);
        widget.append(&export_button);
        widget.append(&edit_button);
        widget.append(&new_button);

        Self {
            widget,
            import_button,
            export_button,
            edit_button,
            new_button,
        }
    }

    /// Updates labels and visibility to match the modes in `view`
    pub fn apply(&self, view: &GridView) {
        self.edit_button.set_label(view.edit_button_label);
        self.new_button.set_label(view.add_button_label);
        self.import_button.set_visible(view.show_import_export);
        self.export_button.set_visible(view.show_import_export);
    }
}

/// Widgets making up the main window
pub struct MainLayout {
    pub root: GtkBox,
    pub toolbar: Toolbar,
    pub add_form: Rc<AddForm>,
    pub grid: Rc<ShortcutGrid>,
}

impl MainLayout {
    /// Re-renders everything from a fresh view model
    pub fn render(&self, view: &GridView) {
        self.toolbar.apply(view);
        self.add_form.apply(view);
        self.grid.render(view);
    }
}

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Toolbar (Import, Export, Edit/Done, New/Cancel)
/// - Add form (revealed in add mode)
/// - Shortcut tile grid
pub fn build_main_layout(controller: Rc<Controller>) -> MainLayout {
    let root = GtkBox::new(Orientation::Vertical, 0);

    let toolbar = Toolbar::new();
    root.append(&toolbar.widget);

    let add_form = Rc::new(AddForm::new(controller.clone()));
    root.append(add_form.widget());

    let grid = Rc::new(ShortcutGrid::new(controller));
    root.append(grid.widget());

    MainLayout {
        root,
        toolbar,
        add_form,
        grid,
    }
}
