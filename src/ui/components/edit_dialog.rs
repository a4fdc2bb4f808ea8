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

//! Edit dialog for a single shortcut
//!
//! Modal window pre-filled with the shortcut's name and URL, with Save,
//! Delete and Cancel. A rejected Save keeps the dialog open so the input
//! can be fixed.

use gtk4::{
    glib, prelude::*, Align, Box as GtkBox, Button, Entry, Grid, Label, Orientation, Window,
};
use std::{cell::Cell, rc::Rc};

use crate::core::Shortcut;
use crate::ui::alerts::report_error;
use crate::ui::Controller;

/// How the dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    Saved,
    Deleted,
    Cancelled,
}

/// Modal dialog editing the shortcut the Controller has open
pub struct EditDialog {
    dialog_window: Window,
    name_entry: Entry,
}

impl EditDialog {
    /// Builds the dialog for `shortcut`
    ///
    /// The Controller must already be editing it (`Controller::begin_edit`).
    /// `on_closed` runs exactly once, after the Controller has been updated.
    pub fn new(
        parent: &Window,
        controller: Rc<Controller>,
        shortcut: &Shortcut,
        on_closed: impl Fn(DialogResponse) + 'static,
    ) -> Self {
        let dialog_window = Window::builder()
            .title("Edit Shortcut")
            .modal(true)
            .transient_for(parent)
            .default_width(420)
            .resizable(false)
            .build();

        let vbox = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let grid = Grid::builder().row_spacing(8).column_spacing(12).build();

        let name_label = Label::builder().label("Name").halign(Align::End).build();
        let name_entry = Entry::builder().text(shortcut.name.as_str()).hexpand(true).build();

        let url_label = Label::builder().label("URL").halign(Align::End).build();
        let url_entry = Entry::builder()
            .text(shortcut.url.as_str())
            .hexpand(true)
            .input_purpose(gtk4::InputPurpose::Url)
            .build();

        grid.attach(&name_label, 0, 0, 1, 1);
        grid.attach(&name_entry, 1, 0, 1, 1);
        grid.attach(&url_label, 0, 1, 1, 1);
        grid.attach(&url_entry, 1, 1, 1, 1);
        vbox.append(&grid);

        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(Align::End)
            .build();

        let delete_button = Button::builder().label("Delete").build();
        delete_button.add_css_class("destructive-action");
        let cancel_button = Button::builder().label("Cancel").build();
        let save_button = Button::builder().label("Save").build();
        save_button.add_css_class("suggested-action");

        button_box.append(&delete_button);
        button_box.append(&cancel_button);
        button_box.append(&save_button);
        vbox.append(&button_box);

        dialog_window.set_child(Some(&vbox));
        dialog_window.set_default_widget(Some(&save_button));
        name_entry.set_activates_default(true);
        url_entry.set_activates_default(true);

        let on_closed: Rc<dyn Fn(DialogResponse)> = Rc::new(on_closed);
        // Set once a button has handled the close; the X button means Cancel
        let responded = Rc::new(Cell::new(false));

        // Save
        {
            let controller = controller.clone();
            let window = dialog_window.clone();
            let name_entry = name_entry.clone();
            let url_entry = url_entry.clone();
            let on_closed = on_closed.clone();
            let responded = responded.clone();
            save_button.connect_clicked(move |_| {
                match controller.save_edit(&name_entry.text(), &url_entry.text()) {
                    Ok(()) => {
                        responded.set(true);
                        window.close();
                        on_closed(DialogResponse::Saved);
                    }
                    Err(e) if e.is_user_facing() => {
                        report_error(Some(&window), "Could not save shortcut", &e, true);
                    }
                    Err(e) => {
                        report_error(Some(&window), "Could not save shortcut", &e, false);
                        controller.cancel_edit();
                        responded.set(true);
                        window.close();
                        on_closed(DialogResponse::Cancelled);
                    }
                }
            });
        }

        // Delete
        {
            let controller = controller.clone();
            let window = dialog_window.clone();
            let on_closed = on_closed.clone();
            let responded = responded.clone();
            delete_button.connect_clicked(move |_| {
                let response = match controller.delete_editing() {
                    Ok(removed) => {
                        tracing::debug!("Deleted {} from edit dialog", removed);
                        DialogResponse::Deleted
                    }
                    Err(e) => {
                        report_error(Some(&window), "Could not delete shortcut", &e, false);
                        controller.cancel_edit();
                        DialogResponse::Cancelled
                    }
                };
                responded.set(true);
                window.close();
                on_closed(response);
            });
        }

        // Cancel
        {
            let window = dialog_window.clone();
            cancel_button.connect_clicked(move |_| {
                window.close();
            });
        }

        // Window close (Cancel button or X) without a response
        {
            dialog_window.connect_close_request(move |_| {
                if !responded.replace(true) {
                    controller.cancel_edit();
                    on_closed(DialogResponse::Cancelled);
                }
                glib::Propagation::Proceed
            });
        }

        Self {
            dialog_window,
            name_entry,
        }
    }

    /// Presents the dialog with the name field focused
    pub fn present(&self) {
        self.dialog_window.present();
        self.name_entry.grab_focus();
    }
}
