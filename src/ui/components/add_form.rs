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

//! Add-shortcut form component
//!
//! A name entry, a URL entry and an Add button, only shown in add mode.
//! Enter in either entry submits once both fields have content.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Entry, Orientation, Revealer};
use std::{cell::RefCell, rc::Rc};

use crate::core::{GridView, ShortcutId};
use crate::ui::alerts::report_error;
use crate::ui::controller::ControllerError;
use crate::ui::Controller;

/// Inline form for new shortcuts
pub struct AddForm {
    /// Root widget (slides in when add mode turns on)
    widget: Revealer,
    name_entry: Entry,
    url_entry: Entry,
    on_added: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl AddForm {
    pub fn new(controller: Rc<Controller>) -> Self {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(8)
            .halign(Align::Center)
            .margin_top(8)
            .margin_bottom(8)
            .build();
        row.add_css_class("add-form");

        let name_entry = Entry::builder()
            .placeholder_text("Name")
            .width_chars(16)
            .build();

        let url_entry = Entry::builder()
            .placeholder_text("URL")
            .width_chars(32)
            .input_purpose(gtk4::InputPurpose::Url)
            .build();

        let add_button = Button::builder().label("Add").build();
        add_button.add_css_class("suggested-action");

        row.append(&name_entry);
        row.append(&url_entry);
        row.append(&add_button);

        let revealer = Revealer::builder()
            .transition_type(gtk4::RevealerTransitionType::SlideDown)
            .reveal_child(false)
            .child(&row)
            .build();

        let on_added: Rc<RefCell<Option<Rc<dyn Fn()>>>> = Rc::new(RefCell::new(None));

        // Add button: always submits, empty fields are reported
        {
            let controller = controller.clone();
            let name_entry = name_entry.clone();
            let url_entry = url_entry.clone();
            let on_added = on_added.clone();
            add_button.connect_clicked(move |button| {
                let result = controller.add_shortcut(&name_entry.text(), &url_entry.text());
                finish_submit(
                    button.upcast_ref::<gtk4::Widget>(),
                    result,
                    &name_entry,
                    &url_entry,
                    &on_added,
                );
            });
        }

        // Enter: only submits when both fields are filled
        for entry in [&name_entry, &url_entry] {
            let controller = controller.clone();
            let name_entry = name_entry.clone();
            let url_entry = url_entry.clone();
            let on_added = on_added.clone();
            entry.connect_activate(move |entry| {
                if let Some(result) =
                    controller.submit_add_on_enter(&name_entry.text(), &url_entry.text())
                {
                    finish_submit(
                        entry.upcast_ref::<gtk4::Widget>(),
                        result,
                        &name_entry,
                        &url_entry,
                        &on_added,
                    );
                }
            });
        }

        Self {
            widget: revealer,
            name_entry,
            url_entry,
            on_added,
        }
    }

    /// Returns the root widget for adding to containers
    pub fn widget(&self) -> &Revealer {
        &self.widget
    }

    /// Registers the callback run after a shortcut was added
    pub fn connect_added(&self, callback: impl Fn() + 'static) {
        *self.on_added.borrow_mut() = Some(Rc::new(callback));
    }

    /// Shows or hides the form to match add mode
    ///
    /// Opening the form focuses the name field; closing it discards
    /// whatever was typed.
    pub fn apply(&self, view: &GridView) {
        let was_open = self.widget.reveals_child();
        self.widget.set_reveal_child(view.add_mode);

        if view.add_mode && !was_open {
            self.name_entry.grab_focus();
        } else if !view.add_mode && was_open {
            self.name_entry.set_text("");
            self.url_entry.set_text("");
        }
    }
}

fn finish_submit(
    origin: &gtk4::Widget,
    result: Result<ShortcutId, ControllerError>,
    name_entry: &Entry,
    url_entry: &Entry,
    on_added: &Rc<RefCell<Option<Rc<dyn Fn()>>>>,
) {
    match result {
        Ok(_) => {
            name_entry.set_text("");
            url_entry.set_text("");
            if let Some(callback) = on_added.borrow().clone() {
                callback();
            }
        }
        Err(e) => {
            let window = origin.root().and_downcast::<gtk4::Window>();
            report_error(window.as_ref(), "Could not add shortcut", &e, e.is_user_facing());
        }
    }
}
