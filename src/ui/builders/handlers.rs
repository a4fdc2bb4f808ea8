//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Edit/Done and New/Cancel buttons
//! - Escape leaves the active mode
//! - Tile changes and edit requests from the grid
//! - The add form

use gtk4::{gdk, glib, prelude::*, ApplicationWindow, EventControllerKey};
use std::rc::Rc;

use crate::ui::builders::MainLayout;
use crate::ui::components::EditDialog;
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// `refresh` re-renders the whole page from the Controller's current view.
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    layout: Rc<MainLayout>,
    refresh: Rc<dyn Fn()>,
) {
    // ============================================================================
    // Mode buttons
    // ============================================================================
    {
        let controller = controller.clone();
        let refresh = refresh.clone();
        layout.toolbar.edit_button.connect_clicked(move |_| {
            let editing = controller.toggle_edit_mode();
            tracing::debug!("Edit mode {}", if editing { "on" } else { "off" });
            refresh();
        });
    }

    {
        let controller = controller.clone();
        let refresh = refresh.clone();
        layout.toolbar.new_button.connect_clicked(move |_| {
            let adding = controller.toggle_add_mode();
            tracing::debug!("Add mode {}", if adding { "on" } else { "off" });
            refresh();
        });
    }

    // ============================================================================
    // Keyboard: Escape leaves edit or add mode
    // ============================================================================
    {
        let key_controller = EventControllerKey::new();
        let controller = controller.clone();
        let refresh = refresh.clone();

        key_controller.connect_key_pressed(move |_, key, _code, _modifier| match key {
            gdk::Key::Escape => {
                let modes = controller.modes();
                if modes.is_editing() {
                    controller.toggle_edit_mode();
                } else if modes.is_adding() {
                    controller.toggle_add_mode();
                } else {
                    return glib::Propagation::Proceed;
                }
                refresh();
                glib::Propagation::Stop
            }
            _ => glib::Propagation::Proceed,
        });

        window.add_controller(key_controller);
    }

    // ============================================================================
    // Grid and add form
    // ============================================================================
    {
        let refresh = refresh.clone();
        layout.grid.connect_changed(move || refresh());
    }

    {
        let refresh = refresh.clone();
        layout.add_form.connect_added(move || refresh());
    }

    // ============================================================================
    // Edit dialog
    // ============================================================================
    let window_for_edit = window.clone();
    layout.grid.connect_edit_requested(move |id| {
        let shortcut = match controller.begin_edit(id) {
            Ok(shortcut) => shortcut,
            Err(e) => {
                tracing::error!("Cannot edit shortcut {}: {}", id, e);
                return;
            }
        };

        // begin_edit switched both modes off; the tile that was clicked is
        // about to be replaced, so re-render after this handler returns
        {
            let refresh = refresh.clone();
            glib::idle_add_local_once(move || refresh());
        }

        let refresh = refresh.clone();
        let dialog = EditDialog::new(
            window_for_edit.upcast_ref::<gtk4::Window>(),
            controller.clone(),
            &shortcut,
            move |response| {
                tracing::debug!("Edit dialog closed: {:?}", response);
                refresh();
            },
        );
        dialog.present();
    });
}
