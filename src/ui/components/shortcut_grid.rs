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

//! Shortcut tile grid component
//!
//! Displays every shortcut as a tile (favicon + name) in a wrapping grid.
//! The grid is rebuilt from scratch on every `render`, which also
//! re-registers the click, delete, edit and drag handlers of each tile.

use gtk4::{
    gdk, gio, glib, prelude::*, Align, Box as GtkBox, Button, DragSource, DropTarget, FlowBox,
    GestureClick, Image, Label, Orientation, ScrolledWindow, SelectionMode, UriLauncher,
    WidgetPaintable,
};
use std::{cell::Cell, cell::RefCell, rc::Rc};

use crate::core::{GridView, ShortcutId, TileView};
use crate::ui::Controller;

type ChangedCallback = Rc<dyn Fn()>;
type EditCallback = Rc<dyn Fn(ShortcutId)>;

/// Displays the shortcut tiles
pub struct ShortcutGrid {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// Flow box holding one child per tile
    flow_box: FlowBox,
    /// Controller reference for mutations
    controller: Rc<Controller>,
    /// Called (from an idle callback) after a tile changed the collection
    on_changed: RefCell<Option<ChangedCallback>>,
    /// Called when a tile asks for the edit dialog
    on_edit_requested: RefCell<Option<EditCallback>>,
}

impl ShortcutGrid {
    /// Creates an empty grid; call `render` to populate it
    pub fn new(controller: Rc<Controller>) -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let flow_box = FlowBox::builder()
            .selection_mode(SelectionMode::None)
            .homogeneous(true)
            .max_children_per_line(8)
            .min_children_per_line(2)
            .column_spacing(16)
            .row_spacing(16)
            .valign(Align::Start)
            .margin_start(24)
            .margin_end(24)
            .margin_top(12)
            .margin_bottom(24)
            .build();
        flow_box.add_css_class("shortcut-grid");

        scrolled_window.set_child(Some(&flow_box));

        Self {
            widget: scrolled_window,
            flow_box,
            controller,
            on_changed: RefCell::new(None),
            on_edit_requested: RefCell::new(None),
        }
    }

    /// Returns the root widget for adding to containers
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Registers the callback run after a tile mutates the collection
    pub fn connect_changed(&self, callback: impl Fn() + 'static) {
        *self.on_changed.borrow_mut() = Some(Rc::new(callback));
    }

    /// Registers the callback run when a tile's edit dialog is requested
    pub fn connect_edit_requested(&self, callback: impl Fn(ShortcutId) + 'static) {
        *self.on_edit_requested.borrow_mut() = Some(Rc::new(callback));
    }

    /// Throws away all tiles and builds new ones from `view`
    pub fn render(&self, view: &GridView) {
        while let Some(child) = self.flow_box.first_child() {
            self.flow_box.remove(&child);
        }

        if view.edit_mode {
            self.flow_box.add_css_class("editing");
        } else {
            self.flow_box.remove_css_class("editing");
        }

        for tile in &view.tiles {
            let widget = self.create_tile(tile);
            self.flow_box.append(&widget);
        }
    }

    /// Create a single tile widget
    fn create_tile(&self, tile: &TileView) -> GtkBox {
        let tile_box = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .halign(Align::Center)
            .build();
        tile_box.add_css_class("shortcut-tile");
        tile_box.set_tooltip_text(Some(&tile.url));

        let icon = Image::from_icon_name(tile.icon.fallback);
        icon.set_pixel_size(48);
        icon.add_css_class("shortcut-icon");
        if let Some(favicon_url) = &tile.icon.favicon_url {
            load_favicon(&icon, favicon_url);
        }
        tile_box.append(&icon);

        let name_label = Label::builder()
            .label(&tile.name)
            .max_width_chars(14)
            .ellipsize(gtk4::pango::EllipsizeMode::End)
            .build();
        name_label.add_css_class("shortcut-name");
        tile_box.append(&name_label);

        if tile.editable {
            tile_box.append(&self.create_tile_controls(tile.id));
        }

        self.attach_click(&tile_box, tile);
        self.attach_drag_source(&tile_box, tile.id);
        self.attach_drop_target(&tile_box, tile.id);

        tile_box
    }

    /// Edit and delete buttons shown under a tile in edit mode
    fn create_tile_controls(&self, id: ShortcutId) -> GtkBox {
        let controls = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(4)
            .halign(Align::Center)
            .build();

        let edit_button = Button::builder()
            .icon_name("document-edit-symbolic")
            .tooltip_text("Edit")
            .build();
        edit_button.add_css_class("flat");

        let delete_button = Button::builder()
            .icon_name("window-close-symbolic")
            .tooltip_text("Delete")
            .build();
        delete_button.add_css_class("flat");
        delete_button.add_css_class("destructive-action");

        {
            let on_edit_requested = self.on_edit_requested.borrow().clone();
            edit_button.connect_clicked(move |_| {
                if let Some(callback) = &on_edit_requested {
                    callback(id);
                }
            });
        }

        {
            let controller = self.controller.clone();
            let on_changed = self.on_changed.borrow().clone();
            delete_button.connect_clicked(move |_| match controller.delete_by_id(id) {
                Ok(_) => schedule(&on_changed),
                Err(e) => tracing::error!("Delete failed: {}", e),
            });
        }

        controls.append(&edit_button);
        controls.append(&delete_button);
        controls
    }

    /// Click opens the URL, or the edit dialog in edit mode
    fn attach_click(&self, tile_box: &GtkBox, tile: &TileView) {
        let gesture = GestureClick::new();
        let id = tile.id;
        let url = tile.url.clone();
        let editable = tile.editable;
        let on_edit_requested = self.on_edit_requested.borrow().clone();

        // The edit/delete buttons claim their own clicks, so this only
        // fires for the icon and label
        gesture.connect_released(move |_, _, _, _| {
            if editable {
                if let Some(callback) = &on_edit_requested {
                    callback(id);
                }
            } else {
                open_url(&url);
            }
        });

        tile_box.add_controller(gesture);
    }

    fn attach_drag_source(&self, tile_box: &GtkBox, id: ShortcutId) {
        let drag_source = DragSource::builder()
            .actions(gdk::DragAction::MOVE)
            .build();

        // Pointer offset inside the tile, so the drag icon doesn't jump
        let hotspot = Rc::new(Cell::new((0, 0)));

        {
            let hotspot = hotspot.clone();
            drag_source.connect_prepare(move |_, x, y| {
                hotspot.set((x as i32, y as i32));
                Some(gdk::ContentProvider::for_value(&id.get().to_value()))
            });
        }

        {
            let controller = self.controller.clone();
            let tile_widget = tile_box.clone();
            drag_source.connect_drag_begin(move |source, _drag| {
                controller.drag_start(id);

                let paintable = WidgetPaintable::new(Some(&tile_widget));
                let (hot_x, hot_y) = hotspot.get();
                source.set_icon(Some(&paintable), hot_x, hot_y);

                tile_widget.add_css_class("dragging");
            });
        }

        {
            let controller = self.controller.clone();
            let tile_widget = tile_box.clone();
            drag_source.connect_drag_end(move |_, _, _| {
                controller.drag_end();
                tile_widget.remove_css_class("dragging");
            });
        }

        tile_box.add_controller(drag_source);
    }

    fn attach_drop_target(&self, tile_box: &GtkBox, target: ShortcutId) {
        let drop_target = DropTarget::new(glib::Type::U64, gdk::DragAction::MOVE);

        {
            let tile_widget = tile_box.clone();
            drop_target.connect_enter(move |_, _, _| {
                tile_widget.add_css_class("drop-target");
                gdk::DragAction::MOVE
            });
        }

        {
            let tile_widget = tile_box.clone();
            drop_target.connect_leave(move |_| {
                tile_widget.remove_css_class("drop-target");
            });
        }

        let controller = self.controller.clone();
        let on_changed = self.on_changed.borrow().clone();
        drop_target.connect_drop(move |_, value, _, _| {
            // Drag started before the last render: recover the source from the payload
            if controller.drag_source().is_none() {
                if let Ok(raw) = value.get::<u64>() {
                    controller.drag_start(ShortcutId::from_raw(raw));
                }
            }

            match controller.drop_on(target) {
                Ok(true) => {
                    schedule(&on_changed);
                    true
                }
                Ok(false) => false,
                Err(e) => {
                    tracing::error!("Drop failed: {}", e);
                    false
                }
            }
        });

        tile_box.add_controller(drop_target);
    }
}

/// Runs the change callback once the current signal has finished
fn schedule(callback: &Option<ChangedCallback>) {
    if let Some(callback) = callback.clone() {
        glib::idle_add_local_once(move || callback());
    }
}

/// Opens `url` with the desktop's default handler
fn open_url(url: &str) {
    let launcher = UriLauncher::new(url);
    let url = url.to_string();

    launcher.launch(
        None::<&gtk4::Window>,
        None::<&gio::Cancellable>,
        move |result| match result {
            Ok(()) => tracing::debug!("Opened {}", url),
            Err(e) => tracing::error!("Could not open {}: {}", url, e),
        },
    );
}

/// Replaces the fallback icon with the favicon once it has downloaded
///
/// On failure the fallback stays; that is not worth more than a debug line.
fn load_favicon(image: &Image, favicon_url: &str) {
    let image = image.clone();
    let favicon_url = favicon_url.to_string();

    glib::spawn_future_local(async move {
        let file = gio::File::for_uri(&favicon_url);

        let bytes = match file.load_bytes_future().await {
            Ok((bytes, _etag)) => bytes,
            Err(e) => {
                tracing::debug!("Favicon {} unavailable: {}", favicon_url, e);
                return;
            }
        };

        match gdk::Texture::from_bytes(&bytes) {
            Ok(texture) => image.set_from_paintable(Some(&texture)),
            Err(e) => tracing::debug!("Favicon {} is not an image: {}", favicon_url, e),
        }
    });
}
