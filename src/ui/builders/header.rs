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

//! Header bar builder
//!
//! Creates the application header bar with menu

use gtk4::{gio::Menu, HeaderBar, MenuButton};

/// Builds the application header bar with the main menu
///
/// Creates a HeaderBar containing a menu button with:
/// - Restore Backup... (app.restore-backup action)
/// - Reset to Defaults (app.reset action)
/// - Quit (app.quit action)
///
/// Import and export live in the toolbar, since they are only offered in
/// edit mode.
///
/// # Returns
///
/// The configured HeaderBar widget
pub fn build_header_bar() -> HeaderBar {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Restore Backup..."), Some("app.restore-backup"));
    menu.append(Some("Reset to Defaults"), Some("app.reset"));
    menu.append(Some("Quit"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    header_bar.pack_end(&menu_button); // <- Right side

    header_bar
}
