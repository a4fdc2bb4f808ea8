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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to load and display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window
//!   ├─ Connects components to Controller
//!   └─ Polls the store watcher
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crate::config::StoreError;
use crate::ui::actions;
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::file_watcher::FileWatcher;
use crate::ui::Controller;

/// How often the store watcher is polled
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for the shortcut page
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App with the given store file path
    ///
    /// # Example
    ///
    /// ```no_run
    /// use newtab_shortcuts::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(PathBuf::from("shortcuts.json"))?;
    /// # Ok::<(), newtab_shortcuts::config::StoreError>(())
    /// ```
    pub fn new(store_path: PathBuf) -> Result<Self, StoreError> {
        let app = Application::builder()
            .application_id("io.github.newtab-shortcuts")
            .build();

        let controller = Rc::new(Controller::new(store_path)?);

        Ok(Self { app, controller })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits. Returns the process exit code.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Command-line arguments were already handled by clap
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            tracing::warn!("No display available, skipping custom CSS");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window and all components.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        if let Err(e) = controller.load() {
            tracing::error!("Failed to load shortcuts: {}", e);
            return;
        }

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Shortcuts")
            .default_width(900)
            .default_height(600)
            .build();

        window.set_titlebar(Some(&build_header_bar()));

        let layout = Rc::new(build_main_layout(controller.clone()));
        window.set_child(Some(&layout.root));

        let refresh: Rc<dyn Fn()> = {
            let controller = controller.clone();
            let layout = layout.clone();
            Rc::new(move || layout.render(&controller.view()))
        };

        wire_up_handlers(&window, controller.clone(), layout.clone(), refresh.clone());

        actions::setup_quit_action(app);
        actions::setup_export_action(app, &window, controller.clone());
        actions::setup_import_action(app, &window, controller.clone(), refresh.clone());
        actions::setup_reset_action(app, controller.clone(), refresh.clone());
        actions::setup_restore_backup_action(app, &window, controller.clone(), refresh.clone());

        Self::watch_store(&controller, refresh.clone());

        refresh();
        window.present();
    }

    /// Reloads and re-renders when another process changes the store
    fn watch_store(controller: &Rc<Controller>, refresh: Rc<dyn Fn()>) {
        let watcher = match FileWatcher::new(controller.store_path()) {
            Ok(watcher) => watcher,
            Err(e) => {
                tracing::warn!("Store watcher unavailable, external edits won't show live: {}", e);
                return;
            }
        };

        let controller = controller.clone();
        glib::timeout_add_local(WATCH_INTERVAL, move || {
            if watcher.check_for_changes() {
                match controller.reload_if_changed() {
                    Ok(true) => refresh(),
                    Ok(false) => {}
                    Err(e) => tracing::error!("Failed to reload shortcuts: {}", e),
                }
            }
            glib::ControlFlow::Continue
        });
    }
}
