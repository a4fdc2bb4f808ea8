//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, export, import,
//! reset, restore-backup) and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow, FileDialog, FileFilter};
use std::rc::Rc;

use crate::config::EXPORT_FILE_NAME;
use crate::ui::alerts::report_error;
use crate::ui::components::BackupDialog;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

fn json_filters() -> gio::ListStore {
    let filter = FileFilter::new();
    filter.set_name(Some("JSON files"));
    filter.add_suffix("json");
    filter.add_mime_type("application/json");

    let filters = gio::ListStore::new::<FileFilter>();
    filters.append(&filter);
    filters
}

/// Sets up the export action
///
/// Creates a GTK action that opens a file save dialog and exports
/// the stored shortcuts to the selected file.
pub fn setup_export_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
) {
    let export_action = gio::SimpleAction::new("export", None);
    let window_for_export = window.clone();

    export_action.connect_activate(move |_, _| {
        let file_dialog = FileDialog::builder()
            .title("Export Shortcuts")
            .initial_name(EXPORT_FILE_NAME)
            .filters(&json_filters())
            .build();

        let controller = controller.clone();
        let window = window_for_export.clone();

        file_dialog.save(Some(&window.clone()), None::<&gio::Cancellable>, move |result| {
            let Some(path) = result.ok().and_then(|file| file.path()) else {
                tracing::debug!("Export cancelled");
                return;
            };

            if let Err(e) = controller.export_to(&path) {
                report_error(
                    Some(window.upcast_ref::<gtk4::Window>()),
                    "Export failed",
                    &e,
                    e.is_user_facing(),
                );
            }
        });
    });

    app.add_action(&export_action);
}

/// Sets up the import action
///
/// Creates a GTK action that opens a file open dialog and imports
/// shortcuts from the selected file. Refreshes the UI after import.
pub fn setup_import_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    refresh: Rc<dyn Fn()>,
) {
    let import_action = gio::SimpleAction::new("import", None);
    let window_for_import = window.clone();

    import_action.connect_activate(move |_, _| {
        let file_dialog = FileDialog::builder()
            .title("Import Shortcuts")
            .filters(&json_filters())
            .build();

        let controller = controller.clone();
        let refresh = refresh.clone();
        let window = window_for_import.clone();

        file_dialog.open(Some(&window.clone()), None::<&gio::Cancellable>, move |result| {
            let Some(path) = result.ok().and_then(|file| file.path()) else {
                tracing::debug!("Import cancelled");
                return;
            };

            match controller.import_from(&path) {
                Ok(count) => {
                    tracing::info!("Imported {} shortcuts from {}", count, path.display());
                    refresh();
                }
                Err(e) => report_error(
                    Some(window.upcast_ref::<gtk4::Window>()),
                    "Import failed",
                    &e,
                    e.is_user_facing(),
                ),
            }
        });
    });

    app.add_action(&import_action);
}

/// Sets up the reset action (overwrite the store with the defaults)
pub fn setup_reset_action(app: &Application, controller: Rc<Controller>, refresh: Rc<dyn Fn()>) {
    let reset_action = gio::SimpleAction::new("reset", None);

    reset_action.connect_activate(move |_, _| match controller.reset_to_defaults() {
        Ok(()) => refresh(),
        Err(e) => tracing::error!("Reset failed: {}", e),
    });

    app.add_action(&reset_action);
}

/// Sets up the restore-backup action
///
/// Opens the backup dialog; restoring reloads the collection and refreshes
/// the UI.
pub fn setup_restore_backup_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    refresh: Rc<dyn Fn()>,
) {
    let restore_action = gio::SimpleAction::new("restore-backup", None);
    let window_for_restore = window.clone();

    restore_action.connect_activate(move |_, _| {
        let backups = match controller.list_backups() {
            Ok(backups) => backups,
            Err(e) => {
                tracing::error!("Failed to list backups: {}", e);
                return;
            }
        };

        let controller = controller.clone();
        let refresh = refresh.clone();
        let dialog = BackupDialog::new(
            window_for_restore.upcast_ref::<gtk4::Window>(),
            backups,
            move |backup_path| match controller.restore_backup(backup_path) {
                Ok(count) => {
                    tracing::info!("Restored {} shortcuts from {}", count, backup_path.display());
                    refresh();
                }
                Err(e) => tracing::error!("Restore failed: {}", e),
            },
        );
        dialog.show();
    });

    app.add_action(&restore_action);
}
