//! Backup restore dialog
//!
//! Lists the store's timestamped backups (newest first) and restores the
//! selected one through a callback.

use gtk4::prelude::*;
use gtk4::{Button, ListBox, Orientation, ScrolledWindow, Window};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct BackupDialog {
    window: Window,
    list_box: ListBox,
}

impl BackupDialog {
    pub fn new(
        parent: &Window,
        backups: Vec<PathBuf>,
        on_restore: impl Fn(&Path) + 'static,
    ) -> Self {
        let bd_window = Window::builder()
            .title("Backups")
            .modal(true)
            .transient_for(parent)
            .default_width(450)
            .default_height(300)
            .build();

        let selected_backup: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

        let main_vbox = gtk4::Box::new(Orientation::Vertical, 12);
        main_vbox.set_margin_start(12);
        main_vbox.set_margin_end(12);
        main_vbox.set_margin_top(12);
        main_vbox.set_margin_bottom(12);

        let scrolled_window = ScrolledWindow::builder()
            .vexpand(true)
            .build();

        let list_box = ListBox::new();

        if backups.is_empty() {
            list_box.set_placeholder(Some(&gtk4::Label::new(Some("No backups yet"))));
        }

        for backup_path in &backups {
            let label = gtk4::Label::new(Some(&Self::format_backup_display(backup_path)));
            label.set_halign(gtk4::Align::Start);
            label.set_margin_start(8);
            label.set_margin_end(8);
            label.set_margin_top(8);
            label.set_margin_bottom(8);

            list_box.append(&label);
        }

        scrolled_window.set_child(Some(&list_box));
        main_vbox.append(&scrolled_window);

        let button_box = gtk4::Box::new(Orientation::Horizontal, 12);
        button_box.set_halign(gtk4::Align::End);

        let restore_button = Button::builder()
            .label("Restore")
            .sensitive(false)  // Disabled until something is selected
            .build();
        restore_button.add_css_class("suggested-action");

        let close_button = Button::builder()
            .label("Close")
            .build();

        button_box.append(&restore_button);
        button_box.append(&close_button);
        main_vbox.append(&button_box);

        let selected_for_rows = selected_backup.clone();
        let restore_for_rows = restore_button.clone();
        list_box.connect_row_selected(move |_list, row| {
            match row {
                Some(r) => {
                    selected_for_rows.set(usize::try_from(r.index()).ok());
                    restore_for_rows.set_sensitive(true);
                }
                None => {
                    selected_for_rows.set(None);
                    restore_for_rows.set_sensitive(false);
                }
            }
        });

        bd_window.set_child(Some(&main_vbox));

        let window_for_restore = bd_window.clone();
        restore_button.connect_clicked(move |_| {
            if let Some(path) = selected_backup.get().and_then(|i| backups.get(i)) {
                on_restore(path);
                window_for_restore.close();
            }
        });

        let window_for_close = bd_window.clone();
        close_button.connect_clicked(move |_| {
            window_for_close.close()
        });

        Self {
            window: bd_window,
            list_box,
        }
    }

    pub fn show(&self) {
        self.window.present();
        // User must explicitly choose
        self.list_box.unselect_all();
    }

    /// Turns `shortcuts.json.2025-10-15_143025` into `2025-10-15 14:30:25`
    ///
    /// Falls back to the plain file name for anything that doesn't look
    /// like a backup timestamp. A `-N` collision suffix is kept.
    pub fn format_backup_display(path: &Path) -> String {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return "Unknown backup".to_string();
        };

        let Some((_, stamp)) = filename.rsplit_once('.') else {
            return filename.to_string();
        };

        let Some((date_part, rest)) = stamp.split_once('_') else {
            return filename.to_string();
        };

        let (time_part, suffix) = match rest.split_once('-') {
            Some((time, n)) => (time, Some(n)),
            None => (rest, None),
        };

        if date_part.len() != 10
            || time_part.len() != 6
            || !time_part.bytes().all(|b| b.is_ascii_digit())
        {
            return filename.to_string();
        }

        let display = format!(
            "{} {}:{}:{}",
            date_part,
            &time_part[0..2],
            &time_part[2..4],
            &time_part[4..6]
        );

        match suffix {
            Some(n) => format!("{} ({})", display, n),
            None => display,
        }
    }
}
