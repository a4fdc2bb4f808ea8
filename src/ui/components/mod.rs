//! UI Components
//!
//! Reusable GTK4 widgets for the shortcut page.
//!
//! # Components
//!
//! - `shortcut_grid.rs` - Tile grid with click, delete/edit and drag-and-drop
//! - `add_form.rs` - Inline add form (add mode)
//! - `edit_dialog.rs` - Edit/delete dialog for one shortcut
//! - `backup_dialog.rs` - Backup restore dialog

mod add_form;
mod backup_dialog;
mod edit_dialog;
mod shortcut_grid;

pub use add_form::AddForm;
pub use backup_dialog::BackupDialog;
pub use edit_dialog::{DialogResponse, EditDialog};
pub use shortcut_grid::ShortcutGrid;
