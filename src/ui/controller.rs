//! MVC Controller - Mediates between Model (Board + StoreManager) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load the shortcut collection from the store
//! - Apply user actions to the `Board` and persist the result
//! - Roll the in-memory state back when persisting fails
//! - Provide the `GridView` the View renders from
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets, so
//! the CLI drives exactly the same code paths as the window does.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{document, LoadOutcome, StoreError, StoreManager};
use crate::core::types::ShortcutsDocument;
use crate::core::{Board, GridView, Modes, Shortcut, ShortcutError, ShortcutId, ShortcutList};

/// Errors surfaced by Controller operations
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ControllerError {
    /// Whether the View should show this in an alert (rather than only log it)
    pub fn is_user_facing(&self) -> bool {
        match self {
            ControllerError::Shortcut(e) => e.is_user_facing(),
            ControllerError::Store(e) => e.is_user_facing(),
        }
    }
}

/// MVC Controller coordinating Model and View
///
/// Every mutating method follows the same sequence: snapshot the board,
/// mutate, persist. If persisting fails the snapshot is restored, so the
/// grid never shows a state the store does not have.
pub struct Controller {
    /// Store file manager
    store: StoreManager,
    /// Collection, modes, edit dialog and drag state
    board: RefCell<Board>,
}

impl Controller {
    /// Creates a new Controller for the given store file
    ///
    /// The board starts empty; call `load()` before rendering.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use newtab_shortcuts::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(PathBuf::from("shortcuts.json"))?;
    /// let outcome = controller.load()?;
    /// println!("{}", outcome);
    /// # Ok::<(), newtab_shortcuts::config::StoreError>(())
    /// ```
    pub fn new(store_path: PathBuf) -> Result<Self, StoreError> {
        let store = StoreManager::new(store_path)?;

        Ok(Self {
            store,
            board: RefCell::new(Board::default()),
        })
    }

    /// Loads the collection from the store
    ///
    /// A missing or corrupt store is replaced by the defaults (see
    /// `StoreManager::load`). Modes are kept; the open edit dialog and any
    /// drag in flight are dropped.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        let (document, outcome) = self.store.load()?;
        self.install(document);
        tracing::info!("Shortcuts {}", outcome);
        Ok(outcome)
    }

    fn install(&self, document: ShortcutsDocument) {
        self.board
            .borrow_mut()
            .replace_list(ShortcutList::from_shortcuts(document.shortcuts));
    }

    /// Applies `mutation` and persists, restoring the previous board on failure
    fn mutate<T>(
        &self,
        mutation: impl FnOnce(&mut Board) -> Result<T, ShortcutError>,
    ) -> Result<T, ControllerError> {
        let mut board = self.board.borrow_mut();
        let snapshot = board.clone();

        let value = match mutation(&mut board) {
            Ok(value) => value,
            Err(e) => {
                *board = snapshot;
                return Err(e.into());
            }
        };

        let document = ShortcutsDocument {
            shortcuts: board.list().shortcuts(),
        };

        if let Err(e) = self.store.persist(&document) {
            tracing::error!("Failed to save shortcuts, change reverted: {}", e);
            *board = snapshot;
            return Err(e.into());
        }

        Ok(value)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// View model for the current state
    pub fn view(&self) -> GridView {
        self.board.borrow().view()
    }

    pub fn modes(&self) -> Modes {
        self.board.borrow().modes()
    }

    /// Shortcuts in display order
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        self.board.borrow().list().shortcuts()
    }

    pub fn shortcut_count(&self) -> usize {
        self.board.borrow().list().len()
    }

    /// Id of the shortcut at `index`
    pub fn id_at(&self, index: usize) -> Option<ShortcutId> {
        self.board.borrow().list().id_at(index)
    }

    pub fn store_path(&self) -> &Path {
        self.store.store_path()
    }

    /// Shortcut whose edit dialog is open
    pub fn editing(&self) -> Option<ShortcutId> {
        self.board.borrow().editing()
    }

    pub fn drag_source(&self) -> Option<ShortcutId> {
        self.board.borrow().drag_source()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adds a shortcut at the end and leaves add mode
    pub fn add_shortcut(&self, name: &str, url: &str) -> Result<ShortcutId, ControllerError> {
        let id = self.mutate(|board| board.add(name, url))?;
        tracing::info!("Added shortcut {} ({})", name.trim(), id);
        Ok(id)
    }

    /// Enter pressed in the add form
    ///
    /// `None` when either field is blank; nothing happens in that case.
    pub fn submit_add_on_enter(
        &self,
        name: &str,
        url: &str,
    ) -> Option<Result<ShortcutId, ControllerError>> {
        if name.trim().is_empty() || url.trim().is_empty() {
            return None;
        }
        Some(self.add_shortcut(name, url))
    }

    /// Replaces the shortcut at `index`
    pub fn edit_shortcut(&self, index: usize, name: &str, url: &str) -> Result<(), ControllerError> {
        self.mutate(|board| board.edit(index, name, url))?;
        tracing::info!("Edited shortcut at position {}", index);
        Ok(())
    }

    /// Removes the shortcut at `index`
    pub fn delete_shortcut(&self, index: usize) -> Result<Shortcut, ControllerError> {
        let removed = self.mutate(|board| board.delete(index))?;
        tracing::info!("Deleted shortcut {}", removed);
        Ok(removed)
    }

    /// Removes the shortcut with `id` (tile delete button)
    pub fn delete_by_id(&self, id: ShortcutId) -> Result<Shortcut, ControllerError> {
        let removed = self.mutate(|board| board.delete_by_id(id))?;
        tracing::info!("Deleted shortcut {}", removed);
        Ok(removed)
    }

    /// Moves the shortcut at `from` to position `to`
    pub fn move_shortcut(&self, from: usize, to: usize) -> Result<(), ControllerError> {
        self.mutate(|board| board.reorder(from, to))?;
        tracing::debug!("Moved shortcut {} -> {}", from, to);
        Ok(())
    }

    /// Exchanges the shortcuts at `a` and `b`
    pub fn swap_shortcuts(&self, a: usize, b: usize) -> Result<(), ControllerError> {
        self.mutate(|board| board.swap(a, b))?;
        tracing::debug!("Swapped shortcuts {} <-> {}", a, b);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Edit dialog
    // ------------------------------------------------------------------

    /// Opens the edit dialog for `id`, returning the values to pre-fill
    pub fn begin_edit(&self, id: ShortcutId) -> Result<Shortcut, ControllerError> {
        Ok(self.board.borrow_mut().begin_edit(id)?)
    }

    /// Saves the open edit dialog
    ///
    /// On a validation error the dialog stays open so the user can fix it.
    pub fn save_edit(&self, name: &str, url: &str) -> Result<(), ControllerError> {
        self.mutate(|board| board.save_edit(name, url))
    }

    /// Deletes the shortcut whose edit dialog is open
    pub fn delete_editing(&self) -> Result<Shortcut, ControllerError> {
        let id = self.editing().ok_or(ShortcutError::NotEditing)?;
        self.delete_by_id(id)
    }

    pub fn cancel_edit(&self) {
        self.board.borrow_mut().cancel_edit();
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    /// Flips edit mode; returns the new state
    pub fn toggle_edit_mode(&self) -> bool {
        self.board.borrow_mut().toggle_edit_mode()
    }

    /// Flips add mode; returns the new state
    pub fn toggle_add_mode(&self) -> bool {
        self.board.borrow_mut().toggle_add_mode()
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    pub fn drag_start(&self, id: ShortcutId) {
        self.board.borrow_mut().drag_start(id);
    }

    /// Drop onto `target`; `Ok(true)` when the order changed and was saved
    pub fn drop_on(&self, target: ShortcutId) -> Result<bool, ControllerError> {
        let source = self.drag_source();
        if source.is_none() || source == Some(target) {
            return Ok(false);
        }
        self.mutate(|board| board.drop_on(target))
    }

    pub fn drag_end(&self) {
        self.board.borrow_mut().drag_end();
    }

    // ------------------------------------------------------------------
    // Import / export / backups
    // ------------------------------------------------------------------

    /// Writes the stored document to `destination`
    pub fn export_to(&self, destination: &Path) -> Result<(), StoreError> {
        self.store.export_to(destination)
    }

    /// Replaces the collection with the one in `source`
    ///
    /// An invalid file leaves both the store and the board untouched.
    ///
    /// # Returns
    ///
    /// Number of shortcuts imported
    pub fn import_from(&self, source: &Path) -> Result<usize, StoreError> {
        let document = self.store.import_from(source)?;
        let count = document.shortcuts.len();
        self.install(document);
        Ok(count)
    }

    /// Replaces the collection with the four defaults
    pub fn reset_to_defaults(&self) -> Result<(), StoreError> {
        let defaults = self.store.reset()?;
        self.install(defaults);
        tracing::info!("Shortcuts reset to defaults");
        Ok(())
    }

    /// Backups, newest first
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, StoreError> {
        self.store.list_backups()
    }

    /// Restores the collection from a backup; returns its shortcut count
    pub fn restore_backup(&self, backup_path: &Path) -> Result<usize, StoreError> {
        let document = self.store.restore_backup(backup_path)?;
        let count = document.shortcuts.len();
        self.install(document);
        Ok(count)
    }

    /// Reloads if the store on disk no longer matches the board
    ///
    /// Called when the file watcher reports activity. Our own writes are
    /// byte-for-byte what the board serialises to and are ignored; anything
    /// else goes through a full `load()`, which also writes the normalised
    /// form back.
    ///
    /// # Returns
    ///
    /// `true` if the shortcuts changed
    pub fn reload_if_changed(&self) -> Result<bool, StoreError> {
        let current = ShortcutsDocument {
            shortcuts: self.shortcuts(),
        };

        if self.store.read_raw()? == Some(document::to_json(&current)?) {
            return Ok(false);
        }

        tracing::info!("Store changed on disk, reloading");
        self.load()?;
        Ok(self.shortcuts() != current.shortcuts)
    }
}
