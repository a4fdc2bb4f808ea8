//! Drag-and-drop session for tile reordering
//!
//! A drag records its source tile on start. A drop onto another tile yields
//! a `(source, target)` move; the session is cleared on drag end whether or
//! not a drop happened.

use crate::core::types::ShortcutId;

/// Tracks the tile currently being dragged
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DragSession {
    source: Option<ShortcutId>,
}

/// Move requested by a completed drop
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DropMove {
    pub source: ShortcutId,
    pub target: ShortcutId,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dragged tile, replacing any stale source
    pub fn start(&mut self, source: ShortcutId) {
        self.source = Some(source);
    }

    /// Tile being dragged, if a drag is in flight
    pub fn source(&self) -> Option<ShortcutId> {
        self.source
    }

    /// Resolves a drop onto `target`
    ///
    /// Returns `None` when nothing is being dragged or when the tile was
    /// dropped onto itself.
    pub fn drop_on(&self, target: ShortcutId) -> Option<DropMove> {
        match self.source {
            Some(source) if source != target => Some(DropMove { source, target }),
            _ => None,
        }
    }

    /// Clears the recorded source
    pub fn end(&mut self) {
        self.source = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_without_start_is_noop() {
        let session = DragSession::new();
        assert_eq!(session.drop_on(ShortcutId::from_raw(1)), None);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut session = DragSession::new();
        session.start(ShortcutId::from_raw(3));
        assert_eq!(session.drop_on(ShortcutId::from_raw(3)), None);
    }

    #[test]
    fn test_end_clears_source() {
        let mut session = DragSession::new();
        session.start(ShortcutId::from_raw(1));
        session.end();
        assert_eq!(session.source(), None);
    }
}
