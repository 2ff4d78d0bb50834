//! Overlay bookkeeping for rendered layers.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque handle for one rendered overlay, minted by the rendering
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hooks into the map-rendering collaborator.
///
/// Removing an overlay that is already gone must be a harmless no-op:
/// in-flight loads may complete after a clear.
pub trait MapSurface {
    fn remove_overlay(&mut self, id: OverlayId);
    fn set_overlay_visible(&mut self, id: OverlayId, visible: bool);
}

/// A tracked overlay and its display state.
///
/// Per entry: Created -> Visible <-> Hidden -> Removed, and Removed is
/// terminal (the entry is forgotten).
#[derive(Debug, Clone, Serialize)]
pub struct OverlayEntry {
    pub id: OverlayId,
    pub title: String,
    pub visible: bool,
}

/// Tracks rendered overlays so they can be bulk-cleared or individually
/// toggled.
///
/// Holds non-owning handles only; disposal happens through the surface's
/// remove hook. Nothing else mutates the tracked list.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    entries: Vec<OverlayEntry>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly rendered overlay. Entries start visible.
    pub fn register(&mut self, title: impl Into<String>, id: OverlayId) {
        self.entries.push(OverlayEntry {
            id,
            title: title.into(),
            visible: true,
        });
    }

    /// Remove every tracked overlay from the surface, then forget them
    /// all. Clearing an empty registry invokes nothing.
    pub fn clear_all(&mut self, surface: &mut dyn MapSurface) -> usize {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            surface.remove_overlay(entry.id);
        }
        count
    }

    /// Flip one overlay's visibility without untracking it. Returns false
    /// when the id is not tracked.
    pub fn set_visible(&mut self, id: OverlayId, visible: bool, surface: &mut dyn MapSurface) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.visible = visible;
                surface.set_overlay_visible(id, visible);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface double that records every hook invocation.
    #[derive(Default)]
    struct RecordingSurface {
        removed: Vec<OverlayId>,
        visibility: Vec<(OverlayId, bool)>,
    }

    impl MapSurface for RecordingSurface {
        fn remove_overlay(&mut self, id: OverlayId) {
            self.removed.push(id);
        }

        fn set_overlay_visible(&mut self, id: OverlayId, visible: bool) {
            self.visibility.push((id, visible));
        }
    }

    #[test]
    fn test_clear_all_removes_everything_once() {
        let mut registry = OverlayRegistry::new();
        let mut surface = RecordingSurface::default();

        for i in 0..3 {
            registry.register(format!("overlay {}", i), OverlayId::new());
        }
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.clear_all(&mut surface), 3);
        assert_eq!(registry.len(), 0);
        assert_eq!(surface.removed.len(), 3);

        // Idempotent: a second clear invokes nothing.
        assert_eq!(registry.clear_all(&mut surface), 0);
        assert_eq!(surface.removed.len(), 3);
    }

    #[test]
    fn test_set_visible_round_trip() {
        let mut registry = OverlayRegistry::new();
        let mut surface = RecordingSurface::default();
        let id = OverlayId::new();
        registry.register("roads", id);

        assert!(registry.entries()[0].visible);
        assert!(registry.set_visible(id, false, &mut surface));
        assert!(!registry.entries()[0].visible);
        assert!(registry.set_visible(id, true, &mut surface));
        assert!(registry.entries()[0].visible);

        assert_eq!(surface.visibility, vec![(id, false), (id, true)]);
        // Toggling never untracks.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_visible_unknown_id() {
        let mut registry = OverlayRegistry::new();
        let mut surface = RecordingSurface::default();
        registry.register("roads", OverlayId::new());

        assert!(!registry.set_visible(OverlayId::new(), false, &mut surface));
        assert!(surface.visibility.is_empty());
    }
}
