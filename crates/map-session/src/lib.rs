//! Session-level state for the viewer: layer selection, overlay tracking,
//! and the per-server session that owns both.

pub mod overlay;
pub mod selection;
pub mod session;

pub use overlay::{MapSurface, OverlayEntry, OverlayId, OverlayRegistry};
pub use selection::SelectionState;
pub use session::MapSession;
