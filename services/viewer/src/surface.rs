//! Stand-in for the map-rendering collaborator.

use map_session::{MapSurface, OverlayId};
use tracing::info;

/// Surface that logs overlay operations instead of drawing them.
pub struct LogSurface;

impl MapSurface for LogSurface {
    fn remove_overlay(&mut self, id: OverlayId) {
        info!("Removed overlay {}", id);
    }

    fn set_overlay_visible(&mut self, id: OverlayId, visible: bool) {
        info!("Overlay {} visibility -> {}", id, visible);
    }
}
