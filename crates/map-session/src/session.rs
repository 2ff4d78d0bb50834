//! One client session against one OGC server.

use ogc_common::{LayerDescriptor, OgcError, OgcResult, ServiceKind};
use ogc_protocol::{build_queries, QueryOptions, RequestSpec};
use rand::Rng;
use tracing::debug;

use crate::overlay::OverlayRegistry;
use crate::selection::SelectionState;

/// Owns the current service kind, base URL, layer selection, and overlay
/// registry. All mutation goes through these methods; there is no shared
/// module state.
#[derive(Debug)]
pub struct MapSession {
    service: ServiceKind,
    base_url: String,
    selection: SelectionState,
    overlays: OverlayRegistry,
}

impl MapSession {
    pub fn new(service: ServiceKind, base_url: impl Into<String>) -> Self {
        Self {
            service,
            base_url: base_url.into(),
            selection: SelectionState::new(),
            overlays: OverlayRegistry::new(),
        }
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    /// Switch protocols.
    ///
    /// Rewrites a conventional `/wms` or `/wfs` endpoint suffix on the
    /// base URL and invalidates the current layer list and selection.
    /// Switching to the current kind changes nothing.
    pub fn set_service(&mut self, kind: ServiceKind) {
        if kind == self.service {
            return;
        }

        let rewritten = kind.rewrite_endpoint(&self.base_url);
        if rewritten != self.base_url {
            debug!(
                "Rewrote endpoint for service switch: {} -> {}",
                self.base_url, rewritten
            );
            self.base_url = rewritten;
        }

        self.service = kind;
        self.selection.clear();
    }

    /// Install a freshly parsed descriptor set; returns the auto-checked
    /// name.
    pub fn apply_capabilities(&mut self, descriptors: Vec<LayerDescriptor>) -> Option<String> {
        self.selection.replace_descriptors(descriptors)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayRegistry {
        &mut self.overlays
    }

    /// Build one request per checked layer.
    ///
    /// An empty selection is a caller-visible configuration error rather
    /// than an empty result.
    pub fn build_queries(
        &self,
        options: &QueryOptions,
        rng: &mut impl Rng,
    ) -> OgcResult<Vec<RequestSpec>> {
        let names = self.selection.checked_names();
        if names.is_empty() {
            return Err(OgcError::Configuration("No layer selected".to_string()));
        }

        build_queries(self.service, &self.base_url, names, options, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_with_layers() -> MapSession {
        let mut session = MapSession::new(ServiceKind::Wms, "https://example.com/geoserver/wms");
        session.apply_capabilities(vec![
            LayerDescriptor::new("roads", "Roads"),
            LayerDescriptor::new("rivers", "Rivers"),
        ]);
        session
    }

    #[test]
    fn test_service_switch_rewrites_suffix_and_invalidates_selection() {
        let mut session = session_with_layers();
        assert!(session.selection().is_checked("roads"));

        session.set_service(ServiceKind::Wfs);
        assert_eq!(session.base_url(), "https://example.com/geoserver/wfs");
        assert!(session.selection().descriptors().is_empty());
        assert!(session.selection().checked_names().is_empty());

        session.set_service(ServiceKind::Wms);
        assert_eq!(session.base_url(), "https://example.com/geoserver/wms");
    }

    #[test]
    fn test_switch_to_same_kind_is_a_no_op() {
        let mut session = session_with_layers();
        session.set_service(ServiceKind::Wms);

        assert_eq!(session.base_url(), "https://example.com/geoserver/wms");
        assert_eq!(session.selection().descriptors().len(), 2);
        assert!(session.selection().is_checked("roads"));
    }

    #[test]
    fn test_unconventional_url_is_left_alone_on_switch() {
        let mut session = MapSession::new(ServiceKind::Wms, "https://example.com/ows");
        session.set_service(ServiceKind::Wfs);
        assert_eq!(session.base_url(), "https://example.com/ows");
    }

    #[test]
    fn test_build_queries_requires_a_selection() {
        let mut session = session_with_layers();
        session.selection_mut().deselect("roads");

        let options = QueryOptions {
            format: "image/png".to_string(),
            srs: "EPSG:4326".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let result = session.build_queries(&options, &mut rng);
        assert!(matches!(result, Err(OgcError::Configuration(_))));
    }

    #[test]
    fn test_build_queries_covers_checked_layers() {
        let mut session = session_with_layers();
        session.selection_mut().select("rivers");

        let options = QueryOptions {
            format: "image/png".to_string(),
            srs: "EPSG:4326".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let specs = session.build_queries(&options, &mut rng).unwrap();

        assert_eq!(specs.len(), 2);
        assert!(specs[0].url.contains("LAYERS=roads"));
        assert!(specs[1].url.contains("LAYERS=rivers"));
    }
}
