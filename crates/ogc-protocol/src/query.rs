//! Query construction shared by the WMS and WFS branches.

use ogc_common::{OgcError, OgcResult, ServiceKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::getfeature::{self, FeatureColor};
use crate::getmap;

/// Rendering parameters common to both query branches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Output format MIME type (e.g. "image/png", "application/json").
    pub format: String,

    /// Spatial reference system identifier (e.g. "EPSG:4326").
    pub srs: String,
}

/// A fully-formed per-layer request plus the metadata the rendering
/// collaborator needs to construct the overlay.
#[derive(Debug, Clone, Serialize)]
pub struct RequestSpec {
    /// Layer or feature-type name the request targets.
    pub layer: String,

    /// Complete request URL.
    pub url: String,

    /// Output format the overlay should decode.
    pub format: String,

    /// Stroke/fill/marker color for vector layers; absent for image layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FeatureColor>,
}

/// Build one request per layer name.
///
/// Performs no I/O. An empty `layer_names` slice yields an empty vec;
/// callers are expected to warn the user about that case earlier.
pub fn build_queries(
    kind: ServiceKind,
    base_url: &str,
    layer_names: &[String],
    options: &QueryOptions,
    rng: &mut impl Rng,
) -> OgcResult<Vec<RequestSpec>> {
    validate_base_url(base_url)?;

    Ok(match kind {
        ServiceKind::Wms => getmap::build_image_requests(base_url, layer_names, options),
        ServiceKind::Wfs => {
            getfeature::build_feature_requests(base_url, layer_names, options, rng)
        }
    })
}

/// Reject base URLs the fetch layer could never use.
pub fn validate_base_url(url: &str) -> OgcResult<()> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(OgcError::Configuration("Server URL is empty".to_string()));
    }

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            OgcError::Configuration(format!("Server URL must be http(s): {}", trimmed))
        })?;
    if rest.is_empty() {
        return Err(OgcError::Configuration(format!(
            "Server URL has no host: {}",
            trimmed
        )));
    }

    Ok(())
}

/// Merge a query fragment into a URL that may already carry parameters.
pub fn append_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}
