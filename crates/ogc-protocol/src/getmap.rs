//! WMS image request construction.

use crate::query::{append_query, QueryOptions, RequestSpec};

/// Build one independent image request per layer.
///
/// Layers are deliberately not batched into a single multi-layer request:
/// each resulting overlay can then be shown and hidden on its own.
pub fn build_image_requests(
    base_url: &str,
    layer_names: &[String],
    options: &QueryOptions,
) -> Vec<RequestSpec> {
    layer_names
        .iter()
        .map(|name| {
            let url = append_query(
                base_url,
                &format!(
                    "LAYERS={}&FORMAT={}&SRS={}",
                    name, options.format, options.srs
                ),
            );
            RequestSpec {
                layer: name.clone(),
                url,
                format: options.format.clone(),
                color: None,
            }
        })
        .collect()
}
