//! HTTP fetch layer: capabilities documents and WFS feature data.

use ogc_common::{OgcError, OgcResult, ServiceKind};
use ogc_protocol::query::append_query;
use ogc_protocol::RequestSpec;
use tracing::debug;

/// Capabilities request URL for a base endpoint.
pub fn capabilities_url(base_url: &str, kind: ServiceKind) -> String {
    append_query(base_url, kind.capabilities_query())
}

/// Fetch a server's capabilities document.
pub async fn fetch_capabilities(
    client: &reqwest::Client,
    base_url: &str,
    kind: ServiceKind,
) -> OgcResult<String> {
    let url = capabilities_url(base_url, kind);
    debug!("Fetching capabilities: {}", url);
    fetch_text(client, &url).await
}

/// GET a URL, mapping transport failures and non-2xx statuses to network
/// errors.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> OgcResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| OgcError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(OgcError::Network {
            url: url.to_string(),
            message: format!("HTTP {}", status),
        });
    }

    response.text().await.map_err(|e| OgcError::Network {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Fetch one WFS layer's features, returning the feature count.
///
/// Failures map to per-layer load errors so sibling layers keep going.
pub async fn fetch_features(client: &reqwest::Client, spec: &RequestSpec) -> OgcResult<usize> {
    let body = fetch_text(client, &spec.url)
        .await
        .map_err(|e| OgcError::FeatureLoad {
            layer: spec.layer.clone(),
            message: e.to_string(),
        })?;

    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| OgcError::FeatureLoad {
            layer: spec.layer.clone(),
            message: format!("Invalid GeoJSON: {}", e),
        })?;

    Ok(value
        .get("features")
        .and_then(|f| f.as_array())
        .map(|a| a.len())
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_url_shapes() {
        assert_eq!(
            capabilities_url("http://example.com/wms", ServiceKind::Wms),
            "http://example.com/wms?service=WMS&request=GetCapabilities"
        );
        // Existing query parameters survive the merge, and WFS pins the
        // capabilities version.
        assert_eq!(
            capabilities_url("http://example.com/wfs?map=demo", ServiceKind::Wfs),
            "http://example.com/wfs?map=demo&service=WFS&request=GetCapabilities&version=2.0.0"
        );
    }
}
