//! Service kinds and endpoint conventions.

use crate::OgcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two OGC protocols the viewer speaks.
///
/// Selecting a different kind invalidates any layer list and selection
/// built against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    Wms,
    Wfs,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Wms => "WMS",
            ServiceKind::Wfs => "WFS",
        }
    }

    /// The other protocol.
    pub fn other(&self) -> ServiceKind {
        match self {
            ServiceKind::Wms => ServiceKind::Wfs,
            ServiceKind::Wfs => ServiceKind::Wms,
        }
    }

    /// Conventional endpoint path suffix for this kind.
    pub fn endpoint_suffix(&self) -> &'static str {
        match self {
            ServiceKind::Wms => "/wms",
            ServiceKind::Wfs => "/wfs",
        }
    }

    /// Query string for a GetCapabilities request.
    ///
    /// WFS capabilities are requested at version 2.0.0; WMS leaves the
    /// version to the server.
    pub fn capabilities_query(&self) -> &'static str {
        match self {
            ServiceKind::Wms => "service=WMS&request=GetCapabilities",
            ServiceKind::Wfs => "service=WFS&request=GetCapabilities&version=2.0.0",
        }
    }

    /// Rewrite a base URL ending in the other kind's conventional suffix
    /// to end in this kind's. Any other URL comes back unchanged.
    pub fn rewrite_endpoint(&self, url: &str) -> String {
        let other = self.other().endpoint_suffix();
        if url.to_ascii_lowercase().ends_with(other) {
            let stem = &url[..url.len() - other.len()];
            format!("{}{}", stem, self.endpoint_suffix())
        } else {
            url.to_string()
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = OgcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wms" => Ok(ServiceKind::Wms),
            "wfs" => Ok(ServiceKind::Wfs),
            _ => Err(OgcError::Configuration(format!(
                "Unknown service kind: {} (expected wms or wfs)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("wms".parse::<ServiceKind>().unwrap(), ServiceKind::Wms);
        assert_eq!("WFS".parse::<ServiceKind>().unwrap(), ServiceKind::Wfs);
        assert!("wcs".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_capabilities_query() {
        assert_eq!(
            ServiceKind::Wms.capabilities_query(),
            "service=WMS&request=GetCapabilities"
        );
        assert_eq!(
            ServiceKind::Wfs.capabilities_query(),
            "service=WFS&request=GetCapabilities&version=2.0.0"
        );
    }

    #[test]
    fn test_rewrite_endpoint() {
        assert_eq!(
            ServiceKind::Wfs.rewrite_endpoint("https://example.com/geoserver/wms"),
            "https://example.com/geoserver/wfs"
        );
        assert_eq!(
            ServiceKind::Wms.rewrite_endpoint("https://example.com/geoserver/wfs"),
            "https://example.com/geoserver/wms"
        );
        // URLs without a conventional suffix are left alone.
        assert_eq!(
            ServiceKind::Wfs.rewrite_endpoint("https://example.com/ows"),
            "https://example.com/ows"
        );
        // Already matching suffix is a no-op.
        assert_eq!(
            ServiceKind::Wms.rewrite_endpoint("https://example.com/wms"),
            "https://example.com/wms"
        );
    }
}
