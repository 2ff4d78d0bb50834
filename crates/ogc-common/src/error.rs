//! Error types for ogc-viewer.

use thiserror::Error;

/// Result type alias using OgcError.
pub type OgcResult<T> = Result<T, OgcError>;

/// Primary error type for viewer operations.
///
/// Every variant leaves the caller in an interactable state; nothing here
/// is fatal to the process. A missing bounding box is a tolerated absence
/// and never surfaces as an error.
#[derive(Debug, Error)]
pub enum OgcError {
    /// Missing or invalid caller-supplied input (server URL, selection).
    /// Blocks the action until corrected.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure or non-2xx response.
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Malformed XML or a document the capabilities parser cannot use.
    #[error("Failed to parse capabilities: {0}")]
    Parse(String),

    /// Asynchronous vector-load failure for a single layer. Sibling layer
    /// loads continue.
    #[error("Failed to load features for layer '{layer}': {message}")]
    FeatureLoad { layer: String, message: String },
}

impl OgcError {
    /// Whether manually re-invoking the same action can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OgcError::Network { .. } | OgcError::FeatureLoad { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(OgcError::Network {
            url: "http://example.com".to_string(),
            message: "HTTP 503".to_string(),
        }
        .is_retryable());
        assert!(!OgcError::Configuration("empty URL".to_string()).is_retryable());
    }
}
