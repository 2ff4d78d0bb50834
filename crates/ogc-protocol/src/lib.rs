//! OGC WMS and WFS client-side protocol implementation.
//!
//! Supports:
//! - WMS 1.1.1 and 1.3.0 capabilities documents and GetMap image requests
//! - WFS 2.0.0 capabilities documents and WFS 1.0.0 GetFeature requests

pub mod capabilities;
pub mod getfeature;
pub mod getmap;
pub mod query;

pub use capabilities::parse_capabilities;
pub use getfeature::FeatureColor;
pub use query::{build_queries, QueryOptions, RequestSpec};
