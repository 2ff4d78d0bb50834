//! Common types shared across the ogc-viewer workspace.

pub mod bbox;
pub mod error;
pub mod layer;
pub mod service;

pub use bbox::BoundingBox;
pub use error::{OgcError, OgcResult};
pub use layer::LayerDescriptor;
pub use service::ServiceKind;
