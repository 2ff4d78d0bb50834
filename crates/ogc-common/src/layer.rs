//! Layer descriptors extracted from capabilities documents.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

/// One advertised layer (WMS) or feature type (WFS).
///
/// A fresh set is produced on every successful capabilities parse and
/// replaces any previous set wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Identifier used in queries; assumed unique within one document.
    pub name: String,

    /// Human-readable label. Opaque text; escaping is the renderer's job.
    pub title: String,

    /// Advertised extent, when the document carries one. Either all four
    /// corners are present or the whole box is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl LayerDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            bounding_box: None,
        }
    }

    pub fn with_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.bounding_box = Some(bbox);
        self
    }
}
