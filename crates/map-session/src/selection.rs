//! Checked-layer tracking and the active bounding box.

use ogc_common::{BoundingBox, LayerDescriptor};

/// The checked subset of the last-parsed descriptor set.
///
/// The active bounding box follows the most recently toggled-on layer
/// rather than a union of everything checked. When that layer is
/// deselected, the previously toggled-on layer becomes active again.
#[derive(Debug, Default)]
pub struct SelectionState {
    descriptors: Vec<LayerDescriptor>,
    // Toggle order, most recent last.
    checked: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh descriptor set, replacing any previous one.
    ///
    /// The first descriptor is auto-checked as the default selection;
    /// returns its name.
    pub fn replace_descriptors(&mut self, descriptors: Vec<LayerDescriptor>) -> Option<String> {
        self.checked.clear();
        self.descriptors = descriptors;

        let first = self.descriptors.first().map(|d| d.name.clone());
        if let Some(name) = &first {
            self.checked.push(name.clone());
        }
        first
    }

    /// Check a layer. Names not present in the current descriptor set are
    /// no-ops: the UI only offers checkboxes for known descriptors, so an
    /// unknown name means a stale caller, not an error.
    pub fn select(&mut self, name: &str) {
        if !self.knows(name) || self.is_checked(name) {
            return;
        }
        self.checked.push(name.to_string());
    }

    /// Uncheck a layer. Unknown or unchecked names are no-ops.
    pub fn deselect(&mut self, name: &str) {
        self.checked.retain(|n| n != name);
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.iter().any(|n| n == name)
    }

    /// Checked names in toggle order.
    pub fn checked_names(&self) -> &[String] {
        &self.checked
    }

    pub fn descriptors(&self) -> &[LayerDescriptor] {
        &self.descriptors
    }

    /// Bounding box of the most recently checked layer.
    ///
    /// `None` when nothing is checked or when that layer carries no box.
    pub fn active_bounding_box(&self) -> Option<BoundingBox> {
        let name = self.checked.last()?;
        self.descriptors
            .iter()
            .find(|d| &d.name == name)?
            .bounding_box
    }

    /// Drop descriptors and selection together.
    pub fn clear(&mut self) {
        self.descriptors.clear();
        self.checked.clear();
    }

    fn knows(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name == name)
    }
}
