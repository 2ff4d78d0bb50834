//! Console table output for layer lists and request specs.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use map_session::SelectionState;
use ogc_protocol::RequestSpec;

/// Layer listing with selection markers.
pub fn layer_table(selection: &SelectionState) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["", "Name", "Title", "Extent"]);

    for descriptor in selection.descriptors() {
        let checked = if selection.is_checked(&descriptor.name) {
            "*"
        } else {
            ""
        };
        let extent = match descriptor.bounding_box {
            Some(bbox) => format!(
                "{} {} {} {}",
                bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
            ),
            None => "-".to_string(),
        };
        table.add_row(vec![
            checked.to_string(),
            descriptor.name.clone(),
            descriptor.title.clone(),
            extent,
        ]);
    }

    table.to_string()
}

/// One row per built request.
pub fn spec_table(specs: &[RequestSpec]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Layer", "Format", "Color", "URL"]);

    for spec in specs {
        let color = spec
            .color
            .map(|c| c.hex())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            spec.layer.clone(),
            spec.format.clone(),
            color,
            spec.url.clone(),
        ]);
    }

    table.to_string()
}
