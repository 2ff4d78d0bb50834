//! Capabilities document parsing.
//!
//! Extracts normalized layer descriptors from WMS and WFS GetCapabilities
//! responses. XML syntax errors are the caller's problem; this module works
//! over an already-parsed tree and tolerates every structural gap by
//! skipping the node or leaving the bounding box absent.

use ogc_common::{BoundingBox, LayerDescriptor, ServiceKind};
use roxmltree::{Document, Node};

/// Extract the advertised layers from a parsed capabilities document.
///
/// Nodes missing a name or title are skipped. Descriptors come back in
/// document order.
pub fn parse_capabilities(doc: &Document, kind: ServiceKind) -> Vec<LayerDescriptor> {
    match kind {
        ServiceKind::Wms => parse_wms(doc),
        ServiceKind::Wfs => parse_wfs(doc),
    }
}

fn parse_wms(doc: &Document) -> Vec<LayerDescriptor> {
    let capability = match doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "Capability")
    {
        Some(node) => node,
        None => return Vec::new(),
    };

    // Servers disagree on nesting depth: prefer the grandchild pattern,
    // fall back to layers sitting directly under the capability root.
    let nested: Vec<Node> = element_children(capability, "Layer")
        .flat_map(|outer| element_children(outer, "Layer"))
        .collect();
    let candidates = if nested.is_empty() {
        element_children(capability, "Layer").collect()
    } else {
        nested
    };

    candidates
        .into_iter()
        .filter_map(|node| {
            let name = child_text(node, "Name")?;
            let title = child_text(node, "Title")?;
            Some(LayerDescriptor {
                name,
                title,
                bounding_box: wms_bounding_box(node),
            })
        })
        .collect()
}

fn parse_wfs(doc: &Document) -> Vec<LayerDescriptor> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "FeatureType")
        .filter_map(|node| {
            let name = child_text(node, "Name")?;
            let title = child_text(node, "Title")?;
            Some(LayerDescriptor {
                name,
                title,
                bounding_box: wfs_bounding_box(node),
            })
        })
        .collect()
}

/// First matching bounding-box shape wins: corner attributes, then the
/// geographic-bounds element, then the legacy lat/lon element. A shape
/// with missing or unparsable pieces does not match.
fn wms_bounding_box(layer: Node) -> Option<BoundingBox> {
    if let Some(node) = element_children(layer, "BoundingBox").next() {
        if let Some(bbox) = corner_attributes(node) {
            return Some(bbox);
        }
    }
    if let Some(node) = element_children(layer, "EX_GeographicBoundingBox").next() {
        if let Some(bbox) = geographic_bounds(node) {
            return Some(bbox);
        }
    }
    if let Some(node) = element_children(layer, "LatLonBoundingBox").next() {
        if let Some(bbox) = corner_attributes(node) {
            return Some(bbox);
        }
    }
    None
}

fn wfs_bounding_box(feature_type: Node) -> Option<BoundingBox> {
    let node = element_children(feature_type, "WGS84BoundingBox").next()?;
    // Corner text is "lon lat"; a missing corner leaves the whole box
    // absent even though the bounding node exists.
    let (min_x, min_y) = corner_pair(&child_text(node, "LowerCorner")?)?;
    let (max_x, max_y) = corner_pair(&child_text(node, "UpperCorner")?)?;
    Some(BoundingBox::new(min_x, min_y, max_x, max_y))
}

fn corner_attributes(node: Node) -> Option<BoundingBox> {
    let min_x = attribute_f64(node, "minx")?;
    let min_y = attribute_f64(node, "miny")?;
    let max_x = attribute_f64(node, "maxx")?;
    let max_y = attribute_f64(node, "maxy")?;
    Some(BoundingBox::new(min_x, min_y, max_x, max_y))
}

fn geographic_bounds(node: Node) -> Option<BoundingBox> {
    let west = child_f64(node, "westBoundLongitude")?;
    let east = child_f64(node, "eastBoundLongitude")?;
    let south = child_f64(node, "southBoundLatitude")?;
    let north = child_f64(node, "northBoundLatitude")?;
    Some(BoundingBox::new(west, south, east, north))
}

fn corner_pair(text: &str) -> Option<(f64, f64)> {
    let mut parts = text.split_whitespace();
    let lon = parts.next()?.parse().ok()?;
    let lat = parts.next()?.parse().ok()?;
    Some((lon, lat))
}

fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

fn child_text(node: Node, name: &'static str) -> Option<String> {
    element_children(node, name)
        .next()
        .and_then(|c| c.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn child_f64(node: Node, name: &'static str) -> Option<f64> {
    child_text(node, name).and_then(|t| t.parse().ok())
}

fn attribute_f64(node: Node, name: &str) -> Option<f64> {
    node.attribute(name).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wms_nested_layer_with_corner_attributes() {
        let xml = r#"
<WMS_Capabilities>
  <Capability>
    <Layer>
      <Title>Group</Title>
      <Layer>
        <Name>goes18_CMI_C13</Name>
        <Title>GOES18 - Clean IR</Title>
        <BoundingBox minx="-180" miny="-81.3" maxx="6.2" maxy="81.3"/>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>"#;
        let doc = Document::parse(xml).unwrap();
        let layers = parse_capabilities(&doc, ServiceKind::Wms);

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].name, "goes18_CMI_C13");
        assert_eq!(layers[0].title, "GOES18 - Clean IR");
        let bbox = layers[0].bounding_box.unwrap();
        assert_eq!(bbox.min_x, -180.0);
        assert_eq!(bbox.max_y, 81.3);
    }

    #[test]
    fn test_wms_group_without_name_is_skipped() {
        let xml = r#"
<WMS_Capabilities>
  <Capability>
    <Layer>
      <Title>Group</Title>
      <Layer>
        <Title>Only a title</Title>
      </Layer>
      <Layer>
        <Name>only_a_name</Name>
      </Layer>
      <Layer>
        <Name>real</Name>
        <Title>Real layer</Title>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>"#;
        let doc = Document::parse(xml).unwrap();
        let layers = parse_capabilities(&doc, ServiceKind::Wms);

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].name, "real");
        assert!(layers[0].bounding_box.is_none());
    }

    #[test]
    fn test_wms_partial_corner_attributes_do_not_match() {
        // minx present but maxy missing: the attribute shape does not
        // match, and with no other bbox node the box stays absent.
        let xml = r#"
<WMS_Capabilities>
  <Capability>
    <Layer>
      <Name>partial</Name>
      <Title>Partial</Title>
      <BoundingBox minx="-10" miny="-5" maxx="10"/>
    </Layer>
  </Capability>
</WMS_Capabilities>"#;
        let doc = Document::parse(xml).unwrap();
        let layers = parse_capabilities(&doc, ServiceKind::Wms);

        assert_eq!(layers.len(), 1);
        assert!(layers[0].bounding_box.is_none());
    }

    #[test]
    fn test_wfs_feature_type_corners() {
        let xml = r#"
<WFS_Capabilities xmlns:ows="http://www.opengis.net/ows/1.1">
  <FeatureTypeList>
    <FeatureType>
      <Name>ns:rivers</Name>
      <Title>Rivers</Title>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>10 20</ows:LowerCorner>
        <ows:UpperCorner>30 40</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
  </FeatureTypeList>
</WFS_Capabilities>"#;
        let doc = Document::parse(xml).unwrap();
        let layers = parse_capabilities(&doc, ServiceKind::Wfs);

        assert_eq!(layers.len(), 1);
        let bbox = layers[0].bounding_box.unwrap();
        assert_eq!(bbox.min_x, 10.0);
        assert_eq!(bbox.min_y, 20.0);
        assert_eq!(bbox.max_x, 30.0);
        assert_eq!(bbox.max_y, 40.0);
    }
}
