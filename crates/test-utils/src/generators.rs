//! Generators for capabilities documents with a chosen layer set.

/// Build a nested WMS capabilities document with one child layer per
/// `(name, title, bbox)` entry. `bbox` is `[minx, miny, maxx, maxy]`.
pub fn wms_capabilities(layers: &[(&str, &str, Option<[f64; 4]>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer>
      <Title>Root</Title>
"#,
    );

    for (name, title, bbox) in layers {
        xml.push_str("      <Layer>\n");
        xml.push_str(&format!("        <Name>{}</Name>\n", name));
        xml.push_str(&format!("        <Title>{}</Title>\n", title));
        if let Some([minx, miny, maxx, maxy]) = bbox {
            xml.push_str(&format!(
                "        <BoundingBox minx=\"{}\" miny=\"{}\" maxx=\"{}\" maxy=\"{}\"/>\n",
                minx, miny, maxx, maxy
            ));
        }
        xml.push_str("      </Layer>\n");
    }

    xml.push_str("    </Layer>\n  </Capability>\n</WMS_Capabilities>\n");
    xml
}

/// Build a WFS capabilities document with one feature type per
/// `(name, title, corners)` entry. `corners` is `(lower, upper)`, each
/// `[lon, lat]`.
pub fn wfs_capabilities(types: &[(&str, &str, Option<([f64; 2], [f64; 2])>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:WFS_Capabilities version="2.0.0"
    xmlns:wfs="http://www.opengis.net/wfs/2.0"
    xmlns:ows="http://www.opengis.net/ows/1.1">
  <FeatureTypeList>
"#,
    );

    for (name, title, corners) in types {
        xml.push_str("    <FeatureType>\n");
        xml.push_str(&format!("      <Name>{}</Name>\n", name));
        xml.push_str(&format!("      <Title>{}</Title>\n", title));
        if let Some((lower, upper)) = corners {
            xml.push_str("      <ows:WGS84BoundingBox>\n");
            xml.push_str(&format!(
                "        <ows:LowerCorner>{} {}</ows:LowerCorner>\n",
                lower[0], lower[1]
            ));
            xml.push_str(&format!(
                "        <ows:UpperCorner>{} {}</ows:UpperCorner>\n",
                upper[0], upper[1]
            ));
            xml.push_str("      </ows:WGS84BoundingBox>\n");
        }
        xml.push_str("    </FeatureType>\n");
    }

    xml.push_str("  </FeatureTypeList>\n</wfs:WFS_Capabilities>\n");
    xml
}
