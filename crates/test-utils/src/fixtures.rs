//! Canned capabilities documents covering the shapes real servers emit.

/// WMS 1.3.0 document with layers nested two deep under the capability
/// root. Exercises all three bounding-box shapes, a bbox-less layer, and
/// a group layer without a name.
pub const WMS_CAPABILITIES_NESTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0" xmlns="http://www.opengis.net/wms">
  <Service>
    <Name>WMS</Name>
    <Title>Demo map server</Title>
  </Service>
  <Capability>
    <Layer>
      <Title>Root group</Title>
      <Layer>
        <Name>roads</Name>
        <Title>Road network</Title>
        <BoundingBox minx="-125.0" miny="24.0" maxx="-66.0" maxy="50.0" CRS="EPSG:4326"/>
      </Layer>
      <Layer>
        <Name>rivers</Name>
        <Title>Rivers &amp; streams</Title>
        <EX_GeographicBoundingBox>
          <westBoundLongitude>-10</westBoundLongitude>
          <eastBoundLongitude>10</eastBoundLongitude>
          <southBoundLatitude>-5</southBoundLatitude>
          <northBoundLatitude>5</northBoundLatitude>
        </EX_GeographicBoundingBox>
      </Layer>
      <Layer>
        <Name>parcels</Name>
        <Title>Cadastral parcels</Title>
        <LatLonBoundingBox minx="5.9" miny="45.8" maxx="10.5" maxy="47.8"/>
      </Layer>
      <Layer>
        <Name>annotations</Name>
        <Title>Annotations</Title>
      </Layer>
      <Layer>
        <Title>Unnamed group</Title>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>
"#;

/// WMS 1.1.1 document with layers sitting directly under the capability
/// root; only matched by the flat fallback.
pub const WMS_CAPABILITIES_FLAT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMT_MS_Capabilities version="1.1.1">
  <Service>
    <Name>OGC:WMS</Name>
    <Title>Flat demo server</Title>
  </Service>
  <Capability>
    <Layer>
      <Name>basemap</Name>
      <Title>Base map</Title>
      <LatLonBoundingBox minx="-180" miny="-90" maxx="180" maxy="90"/>
    </Layer>
    <Layer>
      <Name>hillshade</Name>
      <Title>Hillshade</Title>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>
"#;

/// WFS 2.0.0 document. Exercises a complete WGS84 bbox, a bbox node
/// missing its upper corner, a type without a title, and a type without
/// any bbox node.
pub const WFS_CAPABILITIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:WFS_Capabilities version="2.0.0"
    xmlns:wfs="http://www.opengis.net/wfs/2.0"
    xmlns:ows="http://www.opengis.net/ows/1.1">
  <FeatureTypeList>
    <FeatureType>
      <Name>topp:states</Name>
      <Title>USA states</Title>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-124.73 24.96</ows:LowerCorner>
        <ows:UpperCorner>-66.97 49.37</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
    <FeatureType>
      <Name>topp:lakes</Name>
      <Title>Lakes</Title>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>10 20</ows:LowerCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
    <FeatureType>
      <Name>topp:roads</Name>
    </FeatureType>
    <FeatureType>
      <Name>topp:poi</Name>
      <Title>Points of interest</Title>
    </FeatureType>
  </FeatureTypeList>
</wfs:WFS_Capabilities>
"#;
