//! WFS GetFeature request construction and per-layer styling.

use crate::query::{append_query, QueryOptions, RequestSpec};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Feature queries are pinned to 1.0.0 for broad server compatibility,
/// independent of the capabilities version.
const GETFEATURE_VERSION: &str = "1.0.0";

/// Channels are drawn from [0, 200) so strokes never wash out.
const COLOR_CHANNEL_BOUND: u8 = 200;

/// RGB triple styling one vector layer.
///
/// Each simultaneously rendered feature layer gets its own color so they
/// stay visually distinguishable. Cosmetic only; correctness never depends
/// on the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FeatureColor {
    /// Draw a color with each channel uniform in [0, 200).
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.gen_range(0..COLOR_CHANNEL_BOUND),
            g: rng.gen_range(0..COLOR_CHANNEL_BOUND),
            b: rng.gen_range(0..COLOR_CHANNEL_BOUND),
        }
    }

    /// Stroke color, fully opaque.
    pub fn stroke_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Fill color at 20% opacity.
    pub fn fill_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 51]
    }

    /// Point-marker color at 80% opacity.
    pub fn marker_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 204]
    }

    /// "#rrggbb" form for display.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Build one feature query per type name, each carrying a fresh color.
pub fn build_feature_requests(
    base_url: &str,
    layer_names: &[String],
    options: &QueryOptions,
    rng: &mut impl Rng,
) -> Vec<RequestSpec> {
    layer_names
        .iter()
        .map(|name| {
            let url = append_query(
                base_url,
                &format!(
                    "service=WFS&version={}&request=GetFeature&typeName={}&outputFormat={}&srsName={}",
                    GETFEATURE_VERSION, name, options.format, options.srs
                ),
            );
            RequestSpec {
                layer: name.clone(),
                url,
                format: options.format.clone(),
                color: Some(FeatureColor::random(rng)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn options() -> QueryOptions {
        QueryOptions {
            format: "application/json".to_string(),
            srs: "EPSG:4326".to_string(),
        }
    }

    #[test]
    fn test_feature_request_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let names = vec!["a".to_string(), "b".to_string()];
        let specs = build_feature_requests("http://example.com/wfs", &names, &options(), &mut rng);

        assert_eq!(specs.len(), 2);
        assert!(specs[0].url.contains("typeName=a"));
        assert!(specs[1].url.contains("typeName=b"));
        for spec in &specs {
            assert!(spec.url.contains("service=WFS"));
            assert!(spec.url.contains("version=1.0.0"));
            assert!(spec.url.contains("request=GetFeature"));
            assert!(spec.url.contains("outputFormat=application/json"));
            assert!(spec.url.contains("srsName=EPSG:4326"));
            assert!(spec.color.is_some());
        }
    }

    #[test]
    fn test_color_channels_stay_below_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let color = FeatureColor::random(&mut rng);
            assert!(color.r < 200);
            assert!(color.g < 200);
            assert!(color.b < 200);
        }
    }

    #[test]
    fn test_opacity_variants() {
        let color = FeatureColor { r: 10, g: 20, b: 30 };
        assert_eq!(color.stroke_rgba(), [10, 20, 30, 255]);
        assert_eq!(color.fill_rgba(), [10, 20, 30, 51]);
        assert_eq!(color.marker_rgba(), [10, 20, 30, 204]);
        assert_eq!(color.hex(), "#0a141e");
    }
}
