use livepdf_layout::LayoutConfig;
use livepdf_parser::SegmentationConfig;
use serde::{Deserialize, Serialize};

/// Tunables for the whole editing pipeline: parse → layout → edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Half-height of the band around a baseline that accepts clicks
    pub hit_test_band: f64,

    /// Width of the caret rectangle
    pub caret_width: f64,

    pub segmentation: SegmentationConfig,
    pub layout: LayoutConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_test_band: 20.0,
            caret_width: 1.0,
            segmentation: SegmentationConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_config_from_json() {
        let json = r#"{
            "hitTestBand": 12,
            "layout": { "lineHeightFactor": 1.5 },
            "segmentation": { "blankLineFactor": 2.0 }
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hit_test_band, 12.0);
        assert_eq!(config.caret_width, 1.0);
        assert_eq!(config.layout.line_height_factor, 1.5);
        assert_eq!(config.segmentation.blank_line_factor, 2.0);
        assert_eq!(config.segmentation.point_size_tolerance, 1.0);
    }
}
