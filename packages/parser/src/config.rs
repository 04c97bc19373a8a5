use serde::{Deserialize, Serialize};

/// Thresholds for line grouping and paragraph segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentationConfig {
    /// Decimal places baselines are rounded to when grouping lines
    pub baseline_precision: i32,

    /// A baseline gap above `factor × tallest glyph of the previous line` starts a paragraph
    pub blank_line_factor: f64,

    /// Point size growth (in points) that counts as a style change
    pub point_size_tolerance: f64,

    /// Maximum edge deviation for two lines to count as aligned
    pub alignment_tolerance: f64,

    /// Character width assumed when a paragraph has no glyphs to average
    pub fallback_char_width: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            baseline_precision: 1,
            blank_line_factor: 1.8,
            point_size_tolerance: 1.0,
            alignment_tolerance: 1.0,
            fallback_char_width: 10.0,
        }
    }
}

impl SegmentationConfig {
    /// Integer bucket for a baseline Y
    pub fn baseline_key(&self, y: f64) -> i64 {
        let scale = 10f64.powi(self.baseline_precision);
        (y * scale).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_key_rounds_to_one_decimal() {
        let config = SegmentationConfig::default();
        assert_eq!(config.baseline_key(700.04), config.baseline_key(699.96));
        assert_ne!(config.baseline_key(700.0), config.baseline_key(700.2));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SegmentationConfig = serde_json::from_str(r#"{"blankLineFactor": 2.5}"#).unwrap();
        assert_eq!(config.blank_line_factor, 2.5);
        assert_eq!(config.alignment_tolerance, 1.0);
    }
}
