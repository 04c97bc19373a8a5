use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Line advance as a multiple of the paragraph's first point size
    pub line_height_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_height_factor: 1.2,
        }
    }
}
