use anyhow::anyhow;
use livepdf_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "livepdf.config.json";

/// LivePDF configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Longest paragraph text printed before it is cut short
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,

    /// Parser, layout and editing tunables
    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_preview_width() -> usize {
    72
}

impl Config {
    /// Load `explicit` if given, else `livepdf.config.json` from `cwd` if present
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => {
                return Err(anyhow!("Config file does not exist: {}", path.display()));
            }
            Some(path) => path.to_path_buf(),
            None => cwd.join(DEFAULT_CONFIG_NAME),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content).map_err(|e| anyhow!("Invalid config {}: {}", config_path.display(), e))
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_width: default_preview_width(),
            editor: EditorConfig::default(),
        }
    }
}
