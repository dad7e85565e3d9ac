use crate::document::Device;
use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "pagekit.editor.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum undo/redo snapshots kept per session (0 = unlimited)
    #[serde(default)]
    pub history_limit: usize,

    /// Device a fresh or reloaded document starts on
    #[serde(default)]
    pub default_device: Device,
}

impl EditorConfig {
    /// Load config from a directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, EditorError> {
        let config_path = dir.as_ref().join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            // Return default config if none exists
            Ok(Self::default())
        }
    }

    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        serde_json::from_str(source).map_err(|e| EditorError::Config(e.to_string()))
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: 0,
            default_device: Device::Desktop,
        }
    }
}
