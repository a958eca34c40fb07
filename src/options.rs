//! Plugin options
//!
//! Options are read once when a plugin instance is constructed. They can be
//! built in code, or read from JSON or TOML. A TOML options file looks like:
//!
//! ```toml
//! enable = true
//! log = true
//! configPath = "customAntdIcon.json"
//!
//! [[replacements]]
//! name = "HomeOutlined"
//! d = "M458.112 684.032a64 64 0 0 0 107.776 0z"
//! ```

use std::path::{Path, PathBuf};

use icon_replacements::IconReplacement;
use serde::{Deserialize, Serialize};

/// Errors raised while reading plugin options
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Options file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options accepted by the icon replacement plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Patch the host config (watch globbing, pre-bundling exclusion)
    #[serde(default = "default_true")]
    pub enable: bool,

    /// Emit diagnostics
    #[serde(default = "default_true")]
    pub log: bool,

    /// Inline replacements; these win over the JSON file
    #[serde(default)]
    pub replacements: Vec<IconReplacement>,

    /// JSON replacement file, relative to the working directory
    #[serde(default, alias = "config_path", skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enable: true,
            log: true,
            replacements: Vec::new(),
            config_path: None,
        }
    }
}

impl PluginOptions {
    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        if !path.exists() {
            return Err(OptionsError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn with_replacement(mut self, replacement: IconReplacement) -> Self {
        self.replacements.push(replacement);
        self
    }

    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enable = false;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.log = false;
        self
    }
}
