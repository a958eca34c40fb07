//! Icon replacement record types.

use serde::{Deserialize, Serialize};

/// Replacement geometry for one icon, keyed by its component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconReplacement {
    /// Icon component name, e.g. `HomeOutlined` or `SettingTwoTone`.
    pub name: String,

    /// SVG path data for single-path icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,

    /// Layered path data for two-tone icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<IconPath>>,
}

/// One layer of a two-tone icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPath {
    pub d: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<PathFill>,
}

/// Which renderer color a two-tone layer is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFill {
    Primary,
    Secondary,
}

impl IconReplacement {
    /// A single-path replacement.
    pub fn single(name: impl Into<String>, d: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            d: Some(d.into()),
            paths: None,
        }
    }

    /// A layered replacement for two-tone icons.
    pub fn two_tone(name: impl Into<String>, paths: Vec<IconPath>) -> Self {
        Self {
            name: name.into(),
            d: None,
            paths: Some(paths),
        }
    }

    /// Single-path data, if present and non-empty.
    pub fn path_data(&self) -> Option<&str> {
        self.d.as_deref().filter(|d| !d.is_empty())
    }

    /// Whether the record carries any usable geometry: non-empty `d`, or
    /// `paths` (an empty layer list still counts).
    pub fn has_geometry(&self) -> bool {
        self.path_data().is_some() || self.paths.is_some()
    }
}

impl IconPath {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            fill: None,
        }
    }

    pub fn filled(d: impl Into<String>, fill: PathFill) -> Self {
        Self {
            d: d.into(),
            fill: Some(fill),
        }
    }
}
