//! Replacement configuration loader
//!
//! Resolves the merged replacement list from:
//! 1. An optional JSON document (top-level array of records)
//! 2. An optional inline list (overrides JSON records by name)

use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::reader::{FileReader, FsReader};
use crate::record::IconReplacement;
use crate::source::ReplacementSource;

/// Prefix carried by every diagnostic this workspace emits.
pub const LOG_TAG: &str = "[replace-antd-icons]";

/// Errors raised while resolving the replacement configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("[replace-antd-icons] Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("[replace-antd-icons] Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("[replace-antd-icons] Failed to parse JSON config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("[replace-antd-icons] Config file {} must contain an array.", .path.display())]
    NotArray { path: PathBuf },

    #[error("[replace-antd-icons] Unable to determine working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Merged replacements plus the sources that contributed to them
#[derive(Debug, Clone, Default)]
pub struct LoadedReplacements {
    /// Records deduplicated by name
    pub replacements: Vec<IconReplacement>,

    /// Contributing sources in precedence order
    pub sources: Vec<ReplacementSource>,
}

impl LoadedReplacements {
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }
}

/// Load replacements relative to the process working directory.
pub fn load(
    config_path: Option<&str>,
    inline: &[IconReplacement],
) -> Result<LoadedReplacements, ConfigError> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    load_with(&FsReader, &cwd, config_path, inline)
}

/// Load replacements through an explicit reader and working directory.
///
/// An empty `config_path` counts as absent. Relative paths resolve against
/// `cwd`; absolute paths are used unchanged.
pub fn load_with<R: FileReader + ?Sized>(
    reader: &R,
    cwd: &Path,
    config_path: Option<&str>,
    inline: &[IconReplacement],
) -> Result<LoadedReplacements, ConfigError> {
    let mut sources = Vec::new();

    let from_json = match config_path.filter(|p| !p.is_empty()) {
        Some(config_path) => {
            let path = cwd.join(config_path);
            let (records, raw) = read_json_array(reader, &path)?;
            sources.push(ReplacementSource::json(
                path.to_string_lossy().to_string(),
                &raw,
                records.len(),
            ));
            records
        }
        None => Vec::new(),
    };

    if !inline.is_empty() {
        sources.push(ReplacementSource::inline(inline.len()));
    }

    Ok(LoadedReplacements {
        replacements: merge_by_name(from_json, inline.iter().cloned()),
        sources,
    })
}

fn read_json_array<R: FileReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<(Vec<IconReplacement>, String), ConfigError> {
    if !reader.exists(path) {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let raw = reader.read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |source: serde_json::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(&raw).map_err(parse_error)?;
    if !value.is_array() {
        return Err(ConfigError::NotArray {
            path: path.to_path_buf(),
        });
    }

    let records: Vec<IconReplacement> = serde_json::from_value(value).map_err(parse_error)?;
    Ok((records, raw))
}

/// Merge two record lists by name.
///
/// Base records are inserted first, then overrides unconditionally replace
/// any record with the same name. A replaced record keeps the slot of the
/// name's first occurrence.
pub fn merge_by_name(
    base: impl IntoIterator<Item = IconReplacement>,
    overrides: impl IntoIterator<Item = IconReplacement>,
) -> Vec<IconReplacement> {
    let mut merged: Vec<IconReplacement> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in base.into_iter().chain(overrides) {
        match index.get(&record.name) {
            Some(&slot) => merged[slot] = record,
            None => {
                index.insert(record.name.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}
