//! Provenance of loaded replacements.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Where a batch of replacements came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementOrigin {
    Json,
    Inline,
}

/// A contributing replacement source, in merge order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplacementSource {
    pub origin: ReplacementOrigin,

    /// Absolute file path (None for inline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for inline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Number of records this source contributed before merging
    pub count: usize,
}

impl ReplacementSource {
    pub(crate) fn json(path: String, raw: &str, count: usize) -> Self {
        Self {
            origin: ReplacementOrigin::Json,
            path: Some(path),
            digest: Some(hex::encode(Sha256::digest(raw.as_bytes()))),
            count,
        }
    }

    pub(crate) fn inline(count: usize) -> Self {
        Self {
            origin: ReplacementOrigin::Inline,
            path: None,
            digest: None,
            count,
        }
    }
}
