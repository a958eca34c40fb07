//! Icon replacement records and their configuration loader.
//!
//! Replacements come from two places: an optional JSON document on disk
//! and an optional inline list supplied by the caller. Both are merged by
//! icon name, inline entries taking precedence.

mod loader;
mod reader;
mod record;
mod source;

pub use loader::{load, load_with, merge_by_name, ConfigError, LoadedReplacements, LOG_TAG};
pub use reader::{FileReader, FsReader, MemoryReader};
pub use record::{IconPath, IconReplacement, PathFill};
pub use source::{ReplacementOrigin, ReplacementSource};
