//! Ant Design icon SVG replacement for development servers
//!
//! This crate intercepts module loads for `@ant-design/icons-svg` icon files
//! and serves generated modules built from caller-supplied SVG path data, so
//! icon glyphs can be swapped without touching the installed package.

pub mod codegen;
pub mod host;
pub mod naming;
pub mod options;
pub mod plugin;
pub mod virtual_path;

pub use codegen::{generate_module, GenerateError};
pub use host::{ApplyMode, ConfigPatch, HostConfig, OptimizeDepsOptions};
pub use icon_replacements::{
    ConfigError, FileReader, FsReader, IconPath, IconReplacement, MemoryReader, PathFill,
};
pub use naming::{infer_theme, kebab_case, Theme};
pub use options::{OptionsError, PluginOptions};
pub use plugin::{DevPlugin, IconReplacePlugin, PluginError, PluginRegistrar, PLUGIN_NAME};
pub use virtual_path::{normalize_path, virtual_file_path, VirtualFileMap, ICON_PACKAGE};
