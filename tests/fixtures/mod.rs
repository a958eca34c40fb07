//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use antd_icons_svg_replace::{IconReplacePlugin, MemoryReader, PluginOptions};

/// Directory holding the icon fixtures
pub fn icons_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/icons")
}

/// Replacement file covering outlined, filled, two-tone and a record with
/// no geometry
pub fn custom_icons_path() -> PathBuf {
    icons_dir().join("customAntdIcon.json")
}

/// Replacement file whose top level is an object
pub fn not_array_path() -> PathBuf {
    icons_dir().join("not_array.json")
}

/// TOML plugin options pointing at the custom icon file
pub fn options_toml_path() -> PathBuf {
    icons_dir().join("options.toml")
}

/// Module id as the dev server reports it for an installed icon file
pub fn icon_module_id(name: &str) -> String {
    format!(
        "/home/dev/app/node_modules/.pnpm/@ant-design+icons-svg@4.4.2/node_modules/@ant-design/icons-svg/es/asn/{}.js",
        name
    )
}

/// Build a plugin from options without touching the file system
pub fn plugin_in_memory(options: PluginOptions) -> IconReplacePlugin {
    IconReplacePlugin::with_reader(options, 0, &MemoryReader::new(), Path::new("/work"))
        .expect("plugin construction")
}
