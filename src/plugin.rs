//! Icon replacement plugin
//!
//! The plugin is constructed once per registration. Construction loads and
//! merges the replacement configuration and builds two read-only maps:
//! icon name to record, and virtual file path to icon name. After that the
//! host drives it through two hooks:
//!
//! - `config`: patch the host configuration so icon modules stay watchable
//!   and are never pre-bundled
//! - `load`: return generated source for intercepted icon module ids

use std::collections::HashMap;
use std::path::Path;

use icon_replacements::{
    load_with, ConfigError, FileReader, FsReader, IconReplacement, LoadedReplacements,
    ReplacementSource, LOG_TAG,
};
use tracing::{debug, info, warn};

use crate::codegen::{generate_module, GenerateError};
use crate::host::{ApplyMode, ConfigPatch, HostConfig, OptimizeDepsOptions};
use crate::options::{OptionsError, PluginOptions};
use crate::virtual_path::{VirtualFileMap, ICON_PACKAGE};

/// Base plugin name; instances append `:<n>`.
pub const PLUGIN_NAME: &str = "vite-plugin-ant-design-icons-svg-replace";

/// Errors that abort plugin construction
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Hooks a host bundler drives during development serving.
pub trait DevPlugin {
    /// Unique plugin name within one build graph.
    fn name(&self) -> &str;

    /// Which host mode the plugin takes part in.
    fn apply(&self) -> ApplyMode;

    fn applies_to(&self, mode: ApplyMode) -> bool {
        self.apply() == mode
    }

    /// Adjust the in-progress host config; the returned patch is merged back
    /// by the host.
    fn config(&self, config: &mut HostConfig) -> ConfigPatch;

    /// Produce module source for `id`, or `None` to fall through to the
    /// host's own resolution.
    fn load(&self, id: &str) -> Result<Option<String>, GenerateError>;
}

/// Serves generated icon modules in place of the installed icon package files.
#[derive(Debug, Clone)]
pub struct IconReplacePlugin {
    name: String,
    enable: bool,
    log: bool,
    replacements: HashMap<String, IconReplacement>,
    files: VirtualFileMap,
    sources: Vec<ReplacementSource>,
}

impl IconReplacePlugin {
    /// Construct an instance, reading the replacement file relative to the
    /// process working directory.
    pub fn new(options: PluginOptions, instance: u32) -> Result<Self, PluginError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::with_reader(options, instance, &FsReader, &cwd)
    }

    /// Construct an instance with an explicit reader and working directory.
    pub fn with_reader<R: FileReader + ?Sized>(
        options: PluginOptions,
        instance: u32,
        reader: &R,
        cwd: &Path,
    ) -> Result<Self, PluginError> {
        let loaded = load_with(
            reader,
            cwd,
            options.config_path.as_deref(),
            &options.replacements,
        )?;
        Ok(Self::from_loaded(&options, instance, loaded))
    }

    fn from_loaded(options: &PluginOptions, instance: u32, loaded: LoadedReplacements) -> Self {
        let name = format!("{}:{}", PLUGIN_NAME, instance);

        if loaded.is_empty() && options.log {
            warn!(
                plugin = %name,
                "{} No icon replacements provided. Plugin will do nothing.",
                LOG_TAG
            );
        }

        let files = VirtualFileMap::from_names(loaded.replacements.iter().map(|r| r.name.as_str()));
        let replacements: HashMap<String, IconReplacement> = loaded
            .replacements
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect();

        if options.log {
            for source in &loaded.sources {
                debug!(
                    plugin = %name,
                    origin = ?source.origin,
                    path = source.path.as_deref().unwrap_or("-"),
                    digest = source.digest.as_deref().unwrap_or("-"),
                    count = source.count,
                    "replacement source"
                );
            }
            debug!(plugin = %name, icons = replacements.len(), "icon replacements ready");
        }

        Self {
            name,
            enable: options.enable,
            log: options.log,
            replacements,
            files,
            sources: loaded.sources,
        }
    }

    /// Merged replacement for an icon name.
    pub fn replacement(&self, name: &str) -> Option<&IconReplacement> {
        self.replacements.get(name)
    }

    pub fn replacement_count(&self) -> usize {
        self.replacements.len()
    }

    pub fn virtual_files(&self) -> &VirtualFileMap {
        &self.files
    }

    pub fn sources(&self) -> &[ReplacementSource] {
        &self.sources
    }
}

impl DevPlugin for IconReplacePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self) -> ApplyMode {
        ApplyMode::Serve
    }

    fn config(&self, config: &mut HostConfig) -> ConfigPatch {
        if !self.enable {
            return ConfigPatch::default();
        }

        config.enable_watch_globbing();

        if config.is_dep_excluded(ICON_PACKAGE) {
            return ConfigPatch::default();
        }

        let mut optimize_deps = config.optimize_deps.clone().unwrap_or_default();
        optimize_deps
            .exclude
            .get_or_insert_with(Vec::new)
            .push(ICON_PACKAGE.to_string());

        if self.log {
            info!(plugin = %self.name, package = ICON_PACKAGE, "excluding icon package from pre-bundling");
        }

        ConfigPatch {
            optimize_deps: Some(optimize_deps),
        }
    }

    fn load(&self, id: &str) -> Result<Option<String>, GenerateError> {
        let Some(icon_name) = self.files.find(id) else {
            return Ok(None);
        };
        let Some(replacement) = self.replacements.get(icon_name) else {
            return Ok(None);
        };

        if self.log {
            debug!(plugin = %self.name, id, icon = icon_name, "replacing icon module");
        }

        generate_module(replacement).map(Some)
    }
}

/// Hands out instance numbers to plugins registered in one build graph.
///
/// Numbers start at zero and advance once per successful construction.
#[derive(Debug, Default)]
pub struct PluginRegistrar {
    next_instance: u32,
}

impl PluginRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a plugin instance from options.
    pub fn register(&mut self, options: PluginOptions) -> Result<IconReplacePlugin, PluginError> {
        let plugin = IconReplacePlugin::new(options, self.next_instance)?;
        self.next_instance += 1;
        Ok(plugin)
    }

    /// Construct a plugin instance through an explicit reader and working
    /// directory.
    pub fn register_with<R: FileReader + ?Sized>(
        &mut self,
        options: PluginOptions,
        reader: &R,
        cwd: &Path,
    ) -> Result<IconReplacePlugin, PluginError> {
        let plugin = IconReplacePlugin::with_reader(options, self.next_instance, reader, cwd)?;
        self.next_instance += 1;
        Ok(plugin)
    }

    /// Construct a plugin instance from a TOML options file.
    pub fn register_file(&mut self, path: &Path) -> Result<IconReplacePlugin, PluginError> {
        let options = PluginOptions::load(path)?;
        self.register(options)
    }

    /// Instance number the next registration will receive.
    pub fn next_instance(&self) -> u32 {
        self.next_instance
    }
}
