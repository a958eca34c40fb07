//! Host bundler configuration surface
//!
//! A typed view of the parts of the host's configuration object the plugin
//! reads or patches. Keys the plugin does not know about are carried through
//! untouched so a patch never drops host settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// When a plugin takes part in the host's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Development server only
    Serve,
    /// Production build only
    Build,
}

/// The host's in-progress configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize_deps: Option<OptimizeDepsOptions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchOptions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_globbing: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dependency pre-bundling options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeDepsOptions {
    /// Packages the host must not pre-bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial configuration returned by a plugin's config hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize_deps: Option<OptimizeDepsOptions>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.optimize_deps.is_none()
    }
}

impl HostConfig {
    /// Make sure the dev server watcher keeps globbing enabled.
    pub fn enable_watch_globbing(&mut self) {
        let server = self.server.get_or_insert_with(ServerOptions::default);
        let watch = server.watch.get_or_insert_with(WatchOptions::default);
        watch.disable_globbing = Some(false);
    }

    /// Current pre-bundling exclusions.
    pub fn excluded_deps(&self) -> &[String] {
        self.optimize_deps
            .as_ref()
            .and_then(|deps| deps.exclude.as_deref())
            .unwrap_or(&[])
    }

    /// Whether `package` is already excluded from pre-bundling.
    pub fn is_dep_excluded(&self, package: &str) -> bool {
        self.excluded_deps().iter().any(|dep| dep == package)
    }

    /// Merge a plugin patch back into the configuration.
    ///
    /// Sections present in the patch replace the existing ones.
    pub fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(optimize_deps) = patch.optimize_deps {
            self.optimize_deps = Some(optimize_deps);
        }
    }
}
