//! Virtual icon file paths
//!
//! Each replacement maps to the module path the icon package would serve
//! for it. Module ids requested by the host are matched against these paths
//! by substring, after both sides are normalized.

/// The icon package whose modules are intercepted.
pub const ICON_PACKAGE: &str = "@ant-design/icons-svg";

/// Normalize a module id: forward slashes, no `.` segments, `..` folded,
/// repeated separators collapsed.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if normalized.is_empty() && !absolute {
        normalized.push('.');
    }
    if trailing && !normalized.is_empty() {
        normalized.push('/');
    }
    if absolute {
        normalized.insert(0, '/');
    }
    normalized
}

/// The virtual module path served for an icon name.
pub fn virtual_file_path(name: &str) -> String {
    normalize_path(&format!("{}/es/asn/{}.js", ICON_PACKAGE, name))
}

/// Ordered map from virtual file path to icon name.
///
/// Built once; lookups only read.
#[derive(Debug, Clone, Default)]
pub struct VirtualFileMap {
    entries: Vec<(String, String)>,
}

impl VirtualFileMap {
    /// Build the map from icon names, in order. A repeated name keeps its
    /// first slot.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for name in names {
            let path = virtual_file_path(name);
            if !entries.iter().any(|(existing, _)| *existing == path) {
                entries.push((path, name.to_string()));
            }
        }
        Self { entries }
    }

    /// Find the icon name whose virtual path occurs in `id`.
    pub fn find(&self, id: &str) -> Option<&str> {
        let normalized = normalize_path(id);
        self.entries
            .iter()
            .find(|(path, _)| normalized.contains(path.as_str()))
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }
}
