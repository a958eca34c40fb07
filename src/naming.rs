//! Icon name handling
//!
//! Splits an icon component name into its theme suffix and base name, and
//! converts base names to the kebab-case form the icon modules export.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Icon theme, as implied by the component name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Outlined,
    Filled,
    TwoTone,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Outlined => "outlined",
            Theme::Filled => "filled",
            Theme::TwoTone => "two-tone",
        }
    }

    /// The theme value exported by layered icon modules (no hyphen).
    pub fn module_value(&self) -> &'static str {
        match self {
            Theme::TwoTone => "twotone",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suffixes in match order; the first hit wins.
const THEME_SUFFIXES: &[(&str, Theme)] = &[
    ("Filled", Theme::Filled),
    ("TwoTone", Theme::TwoTone),
    ("Outlined", Theme::Outlined),
];

/// Infer the theme and base name of an icon component.
///
/// Names without a known suffix are outlined and keep their full name.
pub fn infer_theme(name: &str) -> (Theme, &str) {
    THEME_SUFFIXES
        .iter()
        .find_map(|&(suffix, theme)| name.strip_suffix(suffix).map(|base| (theme, base)))
        .unwrap_or((Theme::Outlined, name))
}

fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"))
}

fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("static regex"))
}

/// Convert a camelCase or PascalCase identifier to kebab-case.
///
/// `HomeOutlined` becomes `home-outlined`, `HTMLButton` becomes `html-button`.
pub fn kebab_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let step = camel_boundary().replace_all(s, "${1}-${2}");
    acronym_boundary()
        .replace_all(&step, "${1}-${2}")
        .to_lowercase()
}
