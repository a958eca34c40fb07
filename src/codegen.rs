//! Icon module source generation
//!
//! Produces the text of an ES module whose default export has the shape of
//! an `@ant-design/icons-svg` icon definition:
//!
//! - `icon`: a static node tree, or for two-tone icons a
//!   `render(primaryColor, secondaryColor)` function returning one
//! - `name`: kebab-case base name
//! - `theme`: `outlined`, `filled` or `twotone`

use std::fmt::Write;

use icon_replacements::{IconPath, IconReplacement, PathFill};
use serde_json::Value;

use crate::naming::{infer_theme, kebab_case, Theme};

/// Header line of every generated module.
pub const GENERATED_MARKER: &str = "// Auto-replaced by replace-antd-icons plugin";

/// Local binding of the exported icon definition.
const BINDING: &str = "icon";

const VIEW_BOX: &str = "64 64 896 896";

/// Errors raised while generating an icon module
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("[replace-antd-icons] Icon {name} must have either 'd' or 'paths' property")]
    MissingGeometry { name: String },

    #[error("[replace-antd-icons] Failed to write module source: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Generate the replacement module for one icon.
///
/// Two-tone names with `paths` get a renderer; otherwise a non-empty `d`
/// yields a static tree. A record with neither usable form is an error.
pub fn generate_module(replacement: &IconReplacement) -> Result<String, GenerateError> {
    let missing = || GenerateError::MissingGeometry {
        name: replacement.name.clone(),
    };
    if !replacement.has_geometry() {
        return Err(missing());
    }

    let (theme, base_name) = infer_theme(&replacement.name);
    let name = kebab_case(base_name);

    match (&replacement.paths, replacement.path_data()) {
        (Some(paths), _) if theme == Theme::TwoTone => render_two_tone(&name, theme, paths),
        (_, Some(d)) => render_static(&name, theme, d),
        _ => Err(missing()),
    }
}

fn render_static(name: &str, theme: Theme, d: &str) -> Result<String, GenerateError> {
    let mut src = String::new();

    writeln!(src, "{}", GENERATED_MARKER)?;
    writeln!(src, "var {} = {{", BINDING)?;
    writeln!(src, "  \"icon\": {{")?;
    writeln!(src, "    \"tag\": \"svg\",")?;
    writeln!(src, "    \"attrs\": {},", svg_attrs())?;
    writeln!(src, "    \"children\": [{}]", path_node(d, None))?;
    writeln!(src, "  }},")?;
    writeln!(src, "  \"name\": {},", js_string(name))?;
    writeln!(src, "  \"theme\": {}", js_string(theme.as_str()))?;
    writeln!(src, "}};")?;
    writeln!(src, "export default {};", BINDING)?;

    Ok(src)
}

fn render_two_tone(name: &str, theme: Theme, paths: &[IconPath]) -> Result<String, GenerateError> {
    let children = paths
        .iter()
        .map(|path| path_node(&path.d, path.fill))
        .collect::<Vec<_>>()
        .join(", ");

    let mut src = String::new();

    writeln!(src, "{}", GENERATED_MARKER)?;
    writeln!(src, "var {} = {{", BINDING)?;
    writeln!(src, "  \"icon\": function render(primaryColor, secondaryColor) {{")?;
    writeln!(src, "    return {{")?;
    writeln!(src, "      \"tag\": \"svg\",")?;
    writeln!(src, "      \"attrs\": {},", svg_attrs())?;
    writeln!(src, "      \"children\": [{}]", children)?;
    writeln!(src, "    }};")?;
    writeln!(src, "  }},")?;
    writeln!(src, "  \"name\": {},", js_string(name))?;
    writeln!(src, "  \"theme\": {}", js_string(theme.module_value()))?;
    writeln!(src, "}};")?;
    writeln!(src, "export default {};", BINDING)?;

    Ok(src)
}

fn svg_attrs() -> String {
    format!(
        "{{ \"viewBox\": {}, \"focusable\": \"false\" }}",
        js_string(VIEW_BOX)
    )
}

fn path_node(d: &str, fill: Option<PathFill>) -> String {
    let fill = match fill {
        Some(PathFill::Primary) => ", \"fill\": primaryColor",
        Some(PathFill::Secondary) => ", \"fill\": secondaryColor",
        None => "",
    };
    format!(
        "{{ \"tag\": \"path\", \"attrs\": {{ \"d\": {}{} }} }}",
        js_string(d),
        fill
    )
}

/// Quote a value as a string literal that is valid in both JSON and JS.
fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_outlined_module() {
        let src = generate_module(&IconReplacement::single("HomeOutlined", "M0 0")).unwrap();

        let expected = concat!(
            "// Auto-replaced by replace-antd-icons plugin\n",
            "var icon = {\n",
            "  \"icon\": {\n",
            "    \"tag\": \"svg\",\n",
            "    \"attrs\": { \"viewBox\": \"64 64 896 896\", \"focusable\": \"false\" },\n",
            "    \"children\": [{ \"tag\": \"path\", \"attrs\": { \"d\": \"M0 0\" } }]\n",
            "  },\n",
            "  \"name\": \"home\",\n",
            "  \"theme\": \"outlined\"\n",
            "};\n",
            "export default icon;\n",
        );
        assert_eq!(src, expected);
    }

    #[test]
    fn test_filled_module_strips_suffix() {
        let src = generate_module(&IconReplacement::single("HomeFilled", "M0 0")).unwrap();
        assert!(src.contains("\"name\": \"home\""));
        assert!(src.contains("\"theme\": \"filled\""));
        assert!(src.contains("export default icon;"));
    }

    #[test]
    fn test_two_tone_module() {
        let src = generate_module(&IconReplacement::two_tone(
            "SettingTwoTone",
            vec![
                IconPath::filled("M1", PathFill::Primary),
                IconPath::filled("M2", PathFill::Secondary),
            ],
        ))
        .unwrap();

        assert!(src.contains("function render(primaryColor, secondaryColor)"));
        assert!(src.contains(
            "\"children\": [{ \"tag\": \"path\", \"attrs\": { \"d\": \"M1\", \"fill\": primaryColor } }, \
             { \"tag\": \"path\", \"attrs\": { \"d\": \"M2\", \"fill\": secondaryColor } }]"
        ));
        assert!(src.contains("\"name\": \"setting\""));
        assert!(src.contains("\"theme\": \"twotone\""));
    }

    #[test]
    fn test_two_tone_path_without_fill() {
        let src = generate_module(&IconReplacement::two_tone(
            "BellTwoTone",
            vec![IconPath::new("M9")],
        ))
        .unwrap();
        assert!(src.contains("{ \"tag\": \"path\", \"attrs\": { \"d\": \"M9\" } }"));
        assert!(!src.contains("\"fill\""));
    }

    #[test]
    fn test_two_tone_name_with_only_d_is_static() {
        let src = generate_module(&IconReplacement::single("BellTwoTone", "M0")).unwrap();
        assert!(!src.contains("function render"));
        // Static form keeps the hyphenated theme
        assert!(src.contains("\"theme\": \"two-tone\""));
    }

    #[test]
    fn test_paths_ignored_for_single_theme() {
        let record = IconReplacement {
            name: "HomeOutlined".to_string(),
            d: Some("M0".to_string()),
            paths: Some(vec![IconPath::new("M1")]),
        };
        let src = generate_module(&record).unwrap();
        assert!(!src.contains("function render"));
        assert!(src.contains("\"d\": \"M0\""));
        assert!(!src.contains("\"d\": \"M1\""));
    }

    #[test]
    fn test_missing_geometry() {
        let record = IconReplacement {
            name: "GhostOutlined".to_string(),
            d: None,
            paths: None,
        };
        let err = generate_module(&record).unwrap_err();
        assert!(matches!(err, GenerateError::MissingGeometry { ref name } if name == "GhostOutlined"));
        assert!(err.to_string().contains("GhostOutlined"));
    }

    #[test]
    fn test_empty_d_is_missing_geometry() {
        let err = generate_module(&IconReplacement::single("HomeOutlined", "")).unwrap_err();
        assert!(matches!(err, GenerateError::MissingGeometry { ref name } if name == "HomeOutlined"));
    }

    #[test]
    fn test_empty_d_with_paths_on_two_tone() {
        let record = IconReplacement {
            name: "BellTwoTone".to_string(),
            d: Some(String::new()),
            paths: Some(vec![IconPath::new("M1")]),
        };
        let src = generate_module(&record).unwrap();
        assert!(src.contains("function render"));
    }

    #[test]
    fn test_empty_paths_accepted_for_two_tone() {
        let src = generate_module(&IconReplacement::two_tone("BellTwoTone", vec![])).unwrap();
        assert!(src.contains("\"children\": []"));
    }

    #[test]
    fn test_paths_only_for_single_theme_is_missing_geometry() {
        let record = IconReplacement::two_tone("HomeOutlined", vec![IconPath::new("M1")]);
        assert!(matches!(
            generate_module(&record),
            Err(GenerateError::MissingGeometry { .. })
        ));
    }

    #[test]
    fn test_path_data_is_escaped() {
        let src = generate_module(&IconReplacement::single("QuoteOutlined", "M0 \"0\"\n")).unwrap();
        assert!(src.contains(r#""d": "M0 \"0\"\n""#));
    }

    #[test]
    fn test_no_suffix_name() {
        let src = generate_module(&IconReplacement::single("ArrowUpDown", "M0")).unwrap();
        assert!(src.contains("\"name\": \"arrow-up-down\""));
        assert!(src.contains("\"theme\": \"outlined\""));
    }

    #[test]
    fn test_reserved_word_names_still_valid() {
        for name in ["default", "class", "3dOutlined", "my-icon"] {
            let src = generate_module(&IconReplacement::single(name, "M0")).unwrap();
            assert!(src.contains("var icon = {"));
            assert!(src.ends_with("export default icon;\n"));
        }
    }
}
