//! Render configuration loadable from TOML
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! [grid]
//! spacing_mm = 5.0
//! color = "#dddddd"
//!
//! [selection]
//! color = "#ff0000"
//!
//! [text]
//! font_family = "Helvetica"
//!
//! [svg]
//! pretty_print = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::LabelError;
use crate::renderer::SvgConfig;
use crate::style::Color;

/// Reference grid drawn under the elements
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub enabled: bool,
    /// Distance between grid lines in millimeters
    pub spacing_mm: f64,
    pub color: Color,
    pub line_width: f64,
    pub dash: Vec<f64>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing_mm: 10.0,
            color: Color::new("#e0e0e0"),
            line_width: 0.5,
            dash: vec![2.0, 2.0],
        }
    }
}

/// Outline drawn around the selected element
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectionStyle {
    pub color: Color,
    pub line_width: f64,
    pub dash: Vec<f64>,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            color: Color::new("#0066ff"),
            line_width: 2.0,
            dash: vec![5.0, 5.0],
        }
    }
}

/// Values used for style attributes an element leaves unset
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub font_size: f64,
    pub font_family: String,
    pub color: Color,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "Arial".to_string(),
            color: Color::black(),
        }
    }
}

/// Configuration for the render pipeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub grid: GridStyle,
    pub selection: SelectionStyle,
    pub text: TextDefaults,
    pub svg: SvgConfig,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LabelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, LabelError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }

    /// Turn the reference grid on or off
    pub fn with_grid_enabled(mut self, enabled: bool) -> Self {
        self.grid.enabled = enabled;
        self
    }

    pub fn with_selection(mut self, selection: SelectionStyle) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_text(mut self, text: TextDefaults) -> Self {
        self.text = text;
        self
    }

    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_is_default() {
        let config = RenderConfig::from_toml("").expect("Should parse");
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml_str = r##"
[grid]
spacing_mm = 5.0

[text]
font_family = "Helvetica"

[svg]
pretty_print = false
"##;
        let config = RenderConfig::from_toml(toml_str).expect("Should parse");
        assert_eq!(config.grid.spacing_mm, 5.0);
        assert_eq!(config.grid.color, Color::new("#e0e0e0"));
        assert_eq!(config.text.font_family, "Helvetica");
        assert_eq!(config.text.font_size, 12.0);
        assert!(!config.svg.pretty_print);
        assert!(config.svg.standalone);
        assert_eq!(config.selection, SelectionStyle::default());
    }

    #[test]
    fn test_background_override() {
        let config = RenderConfig::from_toml("[svg]\nbackground = \"#fafafa\"").unwrap();
        assert_eq!(config.svg.background, Some(Color::new("#fafafa")));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = RenderConfig::from_toml("this is not valid toml {{{{");
        assert!(matches!(result, Err(LabelError::Config(_))));
    }

    #[test]
    fn test_wrong_type_error() {
        let result = RenderConfig::from_toml("[grid]\nspacing_mm = \"wide\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new().with_grid_enabled(false);
        assert!(!config.grid.enabled);
    }
}
