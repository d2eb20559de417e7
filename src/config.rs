//! Grid configuration files.
//!
//! ```toml
//! border = "rounded"
//!
//! [viewport]
//! width = 80
//! height = 24
//!
//! [margins]
//! left = 5
//! right = 5
//! top = 2
//! bottom = 2
//! ```
//!
//! Every key is optional. Without `[viewport]` the console size is used;
//! without `border` no border is drawn.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::Margins;

/// Serializable description of a [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Catalog style name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Fixed viewport; absent means console size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportConfig>,
    #[serde(default)]
    pub margins: MarginsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarginsConfig {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl From<MarginsConfig> for Margins {
    fn from(m: MarginsConfig) -> Self {
        Margins {
            left: m.left,
            right: m.right,
            top: m.top,
            bottom: m.bottom,
        }
    }
}

impl GridConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded grid config from {}", path.as_ref().display());
        Self::from_toml_str(&contents)
    }

    /// Apply this configuration to an existing grid.
    ///
    /// The border name is checked first, so an unknown style leaves the grid
    /// untouched.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), ConfigError> {
        if let Some(name) = &self.border {
            grid.uniform_border_named(name)?;
        }
        if let Some(ViewportConfig { width, height }) = self.viewport {
            grid.set_viewport(width, height);
        }
        grid.set_margins(self.margins.into());
        Ok(())
    }

    /// Build a console-backed grid from this configuration.
    pub fn to_grid(&self) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new();
        self.apply(&mut grid)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::types::{BorderStyle, Viewport};

    #[test]
    fn test_full_config() {
        let config = GridConfig::from_toml_str(
            r#"
            border = "rounded"

            [viewport]
            width = 80
            height = 24

            [margins]
            left = 5
            right = 5
            top = 2
            bottom = 2
            "#,
        )
        .unwrap();

        let grid = config.to_grid().unwrap();
        assert_eq!(grid.viewport(), Some(Viewport::new(80, 24)));
        assert_eq!(
            grid.margins(),
            Margins {
                left: 5,
                right: 5,
                top: 2,
                bottom: 2,
            }
        );
        assert_eq!(grid.border(), Some(BorderStyle::Rounded));

        let buffer = grid.invoke_render().unwrap();
        assert_eq!(buffer.glyph_at(74, 2), Some('╮'));
    }

    #[test]
    fn test_empty_config_is_default_grid() {
        let config = GridConfig::from_toml_str("").unwrap();
        assert_eq!(config, GridConfig::default());

        let grid = config.to_grid().unwrap();
        assert_eq!(grid.viewport(), None);
        assert_eq!(grid.border(), None);
    }

    #[test]
    fn test_partial_margins() {
        let config = GridConfig::from_toml_str("[margins]\nleft = 20\n").unwrap();
        assert_eq!(config.margins.left, 20);
        assert_eq!(config.margins.bottom, 0);
    }

    #[test]
    fn test_unknown_style_in_config() {
        let config = GridConfig::from_toml_str("border = \"wavy\"").unwrap();
        let err = config.to_grid().unwrap_err();
        assert!(matches!(err, ConfigError::Grid(GridError::UnknownStyle(name)) if name == "wavy"));
    }

    #[test]
    fn test_rejects_unknown_keys_and_negative_margins() {
        assert!(matches!(
            GridConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("[margins]\nleft = -1\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = GridConfig::load("/nonexistent/menuify/grid.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
