//! Declarative configuration for the wrap layout control.

use crate::error::WrapLayoutError;
use flowgrid_layout::{LayoutError, WrapLayoutEngine, DEFAULT_SPACING};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Content alignment inside a cell.
///
/// Stored on the control but not applied by the packing: every child fills
/// its whole cell regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlignment {
    /// Framework default
    #[default]
    Default,
    /// Align to the start edge
    Start,
    /// Center in the cell
    Center,
    /// Align to the end edge
    End,
    /// Fill the cell
    Fill,
}

/// Settings for a [`crate::DynamicWrapLayout`], loadable from YAML.
///
/// ```
/// use flowgrid_widgets::{ContentAlignment, WrapLayoutConfig};
///
/// let config = WrapLayoutConfig::from_yaml("row_spacing: 12\nvertical_content_alignment: center\n")
///     .expect("valid config");
/// assert_eq!(config.column_spacing, 5.0);
/// assert_eq!(config.row_spacing, 12.0);
/// assert_eq!(config.vertical_content_alignment, ContentAlignment::Center);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapLayoutConfig {
    /// Gap between columns
    pub column_spacing: f32,
    /// Gap between rows
    pub row_spacing: f32,
    /// Horizontal alignment of content within a cell
    pub horizontal_content_alignment: ContentAlignment,
    /// Vertical alignment of content within a cell
    pub vertical_content_alignment: ContentAlignment,
}

impl Default for WrapLayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: DEFAULT_SPACING,
            row_spacing: DEFAULT_SPACING,
            horizontal_content_alignment: ContentAlignment::Default,
            vertical_content_alignment: ContentAlignment::Default,
        }
    }
}

impl WrapLayoutConfig {
    /// Parse and validate a YAML config.
    pub fn from_yaml(yaml: &str) -> Result<Self, WrapLayoutError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML config from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WrapLayoutError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| WrapLayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, WrapLayoutError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the spacing values.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.engine().map(drop)
    }

    /// Build a layout engine with these spacings.
    pub fn engine(&self) -> Result<WrapLayoutEngine, LayoutError> {
        WrapLayoutEngine::with_spacing(self.column_spacing, self.row_spacing)
    }
}
