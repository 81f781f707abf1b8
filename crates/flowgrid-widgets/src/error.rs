//! Error types for the wrap layout control.

use flowgrid_layout::LayoutError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::DynamicWrapLayout`] and its configuration.
#[derive(Debug, Error)]
pub enum WrapLayoutError {
    /// Spacing rejected by the layout engine
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Items were bound but there is no template to turn them into views
    #[error("items source has {items} items but no item template is set")]
    MissingTemplate {
        /// Number of items waiting to be materialized
        items: usize,
    },

    /// YAML parsing error
    #[error("invalid wrap layout config: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgrid_layout::Axis;

    #[test]
    fn test_wrap_layout_error_display() {
        let err = WrapLayoutError::MissingTemplate { items: 3 };
        assert_eq!(
            err.to_string(),
            "items source has 3 items but no item template is set"
        );

        let err: WrapLayoutError = LayoutError::InvalidSpacing {
            axis: Axis::Column,
            value: -1.0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid column spacing -1: must be finite and non-negative"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = WrapLayoutError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read config missing.yaml"));
        assert!(err.source().is_some());
    }
}
