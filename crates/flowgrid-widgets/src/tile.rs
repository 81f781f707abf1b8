//! Tile widget: a labelled fixed-size cell.

use flowgrid_core::{Constraints, LayoutResult, Rect, Size, View};
use serde::Serialize;

/// Preferred size of a tile when none is given.
pub const DEFAULT_TILE_SIZE: Size = Size::new(50.0, 50.0);

/// A labelled view with a fixed preferred size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    /// Text shown in the tile
    label: String,
    /// Natural size
    preferred: Size,
    /// Visibility flag
    visible: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Bounds from the last layout pass
    #[serde(skip)]
    bounds: Rect,
}

impl Tile {
    /// Create a visible tile with the default size.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            preferred: DEFAULT_TILE_SIZE,
            visible: true,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the preferred size.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.preferred = Size::new(width, height);
        self
    }

    /// Set the initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the preferred size.
    #[must_use]
    pub const fn preferred_size(&self) -> Size {
        self.preferred
    }
}

impl View for Tile {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
