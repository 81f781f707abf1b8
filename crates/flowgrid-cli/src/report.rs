//! Layout report printed by the CLI.

use flowgrid_core::{Rect, Size, View};
use flowgrid_layout::LayoutData;
use flowgrid_widgets::DynamicWrapLayout;
use serde::Serialize;
use std::fmt::Write as _;

/// One placed tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlacedTile {
    pub(crate) index: usize,
    pub(crate) label: String,
    pub(crate) bounds: Rect,
}

/// Everything one measure and layout pass produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LayoutReport {
    pub(crate) available: Size,
    pub(crate) requested: Size,
    pub(crate) layout: LayoutData,
    pub(crate) placements: Vec<PlacedTile>,
}

impl LayoutReport {
    /// Collect the placements of a grid that has already been laid out.
    pub(crate) fn collect(
        grid: &DynamicWrapLayout<String>,
        available: Size,
        requested: Size,
        layout: LayoutData,
    ) -> Self {
        let labels = grid.items().unwrap_or_default();
        let placements = grid
            .children()
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_visible())
            .map(|(index, child)| PlacedTile {
                index,
                label: labels.get(index).cloned().unwrap_or_default(),
                bounds: child.bounds(),
            })
            .collect();

        Self {
            available,
            requested,
            layout,
            placements,
        }
    }

    pub(crate) fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "available: {} x {}",
            fmt_extent(self.available.width),
            fmt_extent(self.available.height)
        );
        let _ = writeln!(
            out,
            "requested: {:.2} x {:.2}",
            self.requested.width, self.requested.height
        );
        let _ = writeln!(
            out,
            "grid: {} visible, {} columns x {} rows, cell {:.2} x {:.2}",
            self.layout.visible_child_count(),
            self.layout.columns(),
            self.layout.rows(),
            self.layout.cell_size().width,
            self.layout.cell_size().height
        );
        for tile in &self.placements {
            let _ = writeln!(
                out,
                "  [{:>3}] {:<6} at ({:.2}, {:.2})",
                tile.index, tile.label, tile.bounds.x, tile.bounds.y
            );
        }
        out
    }

    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn fmt_extent(extent: f32) -> String {
    if extent.is_finite() {
        format!("{extent:.2}")
    } else {
        "unbounded".to_string()
    }
}
