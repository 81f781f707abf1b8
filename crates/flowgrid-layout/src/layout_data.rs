//! Result of one wrap layout computation.

use flowgrid_core::Size;
use serde::{Deserialize, Serialize};

/// How the visible children are packed for one constraint box.
///
/// Every visible child gets the same `cell_size`. An empty value (no visible
/// children) has all fields zero and claims no space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutData {
    visible_child_count: usize,
    cell_size: Size,
    rows: usize,
    columns: usize,
}

impl LayoutData {
    /// Layout with no visible children.
    pub const EMPTY: Self = Self {
        visible_child_count: 0,
        cell_size: Size::ZERO,
        rows: 0,
        columns: 0,
    };

    /// Create populated layout data.
    #[must_use]
    pub const fn new(visible_child_count: usize, cell_size: Size, rows: usize, columns: usize) -> Self {
        Self {
            visible_child_count,
            cell_size,
            rows,
            columns,
        }
    }

    /// Same as [`LayoutData::EMPTY`].
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Number of children that took part in the layout.
    #[must_use]
    pub const fn visible_child_count(&self) -> usize {
        self.visible_child_count
    }

    /// Uniform size of every cell.
    #[must_use]
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Whether no child is visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.visible_child_count == 0
    }

    /// Total size of the grid including the gaps between cells.
    #[must_use]
    pub fn total_size(&self, column_spacing: f32, row_spacing: f32) -> Size {
        if self.is_empty() {
            return Size::ZERO;
        }

        let columns = self.columns as f32;
        let rows = self.rows as f32;
        Size::new(
            self.cell_size.width * columns + column_spacing * (columns - 1.0),
            self.cell_size.height * rows + row_spacing * (rows - 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_data_empty() {
        let data = LayoutData::empty();
        assert!(data.is_empty());
        assert_eq!(data, LayoutData::default());
        assert_eq!(data.cell_size(), Size::ZERO);
        assert_eq!(data.rows(), 0);
        assert_eq!(data.columns(), 0);
    }

    #[test]
    fn test_layout_data_accessors() {
        let data = LayoutData::new(7, Size::new(10.0, 20.0), 3, 3);
        assert_eq!(data.visible_child_count(), 7);
        assert_eq!(data.cell_size(), Size::new(10.0, 20.0));
        assert_eq!(data.rows(), 3);
        assert_eq!(data.columns(), 3);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_total_size_includes_gaps() {
        let data = LayoutData::new(4, Size::new(10.0, 20.0), 2, 2);
        assert_eq!(data.total_size(5.0, 3.0), Size::new(25.0, 43.0));
    }

    #[test]
    fn test_total_size_single_cell_has_no_gap() {
        let data = LayoutData::new(1, Size::new(10.0, 20.0), 1, 1);
        assert_eq!(data.total_size(100.0, 100.0), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_total_size_empty_is_zero() {
        assert_eq!(LayoutData::EMPTY.total_size(5.0, 5.0), Size::ZERO);
    }

    #[test]
    fn test_layout_data_serializes() {
        let data = LayoutData::new(2, Size::new(1.5, 2.5), 1, 2);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"visible_child_count\":2"));
        let back: LayoutData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
