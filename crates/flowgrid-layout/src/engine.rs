//! Wrap layout engine.
//!
//! Packs visible children left to right into uniform cells and wraps to a new
//! row when the width runs out. Results are memoized per exact constraint box;
//! callers clear the cache whenever the children or their natural sizes change.

use flowgrid_core::{Measurable, Point, Rect, Size};
use std::cell::RefCell;
use tracing::{debug, trace};

use crate::cache::{CacheKey, LayoutCache};
use crate::error::{validate_spacing, Axis, LayoutError};
use crate::layout_data::LayoutData;

/// Default gap between columns and between rows.
pub const DEFAULT_SPACING: f32 = 5.0;

/// Smallest child width used when counting columns.
///
/// Keeps the column divisor positive when every visible child reports zero
/// width and the column spacing is zero.
pub const MIN_CELL_EXTENT: f32 = 1.0;

/// Where one child goes in the arranged grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the child in the collection passed to `arrange`
    pub index: usize,
    /// Cell assigned to the child
    pub bounds: Rect,
}

/// Uniform-cell wrap layout with memoization.
///
/// The cache sits behind a `RefCell` so measuring works through `&self`, like
/// every other measure in the view tree. The engine is single-threaded.
#[derive(Debug)]
pub struct WrapLayoutEngine {
    column_spacing: f32,
    row_spacing: f32,
    cache: RefCell<LayoutCache>,
}

impl Default for WrapLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_unbounded(extent: f32) -> bool {
    extent == f32::INFINITY
}

impl WrapLayoutEngine {
    /// Create an engine with the default spacing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            column_spacing: DEFAULT_SPACING,
            row_spacing: DEFAULT_SPACING,
            cache: RefCell::new(LayoutCache::new()),
        }
    }

    /// Create an engine with explicit spacing.
    pub fn with_spacing(column_spacing: f32, row_spacing: f32) -> Result<Self, LayoutError> {
        Ok(Self {
            column_spacing: validate_spacing(Axis::Column, column_spacing)?,
            row_spacing: validate_spacing(Axis::Row, row_spacing)?,
            cache: RefCell::new(LayoutCache::new()),
        })
    }

    /// Gap between columns.
    #[must_use]
    pub const fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    /// Gap between rows.
    #[must_use]
    pub const fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Set the column gap. Clears the cache if the value changed.
    pub fn set_column_spacing(&mut self, spacing: f32) -> Result<(), LayoutError> {
        let spacing = validate_spacing(Axis::Column, spacing)?;
        if spacing != self.column_spacing {
            self.column_spacing = spacing;
            self.invalidate();
        }
        Ok(())
    }

    /// Set the row gap. Clears the cache if the value changed.
    pub fn set_row_spacing(&mut self, spacing: f32) -> Result<(), LayoutError> {
        let spacing = validate_spacing(Axis::Row, spacing)?;
        if spacing != self.row_spacing {
            self.row_spacing = spacing;
            self.invalidate();
        }
        Ok(())
    }

    /// Drop every cached layout.
    pub fn invalidate(&self) {
        let mut cache = self.cache.borrow_mut();
        if !cache.is_empty() {
            debug!(entries = cache.len(), "clearing wrap layout cache");
        }
        cache.clear();
    }

    /// Number of cached constraint boxes.
    #[must_use]
    pub fn cached_layouts(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Cache hits and misses since the last invalidation.
    #[must_use]
    pub fn cache_stats(&self) -> (usize, usize) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }

    /// Compute (or fetch) the packing of `children` into `available`.
    ///
    /// Either dimension of `available` may be `f32::INFINITY`.
    pub fn compute_layout<M: Measurable>(&self, children: &[M], available: Size) -> LayoutData {
        let key = CacheKey::new(available);
        if let Some(data) = self.cache.borrow_mut().get(key) {
            trace!(
                width = available.width,
                height = available.height,
                "wrap layout cache hit"
            );
            return data;
        }

        let data = self.pack(children, available);
        self.cache.borrow_mut().insert(key, data);
        data
    }

    fn pack<M: Measurable>(&self, children: &[M], available: Size) -> LayoutData {
        let mut visible = 0usize;
        let mut max_child = Size::ZERO;

        for child in children.iter().filter(|c| c.is_visible()) {
            visible += 1;
            max_child = max_child.max(child.natural_size());
        }

        if visible == 0 {
            debug!(
                width = available.width,
                height = available.height,
                "no visible children"
            );
            return LayoutData::EMPTY;
        }

        let (columns, rows) = if is_unbounded(available.width) {
            (visible, 1)
        } else {
            let per_column = max_child.width.max(MIN_CELL_EXTENT) + self.column_spacing;
            let fit = ((available.width + self.column_spacing) / per_column).floor() as usize;
            let columns = fit.max(1);
            (columns, visible.div_ceil(columns))
        };

        let cell_width = if is_unbounded(available.width) {
            max_child.width
        } else {
            (available.width - self.column_spacing * (columns - 1) as f32) / columns as f32
        };
        let cell_height = if is_unbounded(available.height) {
            max_child.height
        } else {
            (available.height - self.row_spacing * (rows - 1) as f32) / rows as f32
        };

        debug!(
            width = available.width,
            height = available.height,
            visible,
            columns,
            rows,
            cell_width,
            cell_height,
            "computed wrap layout"
        );

        LayoutData::new(visible, Size::new(cell_width, cell_height), rows, columns)
    }

    /// Size the grid requests for the given constraint box.
    ///
    /// Returns `Size::ZERO` when no child is visible.
    pub fn measure<M: Measurable>(&self, children: &[M], available: Size) -> Size {
        self.compute_layout(children, available)
            .total_size(self.column_spacing, self.row_spacing)
    }

    /// Assign a cell to every visible child inside `bounds`.
    ///
    /// Invisible children consume no slot. Placements come back in child order.
    pub fn arrange<M: Measurable>(&self, children: &[M], bounds: Rect) -> Vec<Placement> {
        let data = self.compute_layout(children, bounds.size());
        if data.is_empty() {
            return Vec::new();
        }

        let cell = data.cell_size();
        let mut placements = Vec::with_capacity(data.visible_child_count());
        let mut x = bounds.x;
        let mut y = bounds.y;
        let mut column = 0usize;

        for (index, child) in children.iter().enumerate() {
            if !child.is_visible() {
                continue;
            }

            placements.push(Placement {
                index,
                bounds: Rect::from_origin_size(Point::new(x, y), cell),
            });

            column += 1;
            if column == data.columns() {
                column = 0;
                x = bounds.x;
                y += cell.height + self.row_spacing;
            } else {
                x += cell.width + self.column_spacing;
            }
        }

        placements
    }
}
