#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::doc_markdown)]
//! Wrap layout engine for flowgrid.
//!
//! Arranges visible children into a grid of uniform cells that flows left to
//! right and wraps to new rows when the available width is exhausted. Cell
//! size is derived from the largest child's natural size and stretched to fill
//! any bounded dimension.
//!
//! - [`WrapLayoutEngine::compute_layout`] packs children into a [`LayoutData`]
//! - [`WrapLayoutEngine::measure`] reports the requested size
//! - [`WrapLayoutEngine::arrange`] emits one [`Placement`] per visible child
//!
//! Results are cached per exact constraint box in a [`LayoutCache`]. The engine
//! cannot detect content changes; whoever owns the children must call
//! [`WrapLayoutEngine::invalidate`] when they change.

mod cache;
mod engine;
mod error;
mod layout_data;

pub use cache::{CacheKey, LayoutCache};
pub use engine::{Placement, WrapLayoutEngine, DEFAULT_SPACING, MIN_CELL_EXTENT};
pub use error::{Axis, LayoutError};
pub use layout_data::LayoutData;

#[cfg(test)]
mod tests {
    use super::*;
    use flowgrid_core::{Measurable, Rect, Size};
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    struct Item {
        size: Size,
        visible: bool,
    }

    impl Measurable for Item {
        fn natural_size(&self) -> Size {
            self.size
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    fn item_strategy() -> impl Strategy<Value = Item> {
        (1.0f32..200.0, 1.0f32..200.0, prop::bool::weighted(0.8)).prop_map(|(w, h, visible)| Item {
            size: Size::new(w, h),
            visible,
        })
    }

    proptest! {
        #[test]
        fn prop_column_and_row_counts(
            items in prop::collection::vec(item_strategy(), 1..60),
            width in 0.0f32..2000.0,
            spacing in 0.0f32..20.0,
        ) {
            let engine = WrapLayoutEngine::with_spacing(spacing, spacing).unwrap();
            let data = engine.compute_layout(&items, Size::new(width, f32::INFINITY));

            let visible: Vec<&Item> = items.iter().filter(|i| i.visible).collect();
            prop_assume!(!visible.is_empty());
            let max_width = visible.iter().map(|i| i.size.width).fold(0.0f32, f32::max);

            let expected_columns =
                (((width + spacing) / (max_width + spacing)).floor() as usize).max(1);
            prop_assert_eq!(data.columns(), expected_columns);
            prop_assert_eq!(data.rows(), visible.len().div_ceil(expected_columns));
            prop_assert_eq!(data.visible_child_count(), visible.len());
        }

        #[test]
        fn prop_layout_is_idempotent(
            items in prop::collection::vec(item_strategy(), 0..40),
            width in 0.0f32..1000.0,
            height in 0.0f32..1000.0,
        ) {
            let engine = WrapLayoutEngine::new();
            let available = Size::new(width, height);
            let first = engine.compute_layout(&items, available);
            let second = engine.compute_layout(&items, available);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_arrange_places_each_visible_child_once(
            items in prop::collection::vec(item_strategy(), 0..40),
            width in 50.0f32..1000.0,
        ) {
            let engine = WrapLayoutEngine::new();
            let placements = engine.arrange(&items, Rect::new(0.0, 0.0, width, 800.0));

            let expected: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, i)| i.visible)
                .map(|(idx, _)| idx)
                .collect();
            let actual: Vec<usize> = placements.iter().map(|p| p.index).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_infinite_width_is_single_row(
            items in prop::collection::vec(item_strategy(), 1..30),
        ) {
            let engine = WrapLayoutEngine::new();
            let data = engine.compute_layout(&items, Size::INFINITE);
            let visible = items.iter().filter(|i| i.visible).count();
            prop_assume!(visible > 0);

            let max_width = items
                .iter()
                .filter(|i| i.visible)
                .map(|i| i.size.width)
                .fold(0.0f32, f32::max);
            prop_assert_eq!(data.rows(), 1);
            prop_assert_eq!(data.columns(), visible);
            prop_assert_eq!(data.cell_size().width, max_width);
        }

        #[test]
        fn prop_hidden_children_are_ignored(
            items in prop::collection::vec(item_strategy(), 0..30),
            width in 0.0f32..1000.0,
        ) {
            let available = Size::new(width, f32::INFINITY);
            let with_hidden = WrapLayoutEngine::new().compute_layout(&items, available);

            let only_visible: Vec<Item> = items.iter().copied().filter(|i| i.visible).collect();
            let without_hidden = WrapLayoutEngine::new().compute_layout(&only_visible, available);

            prop_assert_eq!(with_hidden, without_hidden);
        }
    }
}
