//! Dynamic wrap layout: a data-bound grid of uniform cells.
//!
//! Children are materialized from an items source through an item template,
//! one view per item, and packed left to right, wrapping to a new row when the
//! width runs out. There is no view recycling, so keep the source small.

use crate::config::{ContentAlignment, WrapLayoutConfig};
use crate::error::WrapLayoutError;
use flowgrid_core::{Constraints, LayoutResult, Rect, Size, View};
use flowgrid_layout::{LayoutData, LayoutError, WrapLayoutEngine};
use std::fmt;
use tracing::debug;

/// Factory turning one item into its view. The item is the view's binding
/// context.
pub type ItemTemplate<T> = Box<dyn Fn(&T) -> Box<dyn View>>;

/// Lifecycle of the control's data binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingState {
    /// No binding yet; no children materialized
    #[default]
    Unbound,
    /// Children materialized from the items source
    Bound,
}

/// Wrap layout bound to a collection of `T`.
pub struct DynamicWrapLayout<T> {
    engine: WrapLayoutEngine,
    items_source: Option<Vec<T>>,
    item_template: Option<ItemTemplate<T>>,
    horizontal_content_alignment: ContentAlignment,
    vertical_content_alignment: ContentAlignment,
    children: Vec<Box<dyn View>>,
    binding_state: BindingState,
    visible: bool,
    bounds: Rect,
    test_id_value: Option<String>,
}

impl<T> Default for DynamicWrapLayout<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicWrapLayout<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicWrapLayout")
            .field("engine", &self.engine)
            .field("items_source", &self.items_source)
            .field("has_template", &self.item_template.is_some())
            .field("children", &self.children.len())
            .field("binding_state", &self.binding_state)
            .finish_non_exhaustive()
    }
}

impl<T> DynamicWrapLayout<T> {
    /// Create an unbound layout with default spacing and no template.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(WrapLayoutEngine::new(), &WrapLayoutConfig::default())
    }

    /// Create an unbound layout from a validated config.
    pub fn from_config(config: &WrapLayoutConfig) -> Result<Self, WrapLayoutError> {
        Ok(Self::with_engine(config.engine()?, config))
    }

    fn with_engine(engine: WrapLayoutEngine, config: &WrapLayoutConfig) -> Self {
        Self {
            engine,
            items_source: None,
            item_template: None,
            horizontal_content_alignment: config.horizontal_content_alignment,
            vertical_content_alignment: config.vertical_content_alignment,
            children: Vec::new(),
            binding_state: BindingState::Unbound,
            visible: true,
            bounds: Rect::default(),
            test_id_value: None,
        }
    }

    /// Set the item template.
    #[must_use]
    pub fn item_template(mut self, template: impl Fn(&T) -> Box<dyn View> + 'static) -> Self {
        self.item_template = Some(Box::new(template));
        self
    }

    /// Set the items source without materializing children.
    ///
    /// Children are built by [`DynamicWrapLayout::bind`].
    #[must_use]
    pub fn items_source(mut self, items: Vec<T>) -> Self {
        self.items_source = Some(items);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Gap between columns.
    #[must_use]
    pub const fn column_spacing(&self) -> f32 {
        self.engine.column_spacing()
    }

    /// Gap between rows.
    #[must_use]
    pub const fn row_spacing(&self) -> f32 {
        self.engine.row_spacing()
    }

    /// Set the column gap. A changed value discards every cached layout.
    pub fn set_column_spacing(&mut self, spacing: f32) -> Result<(), LayoutError> {
        self.engine.set_column_spacing(spacing)
    }

    /// Set the row gap. A changed value discards every cached layout.
    pub fn set_row_spacing(&mut self, spacing: f32) -> Result<(), LayoutError> {
        self.engine.set_row_spacing(spacing)
    }

    /// Horizontal content alignment (not applied by the packing).
    #[must_use]
    pub const fn horizontal_content_alignment(&self) -> ContentAlignment {
        self.horizontal_content_alignment
    }

    /// Set the horizontal content alignment.
    pub fn set_horizontal_content_alignment(&mut self, alignment: ContentAlignment) {
        self.horizontal_content_alignment = alignment;
    }

    /// Vertical content alignment (not applied by the packing).
    #[must_use]
    pub const fn vertical_content_alignment(&self) -> ContentAlignment {
        self.vertical_content_alignment
    }

    /// Set the vertical content alignment.
    pub fn set_vertical_content_alignment(&mut self, alignment: ContentAlignment) {
        self.vertical_content_alignment = alignment;
    }

    // =========================================================================
    // Data binding
    // =========================================================================

    /// Current items source, if any.
    #[must_use]
    pub fn items(&self) -> Option<&[T]> {
        self.items_source.as_deref()
    }

    /// Replace the items source.
    ///
    /// A bound layout rebuilds every child. An unbound layout only stores the
    /// source and builds nothing until [`DynamicWrapLayout::bind`].
    pub fn set_items_source(&mut self, items: Option<Vec<T>>) -> Result<usize, WrapLayoutError> {
        self.items_source = items;
        if self.is_bound() {
            self.rebuild_children()
        } else {
            debug!("items source stored, layout not bound");
            Ok(0)
        }
    }

    /// Replace the item template. Existing children are kept until the next
    /// rebuild.
    pub fn set_item_template(&mut self, template: impl Fn(&T) -> Box<dyn View> + 'static) {
        self.item_template = Some(Box::new(template));
    }

    /// Materialize the children from the current source and enter the bound
    /// state. Binding again rebuilds. On failure the layout is left unbound
    /// with no children.
    pub fn bind(&mut self) -> Result<usize, WrapLayoutError> {
        self.binding_state = BindingState::Bound;
        self.rebuild_children()
    }

    /// Current binding state.
    #[must_use]
    pub const fn binding_state(&self) -> BindingState {
        self.binding_state
    }

    /// Whether [`DynamicWrapLayout::bind`] has succeeded.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding_state == BindingState::Bound
    }

    /// Discard all children and instantiate the template once per item.
    ///
    /// An unbound layout, or a missing or empty source, yields no children.
    /// A non-empty source with no template leaves the layout empty and
    /// unbound, and fails. Returns the number of children built.
    pub fn rebuild_children(&mut self) -> Result<usize, WrapLayoutError> {
        let discarded = self.children.len();
        self.children.clear();
        self.invalidate_layout();

        if !self.is_bound() {
            return Ok(0);
        }

        let items = match self.items_source.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => {
                debug!(discarded, "items source empty, no children built");
                return Ok(0);
            }
        };

        let Some(template) = self.item_template.as_ref() else {
            let items = items.len();
            self.binding_state = BindingState::Unbound;
            return Err(WrapLayoutError::MissingTemplate { items });
        };

        self.children = items.iter().map(|item| template(item)).collect();
        debug!(
            discarded,
            built = self.children.len(),
            "rebuilt wrap layout children"
        );
        Ok(self.children.len())
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Number of materialized children, visible or not.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Mutable access to the children.
    ///
    /// Call [`DynamicWrapLayout::child_measure_invalidated`] after changing
    /// anything that affects a child's size or visibility.
    pub fn children_mut(&mut self) -> &mut [Box<dyn View>] {
        &mut self.children
    }

    /// Show or hide one child and discard cached layouts. Returns `false` if
    /// the index is out of range.
    pub fn set_child_visible(&mut self, index: usize, visible: bool) -> bool {
        let Some(child) = self.children.get_mut(index) else {
            return false;
        };
        if View::is_visible(child.as_ref()) != visible {
            child.set_visible(visible);
            self.child_measure_invalidated();
        }
        true
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Discard every cached layout because children were added or removed.
    pub fn invalidate_layout(&mut self) {
        self.engine.invalidate();
    }

    /// Discard every cached layout because a child's natural size or
    /// visibility changed.
    pub fn child_measure_invalidated(&mut self) {
        self.engine.invalidate();
    }

    /// Packing for a constraint box.
    #[must_use]
    pub fn layout_data(&self, available: Size) -> LayoutData {
        self.engine.compute_layout(&self.children, available)
    }

    /// Number of constraint boxes currently cached.
    #[must_use]
    pub fn cached_layouts(&self) -> usize {
        self.engine.cached_layouts()
    }
}

impl<T> View for DynamicWrapLayout<T> {
    fn measure(&self, constraints: Constraints) -> Size {
        self.engine
            .measure(&self.children, constraints.max_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        for placement in self.engine.arrange(&self.children, bounds) {
            if let Some(child) = self.children.get_mut(placement.index) {
                child.layout(placement.bounds);
            }
        }

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

    fn children(&self) -> &[Box<dyn View>] {
        &self.children
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
