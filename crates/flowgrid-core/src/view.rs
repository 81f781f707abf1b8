//! View trait and the measurement capability used by layouts.
//!
//! Views follow a measure-layout cycle:
//!
//! 1. **Measure**: Compute the requested size given constraints
//! 2. **Layout**: Position self and children within allocated bounds
//!
//! Layout algorithms only need two things from a child: its natural size and
//! whether it is visible. That is the [`Measurable`] capability; every
//! [`View`] has it.
//!
//! # Examples
//!
//! ```
//! use flowgrid_core::{Constraints, LayoutResult, Measurable, Rect, Size, View};
//!
//! struct Swatch;
//!
//! impl View for Swatch {
//!     fn measure(&self, constraints: Constraints) -> Size {
//!         constraints.constrain(Size::new(24.0, 24.0))
//!     }
//!
//!     fn layout(&mut self, bounds: Rect) -> LayoutResult {
//!         LayoutResult { size: bounds.size() }
//!     }
//! }
//!
//! let swatch: Box<dyn View> = Box::new(Swatch);
//! assert_eq!(swatch.natural_size(), Size::new(24.0, 24.0));
//! ```

use crate::constraints::Constraints;
use crate::geometry::{Rect, Size};

/// Result of laying out a view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core view trait that all layout participants implement.
pub trait View {
    /// Compute the requested size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self and children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Whether this view takes part in layout.
    fn is_visible(&self) -> bool {
        true
    }

    /// Show or hide this view. Views without a visibility flag ignore this.
    fn set_visible(&mut self, _visible: bool) {}

    /// Get child views for tree traversal.
    fn children(&self) -> &[Box<dyn View>] {
        &[]
    }

    /// Get the test ID for this view (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the bounds assigned by the last layout pass.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// What a layout needs to know about a child.
pub trait Measurable {
    /// Size the child reports when measured with unbounded constraints.
    fn natural_size(&self) -> Size;

    /// Invisible children are excluded from layout entirely.
    fn is_visible(&self) -> bool;
}

impl Measurable for dyn View + '_ {
    fn natural_size(&self) -> Size {
        self.measure(Constraints::unbounded())
    }

    fn is_visible(&self) -> bool {
        View::is_visible(self)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn natural_size(&self) -> Size {
        (**self).natural_size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn natural_size(&self) -> Size {
        (**self).natural_size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        preferred: Size,
        visible: bool,
        bounds: Rect,
    }

    impl View for Probe {
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

        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    fn probe(width: f32, height: f32) -> Box<dyn View> {
        Box::new(Probe {
            preferred: Size::new(width, height),
            visible: true,
            bounds: Rect::default(),
        })
    }

    #[test]
    fn test_natural_size_uses_unbounded_constraints() {
        let view = probe(300.0, 20.0);
        assert_eq!(view.natural_size(), Size::new(300.0, 20.0));
        // A bounded measure clamps, the natural size does not
        assert_eq!(
            view.measure(Constraints::loose(Size::new(100.0, 100.0))),
            Size::new(100.0, 20.0)
        );
    }

    #[test]
    fn test_visibility_flows_through_measurable() {
        let mut view = probe(1.0, 1.0);
        assert!(Measurable::is_visible(&view));
        view.set_visible(false);
        assert!(!Measurable::is_visible(&view));
    }

    #[test]
    fn test_measurable_by_reference() {
        let view = probe(8.0, 9.0);
        let by_ref = &view;
        assert_eq!(by_ref.natural_size(), Size::new(8.0, 9.0));
    }

    #[test]
    fn test_default_view_methods() {
        let mut view = probe(1.0, 1.0);
        assert!(view.children().is_empty());
        assert_eq!(view.test_id(), None);
        let result = view.layout(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(result.size, Size::new(3.0, 4.0));
        assert_eq!(view.bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
