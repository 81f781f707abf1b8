//! Core types and traits for the flowgrid wrap layout.
//!
//! This crate provides foundational types used throughout flowgrid:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Layout constraints: [`Constraints`]
//! - Views and the measurement capability: [`View`], [`Measurable`]

mod constraints;
mod geometry;
pub mod view;

pub use constraints::Constraints;
pub use geometry::{Point, Rect, Size};
pub use view::{LayoutResult, Measurable, View};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_unbounded_constrain_is_identity(w in 0.0f32..10_000.0, h in 0.0f32..10_000.0) {
            let size = Size::new(w, h);
            prop_assert_eq!(Constraints::unbounded().constrain(size), size);
        }

        #[test]
        fn prop_size_max_dominates(
            w1 in 0.0f32..1000.0, h1 in 0.0f32..1000.0,
            w2 in 0.0f32..1000.0, h2 in 0.0f32..1000.0,
        ) {
            let m = Size::new(w1, h1).max(Size::new(w2, h2));
            prop_assert!(m.width >= w1 && m.width >= w2);
            prop_assert!(m.height >= h1 && m.height >= h2);
        }

        #[test]
        fn prop_loose_constrain_fits(w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
            let bounds = Size::new(500.0, 500.0);
            let c = Constraints::loose(bounds);
            let s = c.constrain(Size::new(w, h));
            prop_assert!(s.width <= bounds.width && s.height <= bounds.height);
        }
    }
}
