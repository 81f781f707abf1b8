#![cfg_attr(test, allow(clippy::unwrap_used, clippy::ptr_arg))]
//! Widget implementations for flowgrid.
//!
//! The main widget is [`DynamicWrapLayout`], a grid that materializes one
//! child per bound item through an item template and packs the children into
//! uniform cells that wrap to new rows. [`Tile`] is a simple labelled leaf
//! view to put inside it.

mod config;
mod error;
mod tile;
mod wrap_layout;

pub use config::{ContentAlignment, WrapLayoutConfig};
pub use error::WrapLayoutError;
pub use tile::{Tile, DEFAULT_TILE_SIZE};
pub use wrap_layout::{BindingState, DynamicWrapLayout, ItemTemplate};
