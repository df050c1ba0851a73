//! A headless cell-recycling engine for large scrollable grids.
//!
//! Given a total item count and a viewport, this crate decides which logical indices are on
//! screen, binds each of them to one of a small, fixed pool of reusable cells ("slots"), and
//! rebinds only the slots whose index scrolled out of range as the viewport moves. It never
//! creates more slots than the viewport can show at once.
//!
//! The layout is a single uniform grid: fixed cell size, fixed spacing, and `group_count`
//! cells per row ([`LayoutAxis::RowMajor`]) or per column ([`LayoutAxis::ColumnMajor`]).
//!
//! It is UI-agnostic. A host UI layer is expected to provide:
//! - the grid configuration and viewport size
//! - the item count and scroll offsets
//! - a populate callback that renders an index into a slot
//!
//! and, optionally, hooks for slot creation, placement, visibility, and content size.
//!
//! For event queueing and scroll-to-index helpers, see the `recycler-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod options;
mod pool;
mod recycler;
mod slot_map;
mod state;
mod types;


pub use error::RecyclerError;
pub use geometry::Geometry;
pub use options::{
    ContentSizeCallback, CreateCallback, GridConfig, PlaceCallback, PopulateCallback,
    RecyclerOptions, VisibilityCallback,
};
pub use recycler::Recycler;
pub use state::RecyclerState;
pub use types::{LayoutAxis, Offset, Position, Size, SlotId, VisibleWindow};
