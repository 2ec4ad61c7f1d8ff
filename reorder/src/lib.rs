//! A headless drag-to-reorder engine for keyed lists.
//!
//! For adapter-level utilities (FLIP animation, auto-scroll ticking), see the
//! `reorder-adapter` crate.
//!
//! This crate focuses on the core state machine behind a reorderable list:
//! reconciling the host's keyed item collection into a canonical order,
//! tracking one drag gesture at a time, shifting items by chains of adjacent
//! swaps (skipping locked items), and reporting completed reorders with a
//! revertable position change.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - drag-start/drag-enter/drag-end and pointer-move events (with indexes)
//! - measured element boxes (`measure(node) -> BoundingBox`)
//! - timestamps for the shift-animation cooldown
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod order;
mod reorderer;
mod types;


pub use options::{OnChangeCallback, PositionChangeCallback, ReordererOptions};
pub use order::Order;
pub use reorderer::Reorderer;
pub use types::{
    BoundingBox, DragState, EdgeThreshold, ItemDescriptor, Point, PositionChange, RenderItem,
    ScrollIntent,
};

#[doc(hidden)]
pub use key::KeyMapKey;
