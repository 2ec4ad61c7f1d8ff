//! Adapter utilities for the `reorder` crate.
//!
//! The `reorder` crate is UI-agnostic and focuses on the core order/drag
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - FLIP motion synthesis (pin/release transform instructions from two
//!   retained box generations)
//! - Auto-scroll tick cadence for edge-triggered scrolling during a drag
//! - Key canonicalization for composite/namespaced host keys
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/DOM
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod autoscroll;
mod controller;
mod flip;
mod key;

#[cfg(test)]
mod tests;

pub use autoscroll::{AutoScroller, DEFAULT_SCROLL_INTERVAL_MS, ScrollArea};
pub use controller::Controller;
pub use flip::{FlipAnimator, FlipMotion, Transform};
pub use key::{ReordererKey, canonical_key};
