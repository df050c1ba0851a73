//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the window/slot bookkeeping. This
//! crate provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - An [`EventQueue`] that populate callbacks can post to, drained once the current
//!   operation has finished (so callbacks never re-enter the recycler)
//! - A [`Controller`] that owns the recycler, the populate callback, and the queue
//! - Scroll-to-index
//!
//! This crate is intentionally framework-agnostic (no bindings to any UI toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod queue;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use queue::{EventQueue, HostEvent};
