//! A headless windowing engine for fixed-height record lists.
//!
//! This crate focuses on the bookkeeping needed to show very large ordered
//! datasets through a small, bounded pool of recycled render slots: the
//! append-only entry store, the scroll-offset → visible-window mapping, pool
//! growth/shrink on geometry changes, and the synchronization of two
//! uncoordinated scroll input sources (wheel ticks and an absolute scrollbar
//! position) through a single clamped offset.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the measured row height and available viewport height (pixels)
//! - a cloneable slot template plus a fill callback that paints one record
//! - scroll input events (wheel deltas, scrollbar pixel positions)
//!
//! For host-surface integration (construction validation, scrollbar proxy
//! sizing, field-based filling), see the `rowlist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod list;
mod options;
mod pool;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use geometry::RowGeometry;
pub use list::RowList;
pub use options::{DEFAULT_WHEEL_STEP, FillCallback, OnRefreshCallback, RowListOptions};
pub use pool::{PoolDelta, SurfacePool};
pub use store::EntryStore;
pub use types::{ScrollDirection, Window};
