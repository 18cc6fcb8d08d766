//! Host-surface integration for the `rowlist` engine.
//!
//! The `rowlist` crate is UI-agnostic and focuses on the core windowing math
//! and state. This crate provides the pieces a concrete host needs to wire it
//! up:
//!
//! - the [`HostSurface`] capability trait (row template, header region, row
//!   measurement, scrollbar proxy)
//! - fail-fast construction with a configuration-error taxonomy
//!   ([`SurfaceError`])
//! - field-based default row filling ([`fill_fields`])
//! - chunked bulk loading for hosts with a responsiveness budget
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod fields;
mod surface;


pub use controller::ListController;
pub use fields::{FieldSource, FieldTarget, TextRow, fill_fields};
pub use surface::{HostSurface, SurfaceError};
