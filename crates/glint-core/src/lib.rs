//! Glint Core: handles you can trust
//!
//! Every resource glint manages (a break iterator, a backend texture, a
//! render target) lives behind an opaque handle instead of a raw pointer.
//! This crate provides the two pieces that make that safe:
//!
//! - [`HandleTable`]: a slot arena with generation-checked indices, so a
//!   handle used after its resource was disposed is a reported error, never
//!   undefined behavior.
//! - [`error`]: tagged error types that still carry the underlying library's
//!   raw status taxonomy for callers that need it.
//!
//! The higher-level crates (`glint-segment`, `glint-gpu`) build their
//! handle-keyed surfaces on top of these primitives.

pub mod error;
pub mod handle;

pub use error::{GlintError, HandleError, Result, SegmentError, TextureError};
pub use handle::{Handle, HandleTable};
