// this_file: crates/glint-segment/src/lib.rs

//! Cursor-style Unicode break iteration.
//!
//! Four boundary kinds (grapheme cluster, word, line, sentence) backed by
//! `icu_segmenter`, exposed through the classic cursor API: attach a text,
//! then walk its boundaries with `first`/`next`/`previous`/`preceding`/
//! `following`, query `is_boundary`, and read the rule status that produced
//! the current boundary.
//!
//! Two surfaces are provided:
//!
//! - [`BreakIterator`]: an owning resource with deterministic drop.
//! - [`BreakRegistry`]: the same operations keyed by generation-checked
//!   [`BreakHandle`]s, for callers that must hold plain identifiers. Use
//!   after close is a reported error.

pub mod iterator;
pub mod locale;
pub mod registry;

pub use glint_core::error::{status, Result, SegmentError};
pub use iterator::{rule_status, BreakIterator, BreakKind, DONE};
pub use locale::default_locale;
pub use registry::{BreakHandle, BreakRegistry};

#[cfg(test)]
mod proptests;
