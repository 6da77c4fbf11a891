//! Error types for glint
//!
//! Failures are tagged enums rather than sentinel returns or out-parameter
//! status slots. For callers that interpret the segmentation library's own
//! integer taxonomy, every [`SegmentError`] still maps back to a raw status
//! code via [`SegmentError::status_code`] and the constants in [`status`].

use thiserror::Error;

pub type Result<T, E = GlintError> = std::result::Result<T, E>;

/// Main error type for glint
#[derive(Debug, Error)]
pub enum GlintError {
    #[error("handle error: {0}")]
    Handle(#[from] HandleError),

    #[error("segmentation failed: {0}")]
    Segment(#[from] SegmentError),

    #[error("texture error: {0}")]
    Texture(#[from] TextureError),
}

/// Handle-table lookup failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    /// The slot exists but was disposed (or reused) since this handle was
    /// issued. The old "use after finalizer" bug, caught instead of UB.
    #[error("stale handle: resource already disposed")]
    Stale,

    /// The handle was never issued by this table.
    #[error("unknown handle")]
    Unknown,
}

/// Break-iterator failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("malformed locale tag: {0:?}")]
    IllegalLocale(String),

    #[error("no segmentation data for locale: {0}")]
    MissingLocaleData(String),

    #[error("text exceeds addressable range: {0} bytes")]
    IndexOutOfBounds(usize),

    #[error("destination buffer too small: need {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },
}

impl SegmentError {
    /// Raw status code in the segmentation library's taxonomy.
    ///
    /// Zero means success and is never produced here; see [`status`] for the
    /// named nonzero codes.
    pub fn status_code(&self) -> i32 {
        match self {
            SegmentError::IllegalLocale(_) => status::ILLEGAL_ARGUMENT,
            SegmentError::MissingLocaleData(_) => status::MISSING_RESOURCE,
            SegmentError::IndexOutOfBounds(_) => status::INDEX_OUT_OF_BOUNDS,
            SegmentError::BufferOverflow { .. } => status::BUFFER_OVERFLOW,
        }
    }
}

/// Backend texture / render target failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextureError {
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid stencil bit count: {0} (expected 0, 8, or 16)")]
    InvalidStencilBits(u32),

    #[error("backend object reference must be non-zero")]
    NullBackendObject,
}

/// Named status codes from the segmentation library's failure taxonomy.
pub mod status {
    pub const ZERO: i32 = 0;
    pub const ILLEGAL_ARGUMENT: i32 = 1;
    pub const MISSING_RESOURCE: i32 = 2;
    pub const MEMORY_ALLOCATION: i32 = 7;
    pub const INDEX_OUT_OF_BOUNDS: i32 = 8;
    pub const BUFFER_OVERFLOW: i32 = 15;
    pub const UNSUPPORTED: i32 = 16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_errors_map_to_raw_status_codes() {
        assert_eq!(
            SegmentError::IllegalLocale("!!".into()).status_code(),
            status::ILLEGAL_ARGUMENT
        );
        assert_eq!(
            SegmentError::MissingLocaleData("tlh".into()).status_code(),
            status::MISSING_RESOURCE
        );
        assert_eq!(
            SegmentError::BufferOverflow { needed: 1, got: 0 }.status_code(),
            status::BUFFER_OVERFLOW
        );
    }

    #[test]
    fn errors_convert_into_the_top_level_type() {
        let err: GlintError = HandleError::Stale.into();
        assert!(matches!(err, GlintError::Handle(HandleError::Stale)));
    }
}
