//! Glint - safe handles for two small native-adjacent surfaces
//!
//! Glint packages two independent units that historically lived behind a
//! raw-pointer bridge:
//!
//! 1. **Break iteration** ([`segment`]): cursor-style Unicode boundary
//!    navigation (grapheme / word / line / sentence) over an attached text.
//! 2. **GPU descriptors** ([`gpu`]): backend texture and render target
//!    descriptors that identify GPU objects without touching the GPU.
//!
//! The units share nothing except [`glint_core`]'s generation-checked
//! handle tables, which turn every use-after-dispose into a reported error.
//!
//! # Example
//!
//! ```
//! use glint::segment::{BreakIterator, BreakKind, DONE};
//!
//! # fn main() -> Result<(), glint::error::GlintError> {
//! let mut words = BreakIterator::new(BreakKind::Word, Some("en-US"))?;
//! words.set_text("Hello World")?;
//!
//! let mut boundaries = vec![words.first()];
//! loop {
//!     match words.next() {
//!         DONE => break,
//!         boundary => boundaries.push(boundary),
//!     }
//! }
//! assert_eq!(boundaries, [0, 5, 6, 11]);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `segment`: break iteration (default)
//! - `gpu`: backend texture / render target descriptors (default)

pub use glint_core::error;
pub use glint_core::{Handle, HandleTable};

#[cfg(feature = "gpu")]
pub use glint_gpu as gpu;

#[cfg(feature = "segment")]
pub use glint_segment as segment;

/// Common imports for typical usage
pub mod prelude {
    pub use glint_core::error::{GlintError, HandleError, Result};
    pub use glint_core::{Handle, HandleTable};

    #[cfg(feature = "gpu")]
    pub use glint_gpu::{
        BackendRenderTarget, BackendTexture, GlFramebufferInfo, GlTextureInfo, GpuResources,
        Mipmapped, RenderTargetHandle, TextureHandle,
    };

    #[cfg(feature = "segment")]
    pub use glint_segment::{BreakHandle, BreakIterator, BreakKind, BreakRegistry, DONE};
}
