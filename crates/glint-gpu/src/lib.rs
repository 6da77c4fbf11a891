//! GPU backend descriptors behind safe handles.
//!
//! This crate stops exactly where the original bridge stopped: it describes
//! GPU objects (textures, render targets) that some other layer created,
//! and it never talks to a GPU. What it adds over the raw-pointer original
//! is ownership: descriptors live in handle tables, disposal is
//! exactly-once, and a stale handle is an error instead of undefined
//! behavior.

pub mod registry;
pub mod render_target;
pub mod texture;

pub use glint_core::error::{Result, TextureError};
pub use registry::{GpuResources, RenderTargetHandle, TextureHandle};
pub use render_target::{BackendRenderTarget, GlFramebufferInfo, RenderTargetBackend};
pub use texture::{BackendTexture, GlTextureInfo, Mipmapped};
