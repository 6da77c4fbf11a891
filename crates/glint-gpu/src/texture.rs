//! Backend texture descriptors.
//!
//! A [`BackendTexture`] records the parameters of a GPU-resident texture
//! (dimensions, mip-map state, and the raw GL object triple) without
//! touching the GPU itself. GL target and format enums pass through
//! unvalidated: rejecting bad combinations is the rendering backend's job.

use glint_core::error::TextureError;

/// Raw GL texture parameters, passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlTextureInfo {
    /// GL texture object name.
    pub id: u32,
    /// GL texture target enum (e.g. `GL_TEXTURE_2D`).
    pub target: u32,
    /// GL sized internal format enum (e.g. `GL_RGBA8`).
    pub format: u32,
}

/// Whether the texture carries a full mip chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mipmapped {
    Yes,
    No,
}

impl From<bool> for Mipmapped {
    fn from(value: bool) -> Self {
        if value {
            Mipmapped::Yes
        } else {
            Mipmapped::No
        }
    }
}

/// Descriptor referencing a GPU-resident texture, independent of any
/// higher-level image abstraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendTexture {
    width: u32,
    height: u32,
    mipmapped: Mipmapped,
    info: GlTextureInfo,
    /// Bumped every time the caller reports an out-of-band GL parameter
    /// change, so consumers can invalidate cached sampler state.
    params_generation: u64,
}

impl BackendTexture {
    /// Describe a GL texture.
    ///
    /// Dimensions must be non-zero; everything else is recorded verbatim.
    pub fn new_gl(
        width: u32,
        height: u32,
        mipmapped: Mipmapped,
        info: GlTextureInfo,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions { width, height });
        }
        log::trace!(
            "backend texture {}x{} (gl id {}, target {:#x}, format {:#x})",
            width,
            height,
            info.id,
            info.target,
            info.format
        );
        Ok(Self {
            width,
            height,
            mipmapped,
            info,
            params_generation: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mipmapped(&self) -> Mipmapped {
        self.mipmapped
    }

    pub fn gl_info(&self) -> GlTextureInfo {
        self.info
    }

    /// Record that the texture's GL parameters were changed out-of-band
    /// (by GL calls this crate never sees).
    pub fn gl_texture_parameters_modified(&mut self) {
        self.params_generation += 1;
        log::trace!(
            "gl texture {} parameters modified (generation {})",
            self.info.id,
            self.params_generation
        );
    }

    /// How many times the parameters were reported modified.
    pub fn params_generation(&self) -> u64 {
        self.params_generation
    }
}
