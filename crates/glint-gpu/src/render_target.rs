//! Backend render target descriptors.
//!
//! Like textures, render targets are pure descriptors: they identify a
//! framebuffer (GL), a Metal texture, or a Direct3D 12 resource that some
//! other layer created, and carry the sampling parameters a renderer needs
//! to wrap it.

use glint_core::error::TextureError;

/// Raw GL framebuffer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlFramebufferInfo {
    /// GL framebuffer object name.
    pub fboid: u32,
    /// GL sized internal format enum of the color attachment.
    pub format: u32,
}

/// Which API the wrapped object belongs to, with its per-API parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTargetBackend {
    Gl {
        sample_count: u32,
        stencil_bits: u32,
        framebuffer: GlFramebufferInfo,
    },
    Metal {
        /// Opaque reference to the Metal texture object.
        texture: u64,
    },
    Direct3D {
        /// Opaque reference to the D3D12 texture resource.
        resource: u64,
        /// DXGI format of the resource.
        format: u32,
        sample_count: u32,
        level_count: u32,
    },
}

/// Descriptor referencing a renderable GPU surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendRenderTarget {
    width: u32,
    height: u32,
    backend: RenderTargetBackend,
}

impl BackendRenderTarget {
    /// Describe a GL framebuffer.
    ///
    /// Stencil bits must be 0, 8, or 16 when the target is later wrapped in
    /// a surface, so anything else is rejected here.
    pub fn new_gl(
        width: u32,
        height: u32,
        sample_count: u32,
        stencil_bits: u32,
        framebuffer: GlFramebufferInfo,
    ) -> Result<Self, TextureError> {
        if !matches!(stencil_bits, 0 | 8 | 16) {
            return Err(TextureError::InvalidStencilBits(stencil_bits));
        }
        Self::checked(
            width,
            height,
            RenderTargetBackend::Gl {
                sample_count,
                stencil_bits,
                framebuffer,
            },
        )
    }

    /// Describe a Metal texture. The reference must be non-zero.
    pub fn new_metal(width: u32, height: u32, texture: u64) -> Result<Self, TextureError> {
        if texture == 0 {
            return Err(TextureError::NullBackendObject);
        }
        Self::checked(width, height, RenderTargetBackend::Metal { texture })
    }

    /// Describe a Direct3D 12 texture resource. The resource reference must
    /// be non-zero.
    pub fn new_direct3d(
        width: u32,
        height: u32,
        resource: u64,
        format: u32,
        sample_count: u32,
        level_count: u32,
    ) -> Result<Self, TextureError> {
        if resource == 0 {
            return Err(TextureError::NullBackendObject);
        }
        Self::checked(
            width,
            height,
            RenderTargetBackend::Direct3D {
                resource,
                format,
                sample_count,
                level_count,
            },
        )
    }

    fn checked(
        width: u32,
        height: u32,
        backend: RenderTargetBackend,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions { width, height });
        }
        log::trace!("backend render target {width}x{height} ({backend:?})");
        Ok(Self {
            width,
            height,
            backend,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn backend(&self) -> RenderTargetBackend {
        self.backend
    }

    pub fn sample_count(&self) -> u32 {
        match self.backend {
            RenderTargetBackend::Gl { sample_count, .. } => sample_count,
            RenderTargetBackend::Metal { .. } => 1,
            RenderTargetBackend::Direct3D { sample_count, .. } => sample_count,
        }
    }
}
