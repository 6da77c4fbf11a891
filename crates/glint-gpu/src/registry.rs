//! Handle-keyed surface over GPU descriptors.
//!
//! [`GpuResources`] owns every descriptor it creates and hands out
//! generation-checked handles. Disposal is exactly-once; any use of a
//! disposed handle fails with a handle error instead of reaching freed
//! state.

use glint_core::error::Result;
use glint_core::{Handle, HandleTable};
use parking_lot::RwLock;

use crate::render_target::{BackendRenderTarget, GlFramebufferInfo};
use crate::texture::{BackendTexture, GlTextureInfo, Mipmapped};

pub type TextureHandle = Handle<BackendTexture>;
pub type RenderTargetHandle = Handle<BackendRenderTarget>;

/// Table of live backend textures and render targets.
#[derive(Default)]
pub struct GpuResources {
    textures: RwLock<HandleTable<BackendTexture>>,
    render_targets: RwLock<HandleTable<BackendRenderTarget>>,
}

impl GpuResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GL texture descriptor. See [`BackendTexture::new_gl`].
    pub fn create_gl_texture(
        &self,
        width: u32,
        height: u32,
        mipmapped: Mipmapped,
        info: GlTextureInfo,
    ) -> Result<TextureHandle> {
        let texture = BackendTexture::new_gl(width, height, mipmapped, info)?;
        Ok(self.textures.write().insert(texture))
    }

    /// Snapshot of a live texture descriptor.
    pub fn texture(&self, handle: TextureHandle) -> Result<BackendTexture> {
        Ok(self.textures.read().get(handle)?.clone())
    }

    /// Forward an out-of-band GL parameter change notification.
    pub fn gl_texture_parameters_modified(&self, handle: TextureHandle) -> Result<()> {
        self.textures
            .write()
            .get_mut(handle)?
            .gl_texture_parameters_modified();
        Ok(())
    }

    /// Dispose a texture descriptor. Exactly-once.
    pub fn dispose_texture(&self, handle: TextureHandle) -> Result<()> {
        let texture = self.textures.write().remove(handle)?;
        log::trace!("disposed backend texture (gl id {})", texture.gl_info().id);
        Ok(())
    }

    /// Register a GL render target descriptor.
    /// See [`BackendRenderTarget::new_gl`].
    pub fn create_gl_render_target(
        &self,
        width: u32,
        height: u32,
        sample_count: u32,
        stencil_bits: u32,
        framebuffer: GlFramebufferInfo,
    ) -> Result<RenderTargetHandle> {
        let target =
            BackendRenderTarget::new_gl(width, height, sample_count, stencil_bits, framebuffer)?;
        Ok(self.render_targets.write().insert(target))
    }

    /// Register a Metal render target descriptor.
    pub fn create_metal_render_target(
        &self,
        width: u32,
        height: u32,
        texture: u64,
    ) -> Result<RenderTargetHandle> {
        let target = BackendRenderTarget::new_metal(width, height, texture)?;
        Ok(self.render_targets.write().insert(target))
    }

    /// Register a Direct3D 12 render target descriptor.
    pub fn create_direct3d_render_target(
        &self,
        width: u32,
        height: u32,
        resource: u64,
        format: u32,
        sample_count: u32,
        level_count: u32,
    ) -> Result<RenderTargetHandle> {
        let target = BackendRenderTarget::new_direct3d(
            width,
            height,
            resource,
            format,
            sample_count,
            level_count,
        )?;
        Ok(self.render_targets.write().insert(target))
    }

    /// Snapshot of a live render target descriptor.
    pub fn render_target(&self, handle: RenderTargetHandle) -> Result<BackendRenderTarget> {
        Ok(*self.render_targets.read().get(handle)?)
    }

    /// Dispose a render target descriptor. Exactly-once.
    pub fn dispose_render_target(&self, handle: RenderTargetHandle) -> Result<()> {
        self.render_targets.write().remove(handle)?;
        Ok(())
    }

    pub fn texture_count(&self) -> usize {
        self.textures.read().len()
    }

    pub fn render_target_count(&self) -> usize {
        self.render_targets.read().len()
    }
}
