//! Create, notify, and dispose GPU descriptors through handles.
//!
//! Run with: `cargo run --example textures`

use glint::gpu::{GlFramebufferInfo, GlTextureInfo, GpuResources, Mipmapped};

fn main() -> Result<(), glint::error::GlintError> {
    env_logger::init();

    let resources = GpuResources::new();

    let texture = resources.create_gl_texture(
        1024,
        768,
        Mipmapped::Yes,
        GlTextureInfo {
            id: 42,
            target: 0x0DE1, // GL_TEXTURE_2D
            format: 0x8058, // GL_RGBA8
        },
    )?;
    println!("texture handle: {texture:?} (raw {:#x})", texture.to_raw());

    // Someone changed sampler state behind our back; let consumers know.
    resources.gl_texture_parameters_modified(texture)?;
    let descriptor = resources.texture(texture)?;
    println!(
        "{}x{}, params generation {}",
        descriptor.width(),
        descriptor.height(),
        descriptor.params_generation()
    );

    let target = resources.create_gl_render_target(
        1024,
        768,
        4,
        8,
        GlFramebufferInfo {
            fboid: 1,
            format: 0x8058,
        },
    )?;
    println!("render target: {:?}", resources.render_target(target)?);

    resources.dispose_texture(texture)?;
    resources.dispose_render_target(target)?;

    // The handle is now stale; using it is an error, not a crash.
    match resources.texture(texture) {
        Err(err) => println!("after dispose: {err}"),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
