/// RenderHost trait - the engine side of a ray pass
///
/// The host owns everything GPU related: the shader/material, the source
/// and destination targets, and the actual draw. The ray pass only tells
/// it what to upload and when to draw.

use crate::error::Result;
use super::fullscreen_quad::FullScreenQuad;
use super::uniforms::UniformBlock;

/// Host collaborator driven once per frame by `RayPass::render_frame`
pub trait RenderHost {
    /// Whether a ray shader is currently bound and usable
    ///
    /// When this is false the pass falls back to `blit_passthrough`.
    fn shader_available(&self) -> bool;

    /// Upload the frame's uniform values to the bound shader
    ///
    /// The host is also expected to bind its source target as the
    /// shader's input texture.
    fn upload_uniforms(&mut self, uniforms: &UniformBlock) -> Result<()>;

    /// Draw the full-screen quad into the destination target
    fn draw_fullscreen_quad(&mut self, quad: &FullScreenQuad) -> Result<()>;

    /// Copy source to destination unchanged
    fn blit_passthrough(&mut self) -> Result<()>;
}
