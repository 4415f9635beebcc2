/// RayPass - per-frame driver of a full-screen ray effect.
///
/// Called by the host once per rendered frame (or editor repaint). Each
/// call recomputes the frustum corners from the camera snapshot, rebuilds
/// the uniform block, and asks the host to draw the full-screen quad.
/// Nothing from a previous frame is reused.

use crate::camera::Camera;
use crate::effect::RayEffect;
use crate::error::Result;
use super::fullscreen_quad::FullScreenQuad;
use super::host::RenderHost;
use super::uniforms::{UniformBlock, names};

/// What happened to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Uniforms uploaded and the quad drawn
    Rendered,
    /// No shader available; source copied to destination unchanged
    PassedThrough,
}

/// Full-screen ray pass for one effect
pub struct RayPass<E: RayEffect> {
    effect: E,
    quad: FullScreenQuad,
    frames_rendered: u64,
    warned_missing_shader: bool,
}

impl<E: RayEffect> RayPass<E> {
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            quad: FullScreenQuad,
            frames_rendered: 0,
            warned_missing_shader: false,
        }
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    /// Number of frames that reached the quad draw
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Build the frame's uniform block. Pure: no host interaction.
    ///
    /// Order: `cam_frustum`, `cam_to_world`, then the effect's uniforms.
    pub fn prepare_uniforms(&self, camera: &Camera) -> Result<UniformBlock> {
        let corners = camera.frustum_corners()?;

        let mut block = UniformBlock::new();
        block.set(names::CAM_FRUSTUM, corners.pack(self.effect.corner_packing()));
        block.set(names::CAM_TO_WORLD, *camera.camera_to_world());
        self.effect.write_uniforms(&mut block);
        Ok(block)
    }

    /// Render one frame through `host`.
    ///
    /// Without a shader the frame is passed through (warned once until a
    /// shader shows up again). Host errors are returned unchanged.
    pub fn render_frame(&mut self, host: &mut dyn RenderHost, camera: &Camera) -> Result<FrameOutcome> {
        if !host.shader_available() {
            if !self.warned_missing_shader {
                crate::engine_warn!("raymarch::RayPass",
                    "No shader for effect '{}', passing frames through", self.effect.name());
                self.warned_missing_shader = true;
            }
            host.blit_passthrough()?;
            return Ok(FrameOutcome::PassedThrough);
        }
        self.warned_missing_shader = false;

        let block = self.prepare_uniforms(camera)?;
        host.upload_uniforms(&block)?;
        host.draw_fullscreen_quad(&self.quad)?;

        self.frames_rendered += 1;
        crate::engine_trace!("raymarch::RayPass",
            "Frame {} rendered with effect '{}' ({} uniforms)",
            self.frames_rendered, self.effect.name(), block.len());

        Ok(FrameOutcome::Rendered)
    }
}

#[cfg(test)]
#[path = "ray_pass_tests.rs"]
mod tests;
