//! Render module - the boundary between a ray effect and the host engine.
//!
//! - `UniformBlock`: named values uploaded to the shader each frame
//! - `FullScreenQuad`: the four vertices drawn, with the UV/corner contract
//! - `RenderHost`: trait implemented by the host (shader, targets, draw)
//! - `RayPass`: per-frame driver tying the above together

mod fullscreen_quad;
mod host;
mod ray_pass;
pub mod uniforms;
pub mod mock_host;

pub use fullscreen_quad::{FullScreenQuad, QuadVertex};
pub use host::RenderHost;
pub use ray_pass::{RayPass, FrameOutcome};
pub use uniforms::{UniformBlock, UniformValue};
