//! Effect module - what a ray pass asks its shader to render.
//!
//! An effect chooses how the frustum corners are packed and writes its own
//! uniforms. `RayMarchEffect` drives an SDF ray marcher, `RayTraceEffect`
//! an analytic single-sphere ray tracer.

mod march_settings;
mod ray_march;
mod ray_trace;

use crate::camera::CornerPacking;
use crate::render::UniformBlock;

pub use march_settings::{MarchSettings, ShadowSettings, AmbientOcclusionSettings};
pub use ray_march::{RayMarchEffect, RayMarchEffectDesc};
pub use ray_trace::{RayTraceEffect, RayTraceEffectDesc};

/// Per-effect part of a ray pass
pub trait RayEffect {
    /// Effect name used in log messages
    fn name(&self) -> &str;

    /// Layout of the `cam_frustum` uniform this effect's shader expects
    fn corner_packing(&self) -> CornerPacking;

    /// Write the effect's uniforms (scene, lighting, settings)
    fn write_uniforms(&self, block: &mut UniformBlock);
}
