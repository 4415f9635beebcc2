/// Ray trace effect - one analytic sphere under a directional light.
///
/// The shader expects `cam_frustum` as an array of four vectors.

use glam::Vec4;
use crate::camera::CornerPacking;
use crate::error::Result;
use crate::render::{UniformBlock, uniforms::names};
use crate::scene::{Sphere, Light};
use super::RayEffect;
use super::march_settings::check_range;

/// Ray trace effect creation descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct RayTraceEffectDesc {
    pub max_distance: f32,
    /// Linear RGBA surface color
    pub main_color: Vec4,
    pub sphere: Sphere,
    pub light: Light,
}

impl Default for RayTraceEffectDesc {
    fn default() -> Self {
        Self {
            max_distance: 500.0,
            main_color: Vec4::ONE,
            sphere: Sphere::default(),
            light: Light::default(),
        }
    }
}

/// Validated ray trace parameters
#[derive(Debug, Clone)]
pub struct RayTraceEffect {
    desc: RayTraceEffectDesc,
}

impl RayTraceEffect {
    pub fn from_desc(desc: RayTraceEffectDesc) -> Result<Self> {
        Self::validate(&desc)?;
        Ok(Self { desc })
    }

    pub fn desc(&self) -> &RayTraceEffectDesc {
        &self.desc
    }

    /// Replace all parameters. On error the previous parameters are kept.
    pub fn set_desc(&mut self, desc: RayTraceEffectDesc) -> Result<()> {
        Self::validate(&desc)?;
        self.desc = desc;
        Ok(())
    }

    fn validate(desc: &RayTraceEffectDesc) -> Result<()> {
        check_range("raymarch::RayTraceEffect", "max_distance", desc.max_distance, 0.0..=f32::MAX)?;
        desc.sphere.validate()?;
        desc.light.validate()
    }
}

impl RayEffect for RayTraceEffect {
    fn name(&self) -> &str {
        "ray_trace"
    }

    fn corner_packing(&self) -> CornerPacking {
        CornerPacking::VectorArray
    }

    fn write_uniforms(&self, block: &mut UniformBlock) {
        let d = &self.desc;
        block.set(names::MAX_DISTANCE, d.max_distance);
        block.set(names::MAIN_COLOR, d.main_color);
        block.set(names::SPHERE1, d.sphere.to_uniform());

        block.set(names::LIGHT_INTENSITY, d.light.intensity);
        block.set(names::LIGHT_DIR, d.light.direction());
        block.set(names::LIGHT_COLOR, d.light.color);
    }
}

#[cfg(test)]
#[path = "ray_trace_tests.rs"]
mod tests;
