/// Ray march effect - SDF scene of two spheres, a box and an optional
/// capsule, lit by one directional light with soft shadows and ambient
/// occlusion.
///
/// The shader expects `cam_frustum` as a matrix (one corner per row).

use glam::Vec4;
use crate::camera::CornerPacking;
use crate::error::Result;
use crate::render::{UniformBlock, uniforms::names};
use crate::scene::{Sphere, BoxShape, Capsule, SmoothBlend, Light};
use super::RayEffect;
use super::march_settings::{MarchSettings, ShadowSettings, AmbientOcclusionSettings};

// ===== DESCRIPTOR =====

/// Ray march effect creation descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct RayMarchEffectDesc {
    /// Linear RGBA surface color
    pub main_color: Vec4,
    pub sphere1: Sphere,
    pub sphere2: Sphere,
    pub box1: BoxShape,
    pub capsule: Option<Capsule>,
    pub blend: SmoothBlend,
    pub light: Light,
    pub march: MarchSettings,
    pub shadows: ShadowSettings,
    pub ambient_occlusion: AmbientOcclusionSettings,
}

impl Default for RayMarchEffectDesc {
    fn default() -> Self {
        Self {
            main_color: Vec4::ONE,
            sphere1: Sphere::default(),
            sphere2: Sphere::default(),
            box1: BoxShape::default(),
            capsule: None,
            blend: SmoothBlend::default(),
            light: Light::default(),
            march: MarchSettings::default(),
            shadows: ShadowSettings::default(),
            ambient_occlusion: AmbientOcclusionSettings::default(),
        }
    }
}

impl RayMarchEffectDesc {
    fn validate(&self) -> Result<()> {
        self.sphere1.validate()?;
        self.sphere2.validate()?;
        self.box1.validate()?;
        if let Some(capsule) = &self.capsule {
            capsule.validate()?;
        }
        self.blend.validate()?;
        self.light.validate()?;
        self.march.validate()?;
        self.shadows.validate()?;
        self.ambient_occlusion.validate()
    }
}

// ===== EFFECT =====

/// Validated ray march parameters
#[derive(Debug, Clone)]
pub struct RayMarchEffect {
    desc: RayMarchEffectDesc,
}

impl RayMarchEffect {
    /// Create the effect, validating every parameter group
    pub fn from_desc(desc: RayMarchEffectDesc) -> Result<Self> {
        desc.validate()?;
        crate::engine_debug!("raymarch::RayMarchEffect",
            "Created ray march effect (capsule: {}, max_iterations: {})",
            desc.capsule.is_some(), desc.march.max_iterations);
        Ok(Self { desc })
    }

    /// Current parameters
    pub fn desc(&self) -> &RayMarchEffectDesc {
        &self.desc
    }

    /// Replace all parameters. On error the previous parameters are kept.
    pub fn set_desc(&mut self, desc: RayMarchEffectDesc) -> Result<()> {
        desc.validate()?;
        self.desc = desc;
        Ok(())
    }
}

impl RayEffect for RayMarchEffect {
    fn name(&self) -> &str {
        "ray_march"
    }

    fn corner_packing(&self) -> CornerPacking {
        CornerPacking::MatrixRows
    }

    fn write_uniforms(&self, block: &mut UniformBlock) {
        let d = &self.desc;

        block.set(names::LIGHT_DIR, d.light.direction());
        block.set(names::LIGHT_COLOR, d.light.color);
        block.set(names::LIGHT_INTENSITY, d.light.intensity);

        block.set(names::MAX_DISTANCE, d.march.max_distance);
        block.set(names::MAIN_COLOR, d.main_color);

        block.set(names::SPHERE1, d.sphere1.to_uniform());
        block.set(names::SPHERE2, d.sphere2.to_uniform());
        block.set(names::BOX1, d.box1.to_uniform());
        if let Some(capsule) = &d.capsule {
            let [start, end] = capsule.to_uniforms();
            block.set(names::CAPSULE1_START, start);
            block.set(names::CAPSULE1_END, end);
        }

        block.set(names::BOX1_ROUND, d.blend.box_round);
        block.set(names::BOX_SPHERE_SMOOTH, d.blend.box_sphere_smooth);
        block.set(names::SPHERE_INTERSECT_SMOOTH, d.blend.sphere_intersect_smooth);

        block.set(names::SHADOW_DISTANCE, d.shadows.distance);
        block.set(names::SHADOW_INTENSITY, d.shadows.intensity);
        block.set(names::SHADOW_PENUMBRA, d.shadows.penumbra);

        // Validated ranges fit in i32
        block.set(names::ACCURACY, d.march.accuracy);
        block.set(names::MAX_ITERATIONS, d.march.max_iterations as i32);

        block.set(names::AO_STEP_SIZE, d.ambient_occlusion.step_size);
        block.set(names::AO_INTENSITY, d.ambient_occlusion.intensity);
        block.set(names::AO_ITERATIONS, d.ambient_occlusion.iterations as i32);
    }
}

#[cfg(test)]
#[path = "ray_march_tests.rs"]
mod tests;
