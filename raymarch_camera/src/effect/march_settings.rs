/// Marching, shadow and ambient-occlusion parameter groups.
///
/// Ranges follow what the ray march shader can handle; `validate()`
/// rejects anything outside them instead of clamping.

use std::ops::RangeInclusive;
use glam::Vec2;
use crate::error::Result;
use crate::engine_bail;

pub(crate) fn check_range<T>(source: &str, name: &str, value: T, range: RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    // Written as contains() so NaN fails too
    if !range.contains(&value) {
        engine_bail!(source, InvalidParameter,
            "{} = {} outside [{}, {}]", name, value, range.start(), range.end());
    }
    Ok(())
}

// ===== MARCHING =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchSettings {
    /// Distance after which a ray counts as a miss
    pub max_distance: f32,
    /// Surface hit threshold
    pub accuracy: f32,
    pub max_iterations: u32,
}

impl MarchSettings {
    pub const ACCURACY_RANGE: RangeInclusive<f32> = 0.0001..=0.1;
    pub const MAX_ITERATIONS_RANGE: RangeInclusive<u32> = 64..=500;

    pub fn validate(&self) -> Result<()> {
        check_range("raymarch::MarchSettings", "max_distance", self.max_distance, 0.0..=f32::MAX)?;
        check_range("raymarch::MarchSettings", "accuracy", self.accuracy, Self::ACCURACY_RANGE)?;
        check_range("raymarch::MarchSettings", "max_iterations", self.max_iterations, Self::MAX_ITERATIONS_RANGE)
    }
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            max_distance: 500.0,
            accuracy: 0.007,
            max_iterations: 500,
        }
    }
}

// ===== SHADOWS =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    pub intensity: f32,
    /// Soft shadow penumbra factor (higher = harder)
    pub penumbra: f32,
    /// Shadow ray start and end distance
    pub distance: Vec2,
}

impl ShadowSettings {
    pub fn validate(&self) -> Result<()> {
        check_range("raymarch::ShadowSettings", "shadow intensity", self.intensity, 0.0..=f32::MAX)?;
        check_range("raymarch::ShadowSettings", "shadow penumbra", self.penumbra, 0.0..=f32::MAX)?;
        check_range("raymarch::ShadowSettings", "shadow min distance", self.distance.x, 0.0..=f32::MAX)?;
        if !(self.distance.y >= self.distance.x) {
            engine_bail!("raymarch::ShadowSettings", InvalidParameter,
                "shadow max distance {} is below min distance {}", self.distance.y, self.distance.x);
        }
        Ok(())
    }
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            penumbra: 16.0,
            distance: Vec2::new(0.1, 100.0),
        }
    }
}

// ===== AMBIENT OCCLUSION =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientOcclusionSettings {
    pub iterations: u32,
    pub step_size: f32,
    pub intensity: f32,
}

impl AmbientOcclusionSettings {
    pub const ITERATIONS_RANGE: RangeInclusive<u32> = 1..=5;
    pub const STEP_SIZE_RANGE: RangeInclusive<f32> = 0.01..=10.0;
    pub const INTENSITY_RANGE: RangeInclusive<f32> = 0.0..=1.0;

    pub fn validate(&self) -> Result<()> {
        let source = "raymarch::AmbientOcclusionSettings";
        check_range(source, "ao iterations", self.iterations, Self::ITERATIONS_RANGE)?;
        check_range(source, "ao step size", self.step_size, Self::STEP_SIZE_RANGE)?;
        check_range(source, "ao intensity", self.intensity, Self::INTENSITY_RANGE)
    }
}

impl Default for AmbientOcclusionSettings {
    fn default() -> Self {
        Self {
            iterations: 3,
            step_size: 0.1,
            intensity: 0.5,
        }
    }
}

#[cfg(test)]
#[path = "march_settings_tests.rs"]
mod tests;
