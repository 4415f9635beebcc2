/// Directional light parameters.
///
/// The direction comes from the host's light transform (its forward axis).
/// With no light assigned, or a zero-length direction, the light points
/// straight down.

use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::engine_bail;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space direction the light travels in; `None` = no light assigned
    pub direction: Option<Vec3>,
    /// Linear RGBA
    pub color: Vec4,
    pub intensity: f32,
}

impl Light {
    pub fn new(direction: Vec3, color: Vec4, intensity: f32) -> Self {
        Self {
            direction: Some(direction),
            color,
            intensity,
        }
    }

    /// Normalized direction, falling back to (0, -1, 0)
    pub fn direction(&self) -> Vec3 {
        self.direction
            .and_then(Vec3::try_normalize)
            .unwrap_or(Vec3::NEG_Y)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.intensity >= 0.0 && self.intensity.is_finite()) {
            engine_bail!("raymarch::Light", InvalidParameter,
                "light intensity must be a finite value >= 0, got {}", self.intensity);
        }
        if !self.color.is_finite() {
            engine_bail!("raymarch::Light", InvalidParameter,
                "light color must be finite, got {:?}", self.color);
        }
        Ok(())
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: None,
            color: Vec4::ONE,
            intensity: 1.0,
        }
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
