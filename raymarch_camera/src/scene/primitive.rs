/// SDF primitives and blend parameters.
///
/// Each primitive packs into one or two `Vec4` uniforms:
/// - `Sphere`  → (center.xyz, radius)
/// - `BoxShape` → (center.xyz, half_extent)
/// - `Capsule` → (start.xyz, radius), (end.xyz, 0)

use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::engine_bail;

fn check_non_negative(source: &str, name: &str, value: f32) -> Result<()> {
    if !(value >= 0.0 && value.is_finite()) {
        engine_bail!(source, InvalidParameter,
            "{} must be a finite value >= 0, got {}", name, value);
    }
    Ok(())
}

fn check_finite(source: &str, name: &str, value: Vec3) -> Result<()> {
    if !value.is_finite() {
        engine_bail!(source, InvalidParameter,
            "{} must be finite, got {:?}", name, value);
    }
    Ok(())
}

// ===== SPHERE =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn to_uniform(&self) -> Vec4 {
        self.center.extend(self.radius)
    }

    pub fn from_uniform(value: Vec4) -> Self {
        Self::new(value.truncate(), value.w)
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("raymarch::Sphere", "sphere center", self.center)?;
        check_non_negative("raymarch::Sphere", "sphere radius", self.radius)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 2.0)
    }
}

// ===== BOX =====

/// Axis-aligned cube centered on `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extent: f32,
}

impl BoxShape {
    pub fn new(center: Vec3, half_extent: f32) -> Self {
        Self { center, half_extent }
    }

    pub fn to_uniform(&self) -> Vec4 {
        self.center.extend(self.half_extent)
    }

    pub fn from_uniform(value: Vec4) -> Self {
        Self::new(value.truncate(), value.w)
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("raymarch::BoxShape", "box center", self.center)?;
        check_non_negative("raymarch::BoxShape", "box half extent", self.half_extent)
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 2.0)
    }
}

// ===== CAPSULE =====

/// Segment `start`..`end` swept by `radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Capsule {
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self { start, end, radius }
    }

    /// (start, radius), (end, 0)
    pub fn to_uniforms(&self) -> [Vec4; 2] {
        [self.start.extend(self.radius), self.end.extend(0.0)]
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("raymarch::Capsule", "capsule start", self.start)?;
        check_finite("raymarch::Capsule", "capsule end", self.end)?;
        check_non_negative("raymarch::Capsule", "capsule radius", self.radius)
    }
}

impl Default for Capsule {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 0.5)
    }
}

// ===== BLEND =====

/// Smooth-union / smooth-intersection and rounding factors used by the
/// shader's SDF operators. Zero means a hard edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothBlend {
    /// Smooth union between the box and the first sphere
    pub box_sphere_smooth: f32,
    /// Smooth intersection with the second sphere
    pub sphere_intersect_smooth: f32,
    /// Corner rounding radius of the box
    pub box_round: f32,
}

impl SmoothBlend {
    pub fn validate(&self) -> Result<()> {
        check_non_negative("raymarch::SmoothBlend", "box_sphere_smooth", self.box_sphere_smooth)?;
        check_non_negative("raymarch::SmoothBlend", "sphere_intersect_smooth", self.sphere_intersect_smooth)?;
        check_non_negative("raymarch::SmoothBlend", "box_round", self.box_round)
    }
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
