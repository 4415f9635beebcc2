/// CameraIntrinsics - the three scalars a frustum corner set is built from.
///
/// Supplied fresh by the host every frame. Validation is explicit:
/// `validate()` rejects anything that cannot describe a perspective
/// frustum, while the raw constructor accepts any value.

use crate::error::Result;
use crate::engine_bail;

/// Vertical field of view, aspect ratio and near clip distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Vertical field of view in degrees, in (0, 180)
    pub vertical_fov_degrees: f32,
    /// Width / height, > 0
    pub aspect: f32,
    /// Distance to the near clip plane, > 0
    pub near_clip: f32,
}

impl CameraIntrinsics {
    /// Create intrinsics without validation.
    pub fn new(vertical_fov_degrees: f32, aspect: f32, near_clip: f32) -> Self {
        Self {
            vertical_fov_degrees,
            aspect,
            near_clip,
        }
    }

    /// Create intrinsics from a viewport size in pixels.
    ///
    /// A zero height yields a non-finite aspect, which `validate()` rejects.
    pub fn from_viewport(vertical_fov_degrees: f32, width: u32, height: u32, near_clip: f32) -> Self {
        Self::new(vertical_fov_degrees, width as f32 / height as f32, near_clip)
    }

    /// Check that these intrinsics describe a perspective frustum.
    ///
    /// NaN fails every comparison below, so it is rejected along with
    /// out-of-range values.
    pub fn validate(&self) -> Result<()> {
        let fov = self.vertical_fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            engine_bail!("raymarch::CameraIntrinsics", InvalidIntrinsics,
                "vertical fov must be in (0, 180) degrees, got {}", fov);
        }
        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            engine_bail!("raymarch::CameraIntrinsics", InvalidIntrinsics,
                "aspect must be a finite value > 0, got {}", self.aspect);
        }
        if !(self.near_clip > 0.0 && self.near_clip.is_finite()) {
            engine_bail!("raymarch::CameraIntrinsics", InvalidIntrinsics,
                "near clip must be a finite value > 0, got {}", self.near_clip);
        }
        Ok(())
    }

    /// Half height of the near plane per unit of distance: `tan(fov / 2)`.
    pub fn half_vertical_extent(&self) -> f32 {
        (self.vertical_fov_degrees.to_radians() * 0.5).tan()
    }

    /// Half width of the near plane per unit of distance.
    pub fn half_horizontal_extent(&self) -> f32 {
        self.half_vertical_extent() * self.aspect
    }
}

#[cfg(test)]
#[path = "intrinsics_tests.rs"]
mod tests;
