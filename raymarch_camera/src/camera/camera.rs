/// Camera - per-frame snapshot handed over by the host.
///
/// The host owns the real camera object. Each frame it copies the current
/// intrinsics and camera-to-world transform into this passive container,
/// which the ray pass reads. Nothing here is cached between frames.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::frustum_corners::FrustumCorners;
use super::intrinsics::CameraIntrinsics;

/// Camera intrinsics plus camera-to-world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    intrinsics: CameraIntrinsics,
    camera_to_world: Mat4,
}

impl Camera {
    /// Create a camera snapshot.
    pub fn new(intrinsics: CameraIntrinsics, camera_to_world: Mat4) -> Self {
        Self {
            intrinsics,
            camera_to_world,
        }
    }

    /// Camera at `eye` looking at `target` (right-handed, looks down -Z).
    pub fn look_at(intrinsics: CameraIntrinsics, eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::new(intrinsics, Mat4::look_at_rh(eye, target, up).inverse())
    }

    // ===== GETTERS =====

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    /// View space to world space.
    pub fn camera_to_world(&self) -> &Mat4 {
        &self.camera_to_world
    }

    /// World space to view space.
    pub fn world_to_camera(&self) -> Mat4 {
        self.camera_to_world.inverse()
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.camera_to_world.w_axis.truncate()
    }

    /// Validated frustum corners for the current intrinsics.
    pub fn frustum_corners(&self) -> Result<FrustumCorners> {
        FrustumCorners::from_intrinsics(&self.intrinsics)
    }

    // ===== SETTERS =====

    pub fn set_intrinsics(&mut self, intrinsics: CameraIntrinsics) {
        self.intrinsics = intrinsics;
    }

    pub fn set_camera_to_world(&mut self, camera_to_world: Mat4) {
        self.camera_to_world = camera_to_world;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
