/// FrustumCorners - view-space vectors to the four near-plane corners.
///
/// A full-screen ray pass cannot ask the GPU for a per-pixel view ray, so
/// the four corner vectors are uploaded once per frame and the fragment
/// stage interpolates between them (see `FullScreenQuad`). With the
/// camera-to-world matrix this gives a world-space ray for every pixel.
///
/// Conventions:
/// - View space is right-handed, the camera looks down -Z
///   (`forward = +Z`, corners sit on the plane `z = -near_clip`)
/// - Canonical order is TL, TR, BR, BL (indices 0..3), for both packings
/// - UV (0,0) is bottom-left, (1,1) is top-right

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::error::Result;
use super::intrinsics::CameraIntrinsics;

/// Corner indices (canonical order)
pub const CORNER_TOP_LEFT: usize = 0;
pub const CORNER_TOP_RIGHT: usize = 1;
pub const CORNER_BOTTOM_RIGHT: usize = 2;
pub const CORNER_BOTTOM_LEFT: usize = 3;

/// How the four corners are laid out in a single uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerPacking {
    /// Four `Vec4` (w = 0), one array element per corner
    VectorArray,
    /// One `Mat4`, row i holds corner i (w = 0)
    MatrixRows,
}

/// Corners packed for upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PackedCorners {
    VectorArray([Vec4; 4]),
    MatrixRows(Mat4),
}

/// The four near-plane corner vectors of a perspective camera.
///
/// Pure value: recomputed every frame from fresh intrinsics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    corners: [Vec3; 4],
    near_clip: f32,
}

/// Compute frustum corners, rejecting intrinsics that cannot describe a
/// perspective frustum.
///
/// # Example
///
/// ```
/// use raymarch_camera::raymarch::camera::compute_frustum_corners;
///
/// let corners = compute_frustum_corners(90.0, 1.0, 1.0)?;
/// assert!((corners.top_left() - raymarch_camera::glam::Vec3::new(-1.0, 1.0, -1.0)).length() < 1e-5);
/// # Ok::<(), raymarch_camera::raymarch::Error>(())
/// ```
pub fn compute_frustum_corners(vertical_fov_degrees: f32, aspect: f32, near_clip: f32) -> Result<FrustumCorners> {
    FrustumCorners::from_intrinsics(&CameraIntrinsics::new(vertical_fov_degrees, aspect, near_clip))
}

/// Compute frustum corners without validation.
///
/// Degenerate input gives degenerate vectors (zero extent at fov 0,
/// collapsed corners at aspect 0) instead of an error.
pub fn compute_frustum_corners_unchecked(vertical_fov_degrees: f32, aspect: f32, near_clip: f32) -> FrustumCorners {
    FrustumCorners::from_intrinsics_unchecked(&CameraIntrinsics::new(vertical_fov_degrees, aspect, near_clip))
}

impl FrustumCorners {
    /// Validate the intrinsics, then compute the corners.
    pub fn from_intrinsics(intrinsics: &CameraIntrinsics) -> Result<Self> {
        intrinsics.validate()?;
        Ok(Self::from_intrinsics_unchecked(intrinsics))
    }

    /// Compute the corners as-is.
    pub fn from_intrinsics_unchecked(intrinsics: &CameraIntrinsics) -> Self {
        let forward = Vec3::Z;
        let near = intrinsics.near_clip;

        // Extents are measured on the near plane itself, so every corner
        // scales linearly with the near clip distance.
        let half_height = intrinsics.half_vertical_extent() * near;
        let up = Vec3::Y * half_height;
        let right = Vec3::X * half_height * intrinsics.aspect;
        let center = -forward * near;

        Self {
            corners: [
                center - right + up, // TL
                center + right + up, // TR
                center + right - up, // BR
                center - right - up, // BL
            ],
            near_clip: near,
        }
    }

    // ===== ACCESS =====

    /// All four corners in canonical order (TL, TR, BR, BL).
    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    /// Corner by canonical index.
    pub fn corner(&self, index: usize) -> Option<Vec3> {
        self.corners.get(index).copied()
    }

    pub fn top_left(&self) -> Vec3 {
        self.corners[CORNER_TOP_LEFT]
    }

    pub fn top_right(&self) -> Vec3 {
        self.corners[CORNER_TOP_RIGHT]
    }

    pub fn bottom_right(&self) -> Vec3 {
        self.corners[CORNER_BOTTOM_RIGHT]
    }

    pub fn bottom_left(&self) -> Vec3 {
        self.corners[CORNER_BOTTOM_LEFT]
    }

    /// Near clip distance the corners were built with.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Corners rescaled onto the plane `z = -1`.
    ///
    /// Not meaningful for unchecked corners with a zero near clip.
    pub fn at_unit_depth(&self) -> [Vec3; 4] {
        self.corners.map(|c| c / self.near_clip)
    }

    // ===== PACKING =====

    /// Pack the corners for upload.
    pub fn pack(&self, packing: CornerPacking) -> PackedCorners {
        match packing {
            CornerPacking::VectorArray => PackedCorners::VectorArray(self.to_vector_array()),
            CornerPacking::MatrixRows => PackedCorners::MatrixRows(self.to_matrix_rows()),
        }
    }

    /// Four `Vec4` with w = 0, in canonical order.
    pub fn to_vector_array(&self) -> [Vec4; 4] {
        self.corners.map(|c| c.extend(0.0))
    }

    /// `Mat4` whose row i is corner i (w = 0).
    ///
    /// glam stores columns, so the corners are laid out as columns and
    /// transposed.
    pub fn to_matrix_rows(&self) -> Mat4 {
        let [tl, tr, br, bl] = self.to_vector_array();
        Mat4::from_cols(tl, tr, br, bl).transpose()
    }

    // ===== INTERPOLATION =====

    /// Bilinear interpolation across the near plane.
    ///
    /// `uv` (0,0) is the bottom-left corner, (1,1) the top-right. This is
    /// what the rasterizer does between the quad's vertices.
    pub fn interpolate(&self, uv: Vec2) -> Vec3 {
        let bottom = self.bottom_left().lerp(self.bottom_right(), uv.x);
        let top = self.top_left().lerp(self.top_right(), uv.x);
        bottom.lerp(top, uv.y)
    }

    /// Normalized view-space ray direction through `uv`.
    pub fn ray_direction(&self, uv: Vec2) -> Vec3 {
        self.interpolate(uv).normalize()
    }

    /// Normalized world-space ray direction through `uv`.
    ///
    /// Only the rotation/scale part of `camera_to_world` applies.
    pub fn world_ray_direction(&self, camera_to_world: &Mat4, uv: Vec2) -> Vec3 {
        camera_to_world.transform_vector3(self.interpolate(uv)).normalize()
    }
}

impl PackedCorners {
    /// The packing this value was produced with.
    pub fn packing(&self) -> CornerPacking {
        match self {
            PackedCorners::VectorArray(_) => CornerPacking::VectorArray,
            PackedCorners::MatrixRows(_) => CornerPacking::MatrixRows,
        }
    }

    /// Corner `index` as a `Vec4`, whatever the packing.
    pub fn corner(&self, index: usize) -> Option<Vec4> {
        if index >= 4 {
            return None;
        }
        match self {
            PackedCorners::VectorArray(vectors) => Some(vectors[index]),
            PackedCorners::MatrixRows(matrix) => Some(matrix.row(index)),
        }
    }
}

#[cfg(test)]
#[path = "frustum_corners_tests.rs"]
mod tests;
