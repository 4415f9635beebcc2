//! Camera module - intrinsics, frustum corner reconstruction, and the
//! per-frame camera snapshot.
//!
//! Everything here is a pure value: the host supplies fresh data every
//! frame and nothing is cached.

mod camera;
mod frustum_corners;
mod intrinsics;

pub use camera::Camera;
pub use frustum_corners::{
    FrustumCorners, CornerPacking, PackedCorners,
    compute_frustum_corners, compute_frustum_corners_unchecked,
    CORNER_TOP_LEFT, CORNER_TOP_RIGHT, CORNER_BOTTOM_RIGHT, CORNER_BOTTOM_LEFT,
};
pub use intrinsics::CameraIntrinsics;
