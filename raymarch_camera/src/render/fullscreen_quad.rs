/// Full-screen quad - the four vertices a ray pass draws.
///
/// Positions are in a [0, 1] orthographic viewport space. The z component
/// carries the frustum corner index of the vertex, so the vertex stage can
/// fetch `cam_frustum[z]` and let the rasterizer interpolate the view ray.
///
/// Emission order is BL, BR, TR, TL:
///
/// | vertex | uv    | corner index |
/// |--------|-------|--------------|
/// | BL     | (0,0) | 3            |
/// | BR     | (1,0) | 2            |
/// | TR     | (1,1) | 1            |
/// | TL     | (0,1) | 0            |

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::camera::{
    CORNER_TOP_LEFT, CORNER_TOP_RIGHT, CORNER_BOTTOM_RIGHT, CORNER_BOTTOM_LEFT,
};

/// One quad vertex, ready for upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// x, y in [0, 1] viewport space; z = frustum corner index
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl QuadVertex {
    const fn new(x: f32, y: f32, corner: f32) -> Self {
        Self {
            position: [x, y, corner],
            uv: [x, y],
        }
    }

    /// Frustum corner index carried in `position.z`
    pub fn corner_index(&self) -> usize {
        self.position[2] as usize
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from(self.uv)
    }

    /// Position remapped to normalized device coordinates ([-1, 1])
    pub fn ndc_position(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1]) * 2.0 - Vec2::ONE
    }
}

static QUAD_VERTICES: [QuadVertex; 4] = FullScreenQuad::VERTICES;

/// The full-screen quad drawn by every ray pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullScreenQuad;

impl FullScreenQuad {
    /// BL, BR, TR, TL
    pub const VERTICES: [QuadVertex; 4] = [
        QuadVertex::new(0.0, 0.0, CORNER_BOTTOM_LEFT as f32),
        QuadVertex::new(1.0, 0.0, CORNER_BOTTOM_RIGHT as f32),
        QuadVertex::new(1.0, 1.0, CORNER_TOP_RIGHT as f32),
        QuadVertex::new(0.0, 1.0, CORNER_TOP_LEFT as f32),
    ];

    /// Two counter-clockwise triangles, for hosts without quad primitives
    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    pub fn vertices(&self) -> &'static [QuadVertex; 4] {
        &QUAD_VERTICES
    }

    pub fn indices(&self) -> &'static [u16; 6] {
        &Self::INDICES
    }

    /// Vertex data as raw bytes (20 bytes per vertex)
    pub fn vertex_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(&QUAD_VERTICES)
    }
}

#[cfg(test)]
#[path = "fullscreen_quad_tests.rs"]
mod tests;
