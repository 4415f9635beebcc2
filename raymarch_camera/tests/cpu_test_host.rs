#![allow(dead_code)]
//! CPU test host - a RenderHost that "shades" on the CPU
//!
//! Reads back the uploaded `cam_frustum`, `cam_to_world` and `sphere1`
//! uniforms and, for every pixel, rebuilds the view ray the way a vertex +
//! fragment stage would: bilinear weights from the quad vertices' UVs,
//! corners fetched by each vertex's corner index. Each ray is then tested
//! against the sphere analytically, giving a hit mask the tests can check.

use raymarch_camera::glam::{Mat4, Vec2, Vec3, Vec4};
use raymarch_camera::raymarch::{Error, Result};
use raymarch_camera::raymarch::render::{
    FullScreenQuad, RenderHost, UniformBlock, UniformValue, uniforms::names,
};

pub struct CpuRayHost {
    pub width: u32,
    pub height: u32,
    pub shader_available: bool,
    pub uniforms: Option<UniformBlock>,
    pub hits: Vec<bool>,
    pub draws: usize,
    pub blits: usize,
}

impl CpuRayHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shader_available: true,
            uniforms: None,
            hits: vec![false; (width * height) as usize],
            draws: 0,
            blits: 0,
        }
    }

    pub fn hit(&self, x: u32, y: u32) -> bool {
        self.hits[(y * self.width + x) as usize]
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|h| **h).count()
    }

    fn corners(uniforms: &UniformBlock) -> Result<[Vec4; 4]> {
        match uniforms.get(names::CAM_FRUSTUM) {
            Some(UniformValue::Mat4(m)) => Ok([m.row(0), m.row(1), m.row(2), m.row(3)]),
            Some(UniformValue::Vec4Array(v)) if v.len() == 4 => Ok([v[0], v[1], v[2], v[3]]),
            other => Err(Error::BackendError(format!("bad cam_frustum: {:?}", other))),
        }
    }
}

/// Smallest positive t where origin + t * dir hits the sphere
fn intersect_sphere(origin: Vec3, dir: Vec3, sphere: Vec4) -> Option<f32> {
    let oc = origin - sphere.truncate();
    let b = oc.dot(dir);
    let c = oc.length_squared() - sphere.w * sphere.w;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t > 0.0).then_some(t)
}

impl RenderHost for CpuRayHost {
    fn shader_available(&self) -> bool {
        self.shader_available
    }

    fn upload_uniforms(&mut self, uniforms: &UniformBlock) -> Result<()> {
        self.uniforms = Some(uniforms.clone());
        Ok(())
    }

    fn draw_fullscreen_quad(&mut self, quad: &FullScreenQuad) -> Result<()> {
        let uniforms = self.uniforms.as_ref()
            .ok_or_else(|| Error::BackendError("draw before upload".to_string()))?;
        let corners = Self::corners(uniforms)?;
        let camera_to_world = uniforms.get(names::CAM_TO_WORLD)
            .and_then(UniformValue::as_mat4)
            .copied()
            .unwrap_or(Mat4::IDENTITY);
        let sphere = uniforms.get(names::SPHERE1)
            .and_then(UniformValue::as_vec4)
            .ok_or_else(|| Error::BackendError("missing sphere1".to_string()))?;
        let origin = camera_to_world.w_axis.truncate();

        for y in 0..self.height {
            for x in 0..self.width {
                let uv = Vec2::new(
                    (x as f32 + 0.5) / self.width as f32,
                    (y as f32 + 0.5) / self.height as f32,
                );

                let mut view_ray = Vec3::ZERO;
                for vertex in quad.vertices() {
                    let vu = vertex.uv();
                    let wx = if vu.x > 0.5 { uv.x } else { 1.0 - uv.x };
                    let wy = if vu.y > 0.5 { uv.y } else { 1.0 - uv.y };
                    view_ray += corners[vertex.corner_index()].truncate() * wx * wy;
                }

                let dir = camera_to_world.transform_vector3(view_ray).normalize();
                self.hits[(y * self.width + x) as usize] = intersect_sphere(origin, dir, sphere).is_some();
            }
        }

        self.draws += 1;
        Ok(())
    }

    fn blit_passthrough(&mut self) -> Result<()> {
        self.blits += 1;
        Ok(())
    }
}
