/// Shader uniform block.
///
/// A pure data description of the values a ray pass hands to its shader:
/// named, typed, insertion-ordered. No GPU resources are created here;
/// the `RenderHost` decides how values map onto its own buffers and can
/// use `UniformValue::to_bytes()` for a raw POD copy.

use glam::{Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;
use crate::camera::PackedCorners;

/// Uniform names shared with the ray march / ray trace shaders.
pub mod names {
    pub const CAM_FRUSTUM: &str = "cam_frustum";
    pub const CAM_TO_WORLD: &str = "cam_to_world";
    pub const MAX_DISTANCE: &str = "max_distance";
    pub const MAIN_COLOR: &str = "main_color";

    pub const SPHERE1: &str = "sphere1";
    pub const SPHERE2: &str = "sphere2";
    pub const BOX1: &str = "box1";
    pub const CAPSULE1_START: &str = "capsule1_start";
    pub const CAPSULE1_END: &str = "capsule1_end";

    pub const BOX1_ROUND: &str = "box1_round";
    pub const BOX_SPHERE_SMOOTH: &str = "box_sphere_smooth";
    pub const SPHERE_INTERSECT_SMOOTH: &str = "sphere_intersect_smooth";

    pub const LIGHT_DIR: &str = "light_dir";
    pub const LIGHT_COLOR: &str = "light_color";
    pub const LIGHT_INTENSITY: &str = "light_intensity";

    pub const SHADOW_DISTANCE: &str = "shadow_distance";
    pub const SHADOW_INTENSITY: &str = "shadow_intensity";
    pub const SHADOW_PENUMBRA: &str = "shadow_penumbra";

    pub const ACCURACY: &str = "accuracy";
    pub const MAX_ITERATIONS: &str = "max_iterations";

    pub const AO_STEP_SIZE: &str = "ao_step_size";
    pub const AO_INTENSITY: &str = "ao_intensity";
    pub const AO_ITERATIONS: &str = "ao_iterations";
}

// ===== VALUES =====

/// A typed uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Vec4Array(Vec<Vec4>),
}

impl UniformValue {
    /// Short type label (for logs and host-side dispatch)
    pub fn type_name(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "float",
            UniformValue::Int(_) => "int",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::Mat4(_) => "mat4",
            UniformValue::Vec4Array(_) => "vec4[]",
        }
    }

    /// Raw native-endian bytes of the value, tightly packed.
    ///
    /// Matrices are column-major (glam layout). Hosts with std140-style
    /// layouts apply their own padding.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            UniformValue::Float(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Int(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Vec2(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Vec4(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Mat4(v) => bytemuck::bytes_of(v).to_vec(),
            UniformValue::Vec4Array(v) => bytemuck::cast_slice(v.as_slice()).to_vec(),
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            UniformValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match self {
            UniformValue::Vec4(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<&Mat4> {
        match self {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        UniformValue::Int(v)
    }
}

impl From<Vec2> for UniformValue {
    fn from(v: Vec2) -> Self {
        UniformValue::Vec2(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        UniformValue::Vec3(v)
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        UniformValue::Vec4(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        UniformValue::Mat4(v)
    }
}

impl From<PackedCorners> for UniformValue {
    fn from(corners: PackedCorners) -> Self {
        match corners {
            PackedCorners::VectorArray(vectors) => UniformValue::Vec4Array(vectors.to_vec()),
            PackedCorners::MatrixRows(matrix) => UniformValue::Mat4(matrix),
        }
    }
}

// ===== BLOCK =====

/// Named uniform values in insertion order
///
/// Setting an existing name replaces the value in place, keeping its
/// first position.
#[derive(Debug, Clone, Default)]
pub struct UniformBlock {
    values: Vec<(String, UniformValue)>,
    names: FxHashMap<String, usize>,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) a value
    pub fn set(&mut self, name: &str, value: impl Into<UniformValue>) {
        let value = value.into();
        match self.names.get(name) {
            Some(&index) => self.values[index].1 = value,
            None => {
                self.names.insert(name.to_string(), self.values.len());
                self.values.push((name.to_string(), value));
            }
        }
    }

    /// Get value by name
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        let index = self.names.get(name)?;
        self.values.get(*index).map(|(_, v)| v)
    }

    /// Get name and value by insertion index
    pub fn get_at(&self, index: usize) -> Option<(&str, &UniformValue)> {
        self.values.get(index).map(|(n, v)| (n.as_str(), v))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.names.clear();
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
