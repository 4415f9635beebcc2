//! Scene module - the SDF primitives and light a ray pass describes to its shader.
//!
//! The distance field itself is evaluated in the shader; these are plain
//! parameter containers with validation and uniform packing.

mod lighting;
mod primitive;

pub use lighting::Light;
pub use primitive::{Sphere, BoxShape, Capsule, SmoothBlend};
