/*!
# Raymarch Camera

Camera-side support for full-screen ray marching and ray tracing passes.

The fragment shader does the marching; this crate gives it what it needs
each frame:

- **Frustum corners**: four view-space vectors to the near-plane corners,
  interpolated across a full-screen quad into one view ray per pixel
- **Effects**: SDF primitives, lighting, shadow and ambient-occlusion
  parameters packed into a named uniform block
- **RayPass**: per-frame driver that uploads uniforms and draws the quad
  through a host-implemented `RenderHost`

## Architecture

- **camera**: `CameraIntrinsics`, `FrustumCorners`, per-frame `Camera` snapshot
- **scene**: `Sphere`, `BoxShape`, `Capsule`, `SmoothBlend`, `Light`
- **effect**: `RayEffect` trait, `RayMarchEffect`, `RayTraceEffect`
- **render**: `UniformBlock`, `FullScreenQuad`, `RenderHost`, `RayPass`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod scene;
pub mod effect;
pub mod render;

// Main raymarch namespace module
pub mod raymarch {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod effect {
        pub use crate::effect::*;
    }

    pub mod render {
        pub use crate::render::*;
    }
}

// Re-export math library at crate root
pub use glam;
