/// Mock RenderHost for unit tests (no GPU required)
///
/// Records every call so tests can check what a ray pass asked for,
/// and can be told to fail individual calls.

#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::engine_bail;
#[cfg(test)]
use super::{RenderHost, FullScreenQuad, UniformBlock};

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Upload(usize),
    Draw,
    Blit,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRenderHost {
    pub shader_available: bool,
    pub calls: Vec<HostCall>,
    pub last_uniforms: Option<UniformBlock>,
    pub fail_upload: bool,
    pub fail_draw: bool,
}

#[cfg(test)]
impl MockRenderHost {
    pub fn new() -> Self {
        Self {
            shader_available: true,
            ..Default::default()
        }
    }

    pub fn without_shader() -> Self {
        Self::default()
    }

    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == HostCall::Draw).count()
    }

    pub fn blit_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == HostCall::Blit).count()
    }
}

#[cfg(test)]
impl RenderHost for MockRenderHost {
    fn shader_available(&self) -> bool {
        self.shader_available
    }

    fn upload_uniforms(&mut self, uniforms: &UniformBlock) -> Result<()> {
        if self.fail_upload {
            engine_bail!("raymarch::MockRenderHost", BackendError, "Mock upload failure");
        }
        self.calls.push(HostCall::Upload(uniforms.len()));
        self.last_uniforms = Some(uniforms.clone());
        Ok(())
    }

    fn draw_fullscreen_quad(&mut self, quad: &FullScreenQuad) -> Result<()> {
        if self.fail_draw {
            engine_bail!("raymarch::MockRenderHost", BackendError, "Mock draw failure");
        }
        assert_eq!(quad.vertices().len(), 4);
        self.calls.push(HostCall::Draw);
        Ok(())
    }

    fn blit_passthrough(&mut self) -> Result<()> {
        self.calls.push(HostCall::Blit);
        Ok(())
    }
}
