/// Mock DrawTarget for unit tests (no graphics context required)
///
/// Records every call as a `DrawCommand` so tests can assert on the exact
/// order the compositor binds viewports, transforms and geometry.

#[cfg(test)]
use glam::{Mat4, Vec2, Vec3};
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::viewer_bail;
#[cfg(test)]
use super::draw_target::{Color, DrawTarget, Viewport};

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginFrame,
    SetViewport(Viewport),
    SetTransform { projection: Mat4, view: Mat4 },
    DrawLines { segments: Vec<[Vec3; 2]>, color: Color },
    DrawText { text: String, position: Vec2 },
    EndFrame,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockDrawTarget {
    pub commands: Vec<DrawCommand>,
    /// Fail on the n-th call (0-based) with a backend error
    pub fail_at: Option<usize>,
}

#[cfg(test)]
impl MockDrawTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self { commands: Vec::new(), fail_at: Some(call) }
    }

    fn record(&mut self, command: DrawCommand) -> Result<()> {
        if self.fail_at == Some(self.commands.len()) {
            viewer_bail!("dualview::mock", BackendError,
                "injected failure at call {}", self.commands.len());
        }
        self.commands.push(command);
        Ok(())
    }

    pub fn viewports(&self) -> Vec<Viewport> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SetViewport(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl DrawTarget for MockDrawTarget {
    fn begin_frame(&mut self) -> Result<()> {
        self.record(DrawCommand::BeginFrame)
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.record(DrawCommand::SetViewport(viewport))
    }

    fn set_transform(&mut self, projection: &Mat4, view: &Mat4) -> Result<()> {
        self.record(DrawCommand::SetTransform { projection: *projection, view: *view })
    }

    fn draw_lines(&mut self, segments: &[[Vec3; 2]], color: Color) -> Result<()> {
        self.record(DrawCommand::DrawLines { segments: segments.to_vec(), color })
    }

    fn draw_text(&mut self, text: &str, position: Vec2) -> Result<()> {
        self.record(DrawCommand::DrawText { text: text.to_string(), position })
    }

    fn end_frame(&mut self) -> Result<()> {
        self.record(DrawCommand::EndFrame)
    }
}
