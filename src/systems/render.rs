//! Frame rendering system
//!
//! Draws the engine's current snapshot with the wireframe renderer onto a
//! caller-supplied surface.

use hyperspin_core::DimensionalTransformEngine;
use hyperspin_math::MathError;
use hyperspin_render::{DrawSurface, FrameStats, WireframeRenderer};
use crate::config::RenderingConfig;

/// Manages wireframe rendering
pub struct RenderSystem {
    renderer: WireframeRenderer,
    frames: u64,
}

impl RenderSystem {
    /// Create render system from config
    pub fn new(config: &RenderingConfig) -> Self {
        let renderer = WireframeRenderer::new(config.scale)
            .with_line_width(config.line_width)
            .with_labels(config.show_labels);
        Self { renderer, frames: 0 }
    }

    /// Render the engine's current frame
    pub fn render<S: DrawSurface>(
        &mut self,
        engine: &DimensionalTransformEngine,
        surface: &mut S,
    ) -> Result<FrameStats, MathError> {
        let stats = self.renderer.render(&engine.snapshot(), surface)?;
        self.frames += 1;
        Ok(stats)
    }

    /// Number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn renderer(&self) -> &WireframeRenderer {
        &self.renderer
    }
}
