//! Hypercube wireframe renderer
//!
//! Each vertex is scaled, rotated and projected (`project(R · S · v)`), and
//! every hypercube edge becomes one stroked line. Edges along the newest
//! axis use the engine's alpha hint so that axis fades in as it grows.

use hyperspin_core::FrameSnapshot;
use hyperspin_math::{project, AxisEdge, MathError, Point2D};
use crate::palette::{axis_color, axis_label};
use crate::surface::{DrawSurface, LineStyle};

/// Counts for one rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub dimension: usize,
    pub vertices: usize,
    pub edges: usize,
}

/// Draws frames onto a [`DrawSurface`]
#[derive(Clone, Debug)]
pub struct WireframeRenderer {
    /// Surface units per model unit
    scale: f64,
    line_width: f32,
    show_labels: bool,
    /// Projected vertex positions from the last frame
    points: Vec<Point2D>,
    /// Edge list and the dimension it was built for
    edges: Vec<AxisEdge>,
    edges_dimension: Option<usize>,
}

impl Default for WireframeRenderer {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl WireframeRenderer {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            line_width: 1.0,
            show_labels: false,
            points: Vec::new(),
            edges: Vec::new(),
            edges_dimension: None,
        }
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_labels(mut self, enabled: bool) -> Self {
        self.show_labels = enabled;
        self
    }

    /// Projected vertex positions of the last frame
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Last frame's positions as interleaved `x, y` values, ready for upload
    pub fn point_data(&self) -> &[f64] {
        bytemuck::cast_slice(&self.points)
    }

    /// Project every vertex of the snapshot into surface coordinates
    pub fn project_vertices(&mut self, frame: &FrameSnapshot<'_>) -> Result<&[Point2D], MathError> {
        let combined = frame.rotation.mul(frame.scale)?;

        self.points.clear();
        self.points.reserve(frame.vertices().len());
        for v in frame.vertices() {
            let moved = combined.transform(v)?;
            self.points.push(project(&moved, frame.basis)? * self.scale);
        }
        Ok(&self.points)
    }

    /// Render one frame
    pub fn render<S: DrawSurface>(
        &mut self,
        frame: &FrameSnapshot<'_>,
        surface: &mut S,
    ) -> Result<FrameStats, MathError> {
        let n = frame.dimension();
        if self.edges_dimension != Some(n) {
            self.edges = frame.topology.axis_edges().collect();
            self.edges_dimension = Some(n);
            log::debug!("Rebuilt edge list for {}-cube: {} edges", n, self.edges.len());
        }

        self.project_vertices(frame)?;

        surface.begin_frame();
        for edge in &self.edges {
            let mut color = axis_color(edge.axis);
            if edge.axis + 1 == n {
                color[3] *= frame.alpha_hint as f32;
            }
            let style = LineStyle { color, width: self.line_width };
            surface.stroke_line(self.points[edge.a], self.points[edge.b], style);
        }

        if self.show_labels {
            for (axis, dir) in frame.basis.directions().iter().enumerate() {
                let at = *dir * (self.scale * 1.25);
                surface.label(at, &axis_label(axis), axis_color(axis));
            }
        }
        surface.end_frame();

        Ok(FrameStats {
            dimension: n,
            vertices: self.points.len(),
            edges: self.edges.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use hyperspin_core::{DimensionalTransformEngine, EngineConfig};

    fn engine_at(dim: f64) -> DimensionalTransformEngine {
        let config = EngineConfig::default().with_dimensions(1, 6);
        let mut e = DimensionalTransformEngine::new(config).unwrap();
        e.set_dimension(dim).unwrap();
        e
    }

    #[test]
    fn test_square_at_phase_zero() {
        let e = engine_at(2.0);
        let mut r = WireframeRenderer::new(1.0);
        let points = r.project_vertices(&e.snapshot()).unwrap().to_vec();

        // No rotation at phase 0 and the y axis has not appeared yet,
        // so the square collapses onto the x axis
        assert_eq!(points.len(), 4);
        assert!((points[0].x + 1.0).abs() < 1e-12);
        assert!(points.iter().all(|p| p.y.abs() < 1e-12));
    }

    #[test]
    fn test_render_one_line_per_edge() {
        let e = engine_at(4.5);
        let mut r = WireframeRenderer::default();
        let mut surface = RecordingSurface::new();
        let stats = r.render(&e.snapshot(), &mut surface).unwrap();

        assert_eq!(stats, FrameStats { dimension: 4, vertices: 16, edges: 32 });
        assert_eq!(surface.line_count(), 32);
        assert_eq!(r.point_data().len(), 32);
    }

    #[test]
    fn test_newest_axis_uses_alpha_hint() {
        let e = engine_at(3.5);
        let alpha = e.global_alpha_hint() as f32;
        let mut r = WireframeRenderer::default();
        let mut surface = RecordingSurface::new();
        r.render(&e.snapshot(), &mut surface).unwrap();

        let alphas: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { style, .. } => Some(style.color[3]),
                _ => None,
            })
            .collect();
        // 4 edges run along the newest axis of a cube
        assert_eq!(alphas.iter().filter(|&&a| a == alpha).count(), 4);
        assert_eq!(alphas.iter().filter(|&&a| a == 1.0).count(), 8);
    }

    #[test]
    fn test_labels_drawn_per_axis() {
        let e = engine_at(5.0);
        let mut r = WireframeRenderer::default().with_labels(true);
        let mut surface = RecordingSurface::new();
        r.render(&e.snapshot(), &mut surface).unwrap();

        let labels: Vec<&str> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["x", "y", "z", "w", "v"]);
    }

    #[test]
    fn test_edge_cache_follows_dimension() {
        let mut e = engine_at(2.5);
        let mut r = WireframeRenderer::default();
        let mut surface = RecordingSurface::new();
        assert_eq!(r.render(&e.snapshot(), &mut surface).unwrap().edges, 4);

        e.set_dimension(3.2).unwrap();
        assert_eq!(r.render(&e.snapshot(), &mut surface).unwrap().edges, 12);
    }
}
