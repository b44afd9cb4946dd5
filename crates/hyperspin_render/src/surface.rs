//! Drawing surface abstraction

use hyperspin_math::Point2D;

/// Stroke style for a single line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// RGBA, each component 0.0-1.0
    pub color: [f32; 4],
    /// Line width in surface units
    pub width: f32,
}

/// Anything that can draw lines and text in 2D
pub trait DrawSurface {
    /// Called before the first command of a frame
    fn begin_frame(&mut self) {}

    /// Stroke a straight line between two points
    fn stroke_line(&mut self, from: Point2D, to: Point2D, style: LineStyle);

    /// Draw a short text label
    fn label(&mut self, at: Point2D, text: &str, color: [f32; 4]);

    /// Called after the last command of a frame
    fn end_frame(&mut self) {}
}

/// A recorded drawing command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Point2D, to: Point2D, style: LineStyle },
    Label { at: Point2D, text: String, color: [f32; 4] },
}

/// Surface that keeps the commands of the most recent frame in memory
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last `begin_frame`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn stroke_line(&mut self, from: Point2D, to: Point2D, style: LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn label(&mut self, at: Point2D, text: &str, color: [f32; 4]) {
        self.commands.push(DrawCommand::Label { at, text: text.to_string(), color });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
