//! Wireframe rendering for hyperspin
//!
//! Turns a [`FrameSnapshot`](hyperspin_core::FrameSnapshot) into 2D stroke
//! commands on a [`DrawSurface`]. The surface itself (canvas, SVG, GPU
//! buffer) is supplied by the caller.

pub mod surface;
pub mod wireframe;
pub mod palette;

pub use surface::{DrawCommand, DrawSurface, LineStyle, RecordingSurface};
pub use wireframe::{FrameStats, WireframeRenderer};
pub use palette::{axis_color, axis_label};
