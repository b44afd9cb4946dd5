//! Application systems
//!
//! The frame loop is split into a simulation step (advance the engine) and a
//! render step (draw the resulting snapshot).

mod simulation;
mod render;

pub use simulation::{SimulationResult, SimulationSystem};
pub use render::RenderSystem;
