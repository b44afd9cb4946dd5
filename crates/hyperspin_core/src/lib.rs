//! Core engine for the hyperspin animation
//!
//! This crate owns the time-varying state of the animation:
//!
//! - [`EngineConfig`] - Cycle period, dimension range and easing settings
//! - [`AnimationState`] - Phase and dimension values derived each tick
//! - [`DimensionalTransformEngine`] - Advances time and keeps the vertex
//!   set, projection basis, rotation and scale in step with the dimension
//! - [`FrameSnapshot`] - Read-only view handed to a renderer
//! - [`EngineError`] - Configuration and dimension errors

mod error;
mod engine_config;
mod animation;
mod engine;

pub use error::EngineError;
pub use engine_config::EngineConfig;
pub use animation::AnimationState;
pub use engine::{DimensionalTransformEngine, DirtyFlags, FrameSnapshot};

// Re-export commonly used types from hyperspin_math for convenience
pub use hyperspin_math::{
    AxisEdge, HypercubeTopology, MathError, Matrix, Point2D, ProjectionBasis, VectorN,
};
