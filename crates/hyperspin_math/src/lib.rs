//! N-dimensional Mathematics Library
//!
//! This crate provides runtime-sized vector and matrix types plus the
//! hypercube geometry used by the hyperspin animation engine.
//!
//! ## Core Types
//!
//! - [`VectorN`] - Point in N-space
//! - [`Matrix`] - Row-major R×C matrix with checked multiplication
//! - [`MathError`] - Dimension mismatch between operands
//!
//! ## Geometry
//!
//! - [`HypercubeTopology`] - Vertex set and edge relation of an n-cube
//! - [`ProjectionBasis`] - Orthographic N-to-2 projection
//! - [`easing`] - Animation timing helpers

mod error;
mod vec_n;
pub mod mat_n;
pub mod hypercube;
pub mod projection;
pub mod easing;

pub use error::MathError;
pub use vec_n::VectorN;
pub use mat_n::Matrix;
pub use hypercube::{HypercubeTopology, AxisEdge};
pub use projection::{ProjectionBasis, Point2D, project};
