//! Dimensional transform engine
//!
//! Owns the animation phase and everything derived from it. One tick is
//! [`DimensionalTransformEngine::advance`] followed by any number of
//! read-only accesses; the vertex set, projection basis, rotation and scale
//! are always sized for the same integer dimension when `advance` returns.

use bitflags::bitflags;
use hyperspin_math::{
    mat_n::{appear_scale, chained_rotation},
    AxisEdge, HypercubeTopology, Matrix, ProjectionBasis, VectorN,
};
use crate::{AnimationState, EngineConfig, EngineError};

bitflags! {
    /// Flags indicating which derived values changed on the last update
    ///
    /// Lets a renderer skip rebuilding vertex/edge buffers when only the
    /// transform moved.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Vertex set and projection basis were regenerated
        const TOPOLOGY = 1 << 0;
        /// Rotation matrix changed
        const ROTATION = 1 << 1;
        /// Scale matrix (appear amount) changed
        const SCALE = 1 << 2;
        /// Everything was rebuilt
        const ALL = Self::TOPOLOGY.bits() | Self::ROTATION.bits() | Self::SCALE.bits();
    }
}

/// Read-only view of one frame's geometry
///
/// Borrowing the engine guarantees the pieces all belong to the same tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub state: AnimationState,
    pub topology: &'a HypercubeTopology,
    pub basis: &'a ProjectionBasis,
    pub rotation: &'a Matrix,
    pub scale: &'a Matrix,
    pub alpha_hint: f64,
}

impl FrameSnapshot<'_> {
    /// Integer dimension every piece of the snapshot is sized for
    #[inline]
    pub fn dimension(&self) -> usize {
        self.topology.dimension()
    }

    #[inline]
    pub fn vertices(&self) -> &[VectorN] {
        self.topology.vertices()
    }
}

/// Drives the fractional dimension over time and derives the per-frame transform
#[derive(Clone, Debug)]
pub struct DimensionalTransformEngine {
    config: EngineConfig,
    state: AnimationState,
    /// Integer dimension the cached topology and basis were built for
    cached_dimension: Option<usize>,
    topology: HypercubeTopology,
    basis: ProjectionBasis,
    rotation: Matrix,
    scale: Matrix,
    alpha_hint: f64,
    dirty: DirtyFlags,
}

impl DimensionalTransformEngine {
    /// Create an engine at the start of the cycle
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let state = AnimationState::at_phase(0.0, &config);
        let mut engine = Self {
            config,
            state,
            cached_dimension: None,
            topology: HypercubeTopology::new(0),
            basis: ProjectionBasis::evenly_spread(0),
            rotation: Matrix::identity(0),
            scale: Matrix::identity(0),
            alpha_hint: 0.0,
            dirty: DirtyFlags::ALL,
        };
        engine.recompute_derived()?;
        engine.dirty = DirtyFlags::ALL;
        Ok(engine)
    }

    /// Step the animation forward by `delta_time` seconds
    ///
    /// The phase wraps modulo one period, so stepping by a whole number of
    /// periods lands back on the same frame.
    pub fn advance(&mut self, delta_time: f64) -> Result<(), EngineError> {
        if !(delta_time.is_finite() && delta_time >= 0.0) {
            return Err(EngineError::config(format!(
                "delta time must be a non-negative number of seconds, got {}",
                delta_time
            )));
        }

        let phase = (self.state.phase + delta_time / self.config.period) % 1.0;
        self.state = AnimationState::at_phase(phase, &self.config);
        log::trace!(
            "advance dt={:.4} phase={:.4} dimension={:.4}",
            delta_time, phase, self.state.fractional_dimension
        );
        self.recompute_derived()
    }

    /// Jump straight to a fractional dimension without moving the phase
    ///
    /// The next [`advance`](Self::advance) recomputes the dimension from the
    /// phase again.
    pub fn set_dimension(&mut self, fractional_dimension: f64) -> Result<(), EngineError> {
        let min = self.config.min_dimension as f64;
        let max = self.config.max_dimension as f64;
        if !(fractional_dimension >= min && fractional_dimension <= max) {
            return Err(EngineError::config(format!(
                "dimension {} outside configured range [{}, {}]",
                fractional_dimension, min, max
            )));
        }

        self.state = AnimationState::at_dimension(self.state.phase, fractional_dimension, &self.config);
        self.recompute_derived()
    }

    /// Return to the start of the cycle
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.state = AnimationState::at_phase(0.0, &self.config);
        self.recompute_derived()
    }

    /// Bring the cached geometry and matrices in line with the current state
    ///
    /// Topology and basis are only rebuilt when the integer dimension
    /// differs from the cached one; calling this twice is harmless.
    pub fn recompute_derived(&mut self) -> Result<(), EngineError> {
        let n = self.state.integer_dimension;
        let mut dirty = DirtyFlags::NONE;

        if self.cached_dimension != Some(n) {
            log::debug!(
                "Regenerating topology: {:?} -> {} ({} vertices)",
                self.cached_dimension, n, 1usize << n
            );
            self.topology = HypercubeTopology::new(n);
            self.basis = ProjectionBasis::evenly_spread(n);
            self.cached_dimension = Some(n);
            dirty |= DirtyFlags::TOPOLOGY;
        }

        let rotation = chained_rotation(n, self.state.rotation_angle(&self.config))?;
        if rotation != self.rotation {
            self.rotation = rotation;
            dirty |= DirtyFlags::ROTATION;
        }

        let scale = appear_scale(n, self.state.appear_amount);
        if scale != self.scale {
            self.scale = scale;
            dirty |= DirtyFlags::SCALE;
        }

        self.alpha_hint = self.state.alpha_hint(&self.config);
        self.dirty = dirty;
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.state.phase
    }

    #[inline]
    pub fn fractional_dimension(&self) -> f64 {
        self.state.fractional_dimension
    }

    #[inline]
    pub fn integer_dimension(&self) -> usize {
        self.state.integer_dimension
    }

    /// Angle shared by every elementary rotation this frame
    pub fn rotation_angle(&self) -> f64 {
        self.state.rotation_angle(&self.config)
    }

    /// What the last update changed
    #[inline]
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn topology(&self) -> &HypercubeTopology {
        &self.topology
    }

    /// Vertices of the current-dimension hypercube
    #[inline]
    pub fn vertices(&self) -> &[VectorN] {
        self.topology.vertices()
    }

    /// Lazily enumerate edges as `(i, j)` vertex index pairs
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.topology.edges()
    }

    /// Edges tagged with the axis they run along
    pub fn axis_edges(&self) -> impl Iterator<Item = AxisEdge> + '_ {
        self.topology.axis_edges()
    }

    #[inline]
    pub fn projection_basis(&self) -> &ProjectionBasis {
        &self.basis
    }

    #[inline]
    pub fn rotation_matrix(&self) -> &Matrix {
        &self.rotation
    }

    #[inline]
    pub fn scale_matrix(&self) -> &Matrix {
        &self.scale
    }

    #[inline]
    pub fn appear_amount(&self) -> f64 {
        self.state.appear_amount
    }

    #[inline]
    pub fn global_alpha_hint(&self) -> f64 {
        self.alpha_hint
    }

    /// Borrow a consistent view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            state: self.state,
            topology: &self.topology,
            basis: &self.basis,
            rotation: &self.rotation,
            scale: &self.scale,
            alpha_hint: self.alpha_hint,
        }
    }
}
