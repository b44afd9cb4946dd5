//! Per-tick animation values
//!
//! Everything here is a pure function of the cycle phase and the config;
//! the engine recomputes it once per tick.

use std::f64::consts::TAU;
use serde::{Serialize, Deserialize};
use hyperspin_math::easing::{divide_interval, ease_in_out, ping_pong, slurp};
use crate::EngineConfig;

/// Snapshot of the animation's scalar state
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Position within the current cycle, in [0, 1)
    pub phase: f64,
    /// Eased, ping-ponged time in [0, 1]
    pub adjusted_time: f64,
    /// Current dimension, in [min_dimension, max_dimension]
    pub fractional_dimension: f64,
    /// `floor(fractional_dimension)`
    pub integer_dimension: usize,
    /// Fractional part of the dimension, in [0, 1)
    pub appear_amount: f64,
}

impl AnimationState {
    /// Derive the state for a point in the cycle
    pub fn at_phase(phase: f64, config: &EngineConfig) -> Self {
        let adjusted_time = ease_in_out(ping_pong(phase, config.pivot), config.ease_power);
        let fractional_dimension = slurp(
            config.min_dimension as f64,
            config.max_dimension as f64,
            adjusted_time,
        );
        Self::with_dimension(phase, adjusted_time, fractional_dimension, config)
    }

    /// Derive the state for an explicitly chosen dimension, keeping `phase`
    pub fn at_dimension(phase: f64, fractional_dimension: f64, config: &EngineConfig) -> Self {
        let adjusted_time = divide_interval(
            fractional_dimension,
            config.min_dimension as f64,
            config.max_dimension as f64,
        );
        Self::with_dimension(phase, adjusted_time, fractional_dimension, config)
    }

    fn with_dimension(
        phase: f64,
        adjusted_time: f64,
        fractional_dimension: f64,
        config: &EngineConfig,
    ) -> Self {
        let floor = fractional_dimension.floor();
        // Clamp guards against slurp overshooting max by an ulp
        let integer_dimension = (floor.max(0.0) as usize).min(config.max_dimension);
        Self {
            phase,
            adjusted_time,
            fractional_dimension,
            integer_dimension,
            appear_amount: fractional_dimension - floor,
        }
    }

    /// Shared angle for every elementary plane rotation this tick
    pub fn rotation_angle(&self, config: &EngineConfig) -> f64 {
        TAU * config.rotations_per_cycle as f64 * self.phase
    }

    /// Alpha for edges along the newest axis, fading in as it appears
    pub fn alpha_hint(&self, config: &EngineConfig) -> f64 {
        slurp(config.min_alpha, 1.0, ease_in_out(self.appear_amount, config.ease_power))
    }
}
