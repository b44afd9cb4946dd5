//! Animation simulation system
//!
//! Feeds elapsed time into the engine, either measured from the wall clock
//! or as a fixed step for headless runs.

use std::time::Instant;
use hyperspin_core::{DimensionalTransformEngine, DirtyFlags, EngineError};
use crate::config::SimulationConfig;

/// Result of a simulation update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    /// Seconds fed to the engine this tick
    pub dt: f64,
    /// Integer dimension after the tick
    pub dimension: usize,
    /// Whether the vertex set was regenerated
    pub topology_changed: bool,
}

/// Manages the animation clock
pub struct SimulationSystem {
    last_frame: Instant,
    max_delta: f64,
    fixed_step: f64,
    elapsed: f64,
}

impl SimulationSystem {
    /// Create a simulation system
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta: config.max_delta,
            fixed_step: 1.0 / config.tick_rate,
            elapsed: 0.0,
        }
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(&mut self, engine: &mut DimensionalTransformEngine) -> Result<SimulationResult, EngineError> {
        let now = Instant::now();
        // Cap dt so a stalled frame doesn't skip most of a cycle
        let dt = (now - self.last_frame).as_secs_f64().min(self.max_delta);
        self.last_frame = now;
        self.step(engine, dt)
    }

    /// Run one frame with the configured fixed time step
    pub fn tick(&mut self, engine: &mut DimensionalTransformEngine) -> Result<SimulationResult, EngineError> {
        self.step(engine, self.fixed_step)
    }

    /// Advance the engine by `dt` seconds
    pub fn step(&mut self, engine: &mut DimensionalTransformEngine, dt: f64) -> Result<SimulationResult, EngineError> {
        engine.advance(dt)?;
        self.elapsed += dt;
        Ok(SimulationResult {
            dt,
            dimension: engine.integer_dimension(),
            topology_changed: engine.dirty().contains(DirtyFlags::TOPOLOGY),
        })
    }

    /// Total seconds fed to the engine so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperspin_core::EngineConfig;

    fn engine() -> DimensionalTransformEngine {
        let config = EngineConfig::default().with_dimensions(1, 4).with_period(1.0);
        DimensionalTransformEngine::new(config).unwrap()
    }

    #[test]
    fn test_fixed_tick() {
        let config = SimulationConfig { tick_rate: 4.0, ..SimulationConfig::default() };
        let mut sim = SimulationSystem::new(&config);
        let mut e = engine();

        let result = sim.tick(&mut e).unwrap();
        assert_eq!(result.dt, 0.25);
        assert_eq!(e.phase(), 0.25);
        assert_eq!(sim.elapsed(), 0.25);
    }

    #[test]
    fn test_update_caps_delta() {
        let config = SimulationConfig { max_delta: 0.0, ..SimulationConfig::default() };
        let mut sim = SimulationSystem::new(&config);
        let mut e = engine();

        let result = sim.update(&mut e).unwrap();
        assert_eq!(result.dt, 0.0);
        assert_eq!(e.phase(), 0.0);
    }

    #[test]
    fn test_reports_topology_change() {
        let mut sim = SimulationSystem::new(&SimulationConfig::default());
        let mut e = engine();

        // Half a cycle moves well past dimension 1
        let result = sim.step(&mut e, 0.5).unwrap();
        assert!(result.dimension > 1);
        assert!(result.topology_changed);

        let result = sim.step(&mut e, 0.0).unwrap();
        assert!(!result.topology_changed);
    }
}
