//! Engine configuration

use serde::{Serialize, Deserialize};
use hyperspin_math::hypercube::MAX_DIMENSION;
use crate::EngineError;

/// Settings for the dimension animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of one full animation cycle, in seconds
    pub period: f64,
    /// Lowest dimension reached (at the start and end of each cycle)
    pub min_dimension: usize,
    /// Highest dimension reached (at the pivot)
    pub max_dimension: usize,
    /// Point in the cycle, in (0, 1], where the dimension stops rising and starts falling
    pub pivot: f64,
    /// Exponent of the ease-in/ease-out curve applied to the dimension sweep
    pub ease_power: f64,
    /// Full turns of the rotation per cycle
    pub rotations_per_cycle: u32,
    /// Alpha for the newest axis when it has only just appeared
    pub min_alpha: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            period: 3.0,
            min_dimension: 1,
            max_dimension: 11,
            pivot: 0.85,
            ease_power: 3.0,
            rotations_per_cycle: 1,
            min_alpha: 0.0,
        }
    }
}

impl EngineConfig {
    /// Set the dimension range (builder style)
    pub fn with_dimensions(mut self, min: usize, max: usize) -> Self {
        self.min_dimension = min;
        self.max_dimension = max;
        self
    }

    /// Set the cycle period in seconds
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    /// Set the ping-pong pivot
    pub fn with_pivot(mut self, pivot: f64) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the easing exponent
    pub fn with_ease_power(mut self, power: f64) -> Self {
        self.ease_power = power;
        self
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(EngineError::config(format!(
                "period must be a positive number of seconds, got {}",
                self.period
            )));
        }
        if self.min_dimension > self.max_dimension {
            return Err(EngineError::config(format!(
                "min_dimension {} is above max_dimension {}",
                self.min_dimension, self.max_dimension
            )));
        }
        if self.max_dimension > MAX_DIMENSION {
            return Err(EngineError::config(format!(
                "max_dimension {} exceeds the supported maximum of {}",
                self.max_dimension, MAX_DIMENSION
            )));
        }
        if !(self.pivot > 0.0 && self.pivot <= 1.0) {
            return Err(EngineError::config(format!(
                "pivot must lie in (0, 1], got {}",
                self.pivot
            )));
        }
        if !(self.ease_power.is_finite() && self.ease_power > 0.0) {
            return Err(EngineError::config(format!(
                "ease_power must be positive, got {}",
                self.ease_power
            )));
        }
        if !(0.0..=1.0).contains(&self.min_alpha) {
            return Err(EngineError::config(format!(
                "min_alpha must lie in [0, 1], got {}",
                self.min_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.period, 3.0);
        assert_eq!(config.max_dimension, 11);
        assert_eq!(config.pivot, 0.85);
    }

    #[test]
    fn test_rejects_non_positive_period() {
        for &period in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig::default().with_period(period);
            assert!(
                matches!(config.validate(), Err(EngineError::Configuration(_))),
                "period {} accepted", period
            );
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = EngineConfig::default().with_dimensions(5, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_dimension_above_cap() {
        let config = EngineConfig::default().with_dimensions(1, MAX_DIMENSION + 1);
        assert!(config.validate().is_err());
        let config = EngineConfig::default().with_dimensions(1, MAX_DIMENSION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pivot_bounds() {
        assert!(EngineConfig::default().with_pivot(0.0).validate().is_err());
        assert!(EngineConfig::default().with_pivot(1.2).validate().is_err());
        assert!(EngineConfig::default().with_pivot(1.0).validate().is_ok());
    }

    #[test]
    fn test_ease_power_and_alpha_bounds() {
        assert!(EngineConfig::default().with_ease_power(0.0).validate().is_err());
        let config = EngineConfig { min_alpha: 1.5, ..EngineConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_dimension_range_allowed() {
        let config = EngineConfig::default().with_dimensions(0, 0);
        assert!(config.validate().is_ok());
    }
}
