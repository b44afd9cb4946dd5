//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERSPIN_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperspin_core::EngineConfig;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dimension sweep and rotation settings
    #[serde(default)]
    pub animation: EngineConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HYPERSPIN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HYPERSPIN_ANIMATION__PERIOD=5 -> animation.period = 5
        figment = figment.merge(Env::prefixed("HYPERSPIN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed ticks per second for the headless driver
    pub tick_rate: f64,
    /// Number of animation cycles to run before exiting
    pub cycles: f64,
    /// Largest real-time delta fed to the engine in one tick, in seconds
    pub max_delta: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            cycles: 1.0,
            max_delta: 0.25,
        }
    }
}

impl SimulationConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::invalid(format!(
                "simulation.tick_rate must be a positive number of Hz, got {}",
                self.tick_rate
            )));
        }
        if !(self.cycles.is_finite() && self.cycles >= 0.0) {
            return Err(ConfigError::invalid(format!(
                "simulation.cycles must be a non-negative number, got {}",
                self.cycles
            )));
        }
        if !(self.max_delta.is_finite() && self.max_delta >= 0.0) {
            return Err(ConfigError::invalid(format!(
                "simulation.max_delta must be a non-negative number of seconds, got {}",
                self.max_delta
            )));
        }
        Ok(())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Surface units per model unit
    pub scale: f64,
    /// Line width in surface units
    pub line_width: f32,
    /// Draw axis labels at the tip of each projection direction
    pub show_labels: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            line_width: 1.0,
            show_labels: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
