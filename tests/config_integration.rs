//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperspin::config::AppConfig;
use hyperspin_core::DimensionalTransformEngine;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HYPERSPIN_ANIMATION__PERIOD", "5.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.period, 5.5);
    std::env::remove_var("HYPERSPIN_ANIMATION__PERIOD");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HYPERSPIN_ANIMATION__PERIOD");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml (a user.toml may override others)
    assert!(config.animation.validate().is_ok());
    assert!(config.simulation.tick_rate > 0.0);
}

#[test]
#[serial]
fn test_loaded_config_builds_engine() {
    std::env::set_var("HYPERSPIN_ANIMATION__MAX_DIMENSION", "4");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HYPERSPIN_ANIMATION__MAX_DIMENSION");

    assert_eq!(config.animation.max_dimension, 4);
    let engine = DimensionalTransformEngine::new(config.animation).unwrap();
    assert_eq!(engine.config().max_dimension, 4);
}

#[test]
#[serial]
fn test_invalid_env_value_is_error() {
    std::env::set_var("HYPERSPIN_ANIMATION__PIVOT", "not-a-number");
    let result = AppConfig::load();
    std::env::remove_var("HYPERSPIN_ANIMATION__PIVOT");

    let err = result.unwrap_err();
    assert!(format!("{}", err).contains("Configuration error"));
}
