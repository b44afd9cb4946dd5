//! hyperspin - rotating n-cube with a smoothly sweeping dimension
//!
//! Headless driver: runs the animation at a fixed tick rate for the
//! configured number of cycles and logs each dimension plateau.

use std::error::Error;

use hyperspin::config::AppConfig;
use hyperspin::systems::{RenderSystem, SimulationSystem};
use hyperspin_core::DimensionalTransformEngine;
use hyperspin_render::RecordingSurface;

fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting hyperspin");

    config.simulation.validate()?;
    let mut engine = DimensionalTransformEngine::new(config.animation.clone())?;
    let mut simulation = SimulationSystem::new(&config.simulation);
    let mut render = RenderSystem::new(&config.rendering);
    let mut surface = RecordingSurface::new();

    let ticks = (config.simulation.cycles * config.animation.period / simulation.fixed_step()).ceil() as u64;
    log::info!(
        "Sweeping dimensions {}..={} over {:.2}s cycles, {} ticks at {} Hz",
        config.animation.min_dimension,
        config.animation.max_dimension,
        config.animation.period,
        ticks,
        config.simulation.tick_rate,
    );

    let mut plateau_start = 0.0;
    let mut stats = render.render(&engine, &mut surface)?;
    for _ in 0..ticks {
        let result = simulation.tick(&mut engine)?;
        if result.topology_changed {
            log::info!(
                "t={:.3}s: left dimension {} after {:.3}s ({} vertices, {} edges)",
                simulation.elapsed(),
                stats.dimension,
                simulation.elapsed() - plateau_start,
                stats.vertices,
                stats.edges,
            );
            plateau_start = simulation.elapsed();
        }
        stats = render.render(&engine, &mut surface)?;
    }

    log::info!(
        "Finished: {} frames, {} draw commands in the last frame, final dimension {:.3}",
        render.frame_count(),
        surface.commands().len(),
        engine.fractional_dimension(),
    );
    Ok(())
}
