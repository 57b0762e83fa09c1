// Ici on importe depuis la crate lib complète
use anyhow::{Context, Result};
use log::{info, warn};
use std::env;

use rocket_launch_sim::input_engine::parse_script;
use rocket_launch_sim::physic_engine::{PhysicConfig, PhysicEngineLaunch};
use rocket_launch_sim::renderer_engine::RendererConfig;
use rocket_launch_sim::utils::show_rust_core_dependencies;
use rocket_launch_sim::Simulator;

const DEFAULT_PHYSIC_CONFIG: &str = "assets/config/physic.toml";
const DEFAULT_RENDERER_CONFIG: &str = "assets/config/renderer.toml";
/// Vol de démonstration headless : décollage, vol complet, puis sortie
const DEFAULT_SCRIPT: &str = "space wait:400 c wait:10 t wait:1800 i esc";

fn load_physic_config() -> PhysicConfig {
    let path = env::var("ROCKET_SIM_CONFIG").unwrap_or_else(|_| DEFAULT_PHYSIC_CONFIG.into());
    match PhysicConfig::from_file(&path) {
        Ok(config) => {
            info!("Physic config loaded from {path}");
            config
        }
        Err(e) => {
            warn!("⚠️ Physic config {path} unavailable ({e:#}), using defaults");
            PhysicConfig::default()
        }
    }
}

fn build_engine(config: &PhysicConfig) -> Result<PhysicEngineLaunch> {
    Ok(match env::var("ROCKET_SIM_SEED") {
        Ok(seed) => {
            let seed = seed
                .parse::<u64>()
                .with_context(|| format!("ROCKET_SIM_SEED must be an integer, got {seed:?}"))?;
            info!("🎲 Deterministic run, seed {seed}");
            PhysicEngineLaunch::with_seed(config, seed)
        }
        Err(_) => PhysicEngineLaunch::new(config),
    })
}

/// Main entry point for the Rocket Launch Simulator application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Rocket Launch Simulator...");

    show_rust_core_dependencies();

    let physic_config = load_physic_config();
    let renderer_config = RendererConfig::from_file(DEFAULT_RENDERER_CONFIG).unwrap_or_default();
    let physic_engine = build_engine(&physic_config)?;

    // Priorité à l'argument CLI : un script de touches => exécution headless
    let script = env::args().nth(1);

    #[cfg(feature = "window")]
    {
        if script.is_none() {
            return run_windowed(physic_engine, &renderer_config);
        }
    }

    run_headless(
        script.as_deref().unwrap_or(DEFAULT_SCRIPT),
        physic_engine,
        &renderer_config,
    )
}

#[cfg(feature = "window")]
fn run_windowed(physic_engine: PhysicEngineLaunch, renderer_config: &RendererConfig) -> Result<()> {
    use rocket_launch_sim::renderer_engine::RendererGraphics;
    use rocket_launch_sim::window_engine::GlfwWindowEngine;
    use rocket_launch_sim::PhysicEngine;

    let config = physic_engine.get_config();
    let (width, height) = (config.screen_width as i32, config.screen_height as i32);

    // 1. Init Window & Context, 2. Renderer (le contexte GL doit exister)
    let window_engine = GlfwWindowEngine::init(width, height, "Rocket Launch Simulator")?;
    let renderer_engine = RendererGraphics::new(width, height, renderer_config)?;

    let mut simulator = Simulator::new(renderer_engine, physic_engine, window_engine);
    let result = simulator.run();
    simulator.close();
    result
}

fn run_headless(
    script: &str,
    physic_engine: PhysicEngineLaunch,
    renderer_config: &RendererConfig,
) -> Result<()> {
    use rocket_launch_sim::renderer_engine::TelemetryRenderer;
    use rocket_launch_sim::window_engine::ScriptedWindowEngine;
    use rocket_launch_sim::PhysicEngine;
    use std::time::Duration;

    let steps = parse_script(script).context("invalid key script")?;
    info!("📜 Headless run: {} script steps", steps.len());

    let tick = Duration::from_millis(physic_engine.get_config().tick_ms);
    let window_engine = ScriptedWindowEngine::new(steps, tick);
    let renderer_engine = TelemetryRenderer::new(renderer_config);

    let mut simulator = Simulator::new(renderer_engine, physic_engine, window_engine);
    let result = simulator.run();
    simulator.close();
    result
}
