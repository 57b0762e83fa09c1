pub mod simulator;
pub use simulator::Simulator;
// Physic engine
pub mod physic_engine;
pub use physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineLaunch};
// Camera
pub mod camera_engine;
// Input (touches, commandes, scripts)
pub mod input_engine;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Window engine
pub mod window_engine;
pub use window_engine::WindowEngine;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
