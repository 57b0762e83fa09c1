pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod config;
pub use self::config::RendererConfig;

pub mod telemetry_renderer;
pub use self::telemetry_renderer::{FrameSummary, TelemetryRenderer};

#[cfg(feature = "window")]
pub mod renderer_graphics;
#[cfg(feature = "window")]
pub use self::renderer_graphics::RendererGraphics;

#[cfg(feature = "window")]
pub mod shader;
#[cfg(feature = "window")]
pub mod tools;
#[cfg(feature = "window")]
pub use self::tools::show_opengl_context_info;
#[cfg(feature = "window")]
pub mod types;
#[cfg(feature = "window")]
pub use self::types::PointGPU;
