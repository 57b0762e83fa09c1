pub mod r#trait;
pub use r#trait::WindowEngine;

pub mod scripted_window_engine;
pub use self::scripted_window_engine::ScriptedWindowEngine;

#[cfg(feature = "window")]
pub mod glfw_window_engine;
#[cfg(feature = "window")]
pub use self::glfw_window_engine::GlfwWindowEngine;
