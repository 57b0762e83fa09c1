pub mod camera;
pub use self::camera::{Camera, CameraEvent, CameraMode, CameraSubject, PendingRevert};

pub mod config;
pub use self::config::CameraConfig;
