pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineView};

pub mod types;
pub use self::types::{Color, FlightEvent, UpdateResult, Vec2};

pub mod config;
pub use self::config::{FallProfile, ParachuteProfile, PhysicConfig, SeparationRule, StageProfile};

pub mod random;
pub use self::random::{ConstantRandom, RandomSource};

pub mod particle;
pub use self::particle::{ExplosionParticle, SmokeParticle};

pub mod smoke_system;
pub use self::smoke_system::SmokeSystem;

pub mod explosion_system;
pub use self::explosion_system::ExplosionSystem;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod stage;
pub use self::stage::{RocketStage, SeparationReason, StageStatus};

pub mod mission;
pub use self::mission::{CountdownTick, Mission, MissionState};

pub mod environment;
pub use self::environment::{Environment, Wind};

pub mod trajectory;
pub use self::trajectory::{predict_trajectory, TrajectoryHistory};

pub mod scene;
pub use self::scene::{DisplayOptions, Scene};

pub mod physic_engine_launch;
pub use self::physic_engine_launch::PhysicEngineLaunch;
#[cfg(any(test, feature = "test_helpers"))]
pub use self::physic_engine_launch::PhysicEngineTestHelpers;
