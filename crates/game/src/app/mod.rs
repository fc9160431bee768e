mod boot;
mod bootstrap;
mod bridge;
mod config;
mod context;
mod gameplay;
mod input;
mod layout;
mod menu;
mod runtime;
mod scene;

pub use bootstrap::{build_app, build_app_from_json, init_tracing};
pub use bridge::SceneActivated;
pub use config::{DesignSpace, FeelConfig, GameConfig};
pub use layout::{
    derive_physics_constants, game_over_placements, layout, loading_placements, menu_placements,
    scale_factor, scale_position, uniform_scale, GameOverPlacements, LevelPlacements,
    LoadingPlacements, MenuPlacements, PhysicsConstants, PlatformPlacement, BASE_GRAVITY,
    BASE_JUMP_VELOCITY, BASE_MOVE_SPEED,
};
pub use runtime::GameApp;
pub use scene::SceneKey;
