use engine::{
    AnimationDef, AnimationRegistry, Animator, BodyId, InputAction, LabelId, PhysicsWorld, Vec2,
    ViewportSize, WorldBounds,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::{debug, info, warn};

use super::context::AppContext;
use super::layout::{
    collectible_design_anchors, derive_physics_constants, layout, scale_position, uniform_scale,
    PhysicsConstants, COLLECTIBLE_COUNT,
};
use super::scene::{Scene, SceneCommand, SceneKey};

const SCORE_PER_COLLECTIBLE: u32 = 10;
const PLAYER_BOUNCE: f32 = 0.2;
const COLLECTIBLE_BOUNCE_MIN: f32 = 0.4;
const COLLECTIBLE_BOUNCE_MAX: f32 = 0.8;
const HAZARD_BOUNCE: f32 = 1.0;
const HAZARD_SPEED_RANGE: f32 = 200.0;
const HAZARD_DRIFT_SPEED: f32 = 20.0;
const HIT_TINT: u32 = 0xff0000;
const ANIM_LEFT: &str = "left";
const ANIM_TURN: &str = "turn";
const ANIM_RIGHT: &str = "right";

include!("types.rs");
include!("scene_state.rs");
include!("scene_impl.rs");
include!("util.rs");
