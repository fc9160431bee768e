use engine::{Vec2, ViewportSize};

use super::config::{DesignSpace, FeelConfig};

pub const BASE_MOVE_SPEED: f32 = 120.0;
pub const BASE_JUMP_VELOCITY: f32 = -350.0;
pub const BASE_GRAVITY: f32 = 150.0;

pub(crate) const COLLECTIBLE_COUNT: usize = 12;

const PLATFORM_SPRITE_SIZE: Vec2 = Vec2 { x: 400.0, y: 32.0 };
const PLAYER_BODY_SIZE: Vec2 = Vec2 { x: 32.0, y: 48.0 };
const COLLECTIBLE_BODY_SIZE: Vec2 = Vec2 { x: 24.0, y: 22.0 };
const HAZARD_BODY_SIZE: Vec2 = Vec2 { x: 14.0, y: 14.0 };

const PLAYER_SPAWN: Vec2 = Vec2 { x: 100.0, y: 450.0 };
const BACKGROUND_CENTER: Vec2 = Vec2 { x: 512.0, y: 384.0 };
const BACKGROUND_SPRITE_SCALE: f32 = 1.3;
const COLLECTIBLE_ROW_START_X: f32 = 50.0;
const COLLECTIBLE_ROW_STEP_X: f32 = 84.0;
const COLLECTIBLE_ROW_Y: f32 = 0.0;
const HAZARD_SPAWN_Y: f32 = 16.0;
const SCORE_LABEL_POSITION: Vec2 = Vec2 { x: 16.0, y: 16.0 };
const SCORE_LABEL_FONT_PX: f32 = 32.0;

/// Design-space platform centers and per-axis sprite scale factors.
const PLATFORM_DEFS: [(Vec2, Vec2); 4] = [
    (Vec2 { x: 512.0, y: 709.0 }, Vec2 { x: 2.6, y: 4.0 }),
    (Vec2 { x: 764.0, y: 460.0 }, Vec2 { x: 1.3, y: 1.25 }),
    (Vec2 { x: 50.0, y: 300.0 }, Vec2 { x: 1.25, y: 1.25 }),
    (Vec2 { x: 960.0, y: 230.0 }, Vec2 { x: 1.25, y: 1.25 }),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPlacement {
    pub position: Vec2,
    pub size: Vec2,
}

/// Absolute viewport-space placements for every level entity. Pure data:
/// callers reposition existing bodies/labels from it, never allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPlacements {
    pub background_center: Vec2,
    pub background_scale: f32,
    pub platforms: [PlatformPlacement; 4],
    pub player_spawn: Vec2,
    pub player_size: Vec2,
    pub collectible_row: [Vec2; COLLECTIBLE_COUNT],
    pub collectible_size: Vec2,
    pub hazard_size: Vec2,
    pub hazard_spawn_y: f32,
    pub score_label_position: Vec2,
    pub score_label_font_px: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicsConstants {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPlacements {
    pub logo_center: Vec2,
    pub logo_scale: f32,
    pub title_center: Vec2,
    pub title_font_px: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverPlacements {
    pub title_center: Vec2,
    pub title_font_px: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingPlacements {
    pub label_center: Vec2,
    pub label_font_px: f32,
}

pub fn scale_position(design: DesignSpace, viewport: ViewportSize, position: Vec2) -> Vec2 {
    Vec2 {
        x: position.x / design.width * viewport.width,
        y: position.y / design.height * viewport.height,
    }
}

/// Maps a design-space sprite scale pair onto the current viewport.
pub fn scale_factor(design: DesignSpace, viewport: ViewportSize, scale: Vec2) -> Vec2 {
    Vec2 {
        x: scale.x * viewport.width / design.width,
        y: scale.y * viewport.height / design.height,
    }
}

/// Uniform entity scale: the smaller of the two axis ratios, so sprites
/// never overflow the shorter viewport axis.
pub fn uniform_scale(design: DesignSpace, viewport: ViewportSize) -> f32 {
    (viewport.width / design.width).min(viewport.height / design.height)
}

pub(crate) fn collectible_design_anchors() -> [Vec2; COLLECTIBLE_COUNT] {
    let mut anchors = [Vec2::default(); COLLECTIBLE_COUNT];
    for (index, anchor) in anchors.iter_mut().enumerate() {
        *anchor = Vec2 {
            x: COLLECTIBLE_ROW_START_X + COLLECTIBLE_ROW_STEP_X * index as f32,
            y: COLLECTIBLE_ROW_Y,
        };
    }
    anchors
}

/// Pure layout for the game level. Calling it twice with the same viewport
/// yields bit-identical placements.
pub fn layout(design: DesignSpace, viewport: ViewportSize) -> LevelPlacements {
    let s = uniform_scale(design, viewport);

    let mut platforms = [PlatformPlacement {
        position: Vec2::default(),
        size: Vec2::default(),
    }; 4];
    for (slot, (position, scale)) in platforms.iter_mut().zip(PLATFORM_DEFS) {
        let mapped_scale = scale_factor(design, viewport, scale);
        *slot = PlatformPlacement {
            position: scale_position(design, viewport, position),
            size: Vec2 {
                x: PLATFORM_SPRITE_SIZE.x * mapped_scale.x,
                y: PLATFORM_SPRITE_SIZE.y * mapped_scale.y,
            },
        };
    }

    let mut collectible_row = [Vec2::default(); COLLECTIBLE_COUNT];
    for (slot, anchor) in collectible_row.iter_mut().zip(collectible_design_anchors()) {
        *slot = scale_position(design, viewport, anchor);
    }

    LevelPlacements {
        background_center: scale_position(design, viewport, BACKGROUND_CENTER),
        background_scale: BACKGROUND_SPRITE_SCALE * s,
        platforms,
        player_spawn: scale_position(design, viewport, PLAYER_SPAWN),
        player_size: Vec2 {
            x: PLAYER_BODY_SIZE.x * s,
            y: PLAYER_BODY_SIZE.y * s,
        },
        collectible_row,
        collectible_size: Vec2 {
            x: COLLECTIBLE_BODY_SIZE.x * s,
            y: COLLECTIBLE_BODY_SIZE.y * s,
        },
        hazard_size: Vec2 {
            x: HAZARD_BODY_SIZE.x * s,
            y: HAZARD_BODY_SIZE.y * s,
        },
        hazard_spawn_y: HAZARD_SPAWN_Y / design.height * viewport.height,
        score_label_position: scale_position(design, viewport, SCORE_LABEL_POSITION),
        score_label_font_px: SCORE_LABEL_FONT_PX * s,
    }
}

/// Derived per-viewport physics constants. The deviation average against
/// the small reference is an empirically tuned affine transform; see
/// `FeelConfig`.
pub fn derive_physics_constants(feel: FeelConfig, viewport: ViewportSize) -> PhysicsConstants {
    let deviation_x = (viewport.width - feel.reference_w) / feel.reference_w;
    let deviation_y = (viewport.height - feel.reference_h) / feel.reference_h;
    let mean_deviation = 0.5 * (deviation_x + deviation_y);
    let feel_scale = feel.base_scale * (1.0 + mean_deviation * feel.feel_factor);
    PhysicsConstants {
        move_speed: BASE_MOVE_SPEED * feel_scale,
        jump_velocity: BASE_JUMP_VELOCITY * feel_scale,
        gravity: BASE_GRAVITY * feel_scale,
    }
}

pub fn menu_placements(viewport: ViewportSize) -> MenuPlacements {
    MenuPlacements {
        logo_center: Vec2 {
            x: viewport.width * 0.5,
            y: viewport.height * 0.3,
        },
        logo_scale: viewport.height / 768.0,
        title_center: Vec2 {
            x: viewport.width * 0.5,
            y: viewport.height * 0.55,
        },
        title_font_px: (viewport.height * 0.06).round(),
    }
}

pub fn game_over_placements(viewport: ViewportSize) -> GameOverPlacements {
    GameOverPlacements {
        title_center: Vec2 {
            x: viewport.width * 0.5,
            y: viewport.height * 0.5,
        },
        title_font_px: (viewport.height * 0.1).round(),
    }
}

pub fn loading_placements(viewport: ViewportSize) -> LoadingPlacements {
    LoadingPlacements {
        label_center: Vec2 {
            x: viewport.width * 0.5,
            y: viewport.height * 0.5,
        },
        label_font_px: (viewport.height * 0.04).round(),
    }
}
