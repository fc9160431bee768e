/// The Game scene's own lifecycle: one-way `Active -> Terminal`, re-entered
/// fresh only through scene recreation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GamePhase {
    Active,
    Terminal,
}

impl GamePhase {
    fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Terminal)
    }
}

/// Exactly one facing animation state is active per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Left,
    Right,
    Idle,
}

impl Facing {
    fn animation_name(self) -> &'static str {
        match self {
            Facing::Left => ANIM_LEFT,
            Facing::Right => ANIM_RIGHT,
            Facing::Idle => ANIM_TURN,
        }
    }
}

/// One collectible slot. The body's `active` flag is the collected state;
/// the design-space anchor is where the wave reset puts it back.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Collectible {
    body: BodyId,
    design_anchor: Vec2,
}
