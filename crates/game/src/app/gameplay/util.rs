/// Tie-break order for the facing state: joystick, keyboard-left,
/// keyboard-right, idle.
fn resolve_facing(joystick_x: f32, left_down: bool, right_down: bool) -> Facing {
    if joystick_x < 0.0 {
        Facing::Left
    } else if joystick_x > 0.0 {
        Facing::Right
    } else if left_down {
        Facing::Left
    } else if right_down {
        Facing::Right
    } else {
        Facing::Idle
    }
}

/// Horizontal span on the half of the playfield opposite the player.
fn hazard_spawn_span(player_x: f32, playfield_width: f32) -> (f32, f32) {
    let midpoint = playfield_width * 0.5;
    if player_x < midpoint {
        (midpoint, playfield_width)
    } else {
        (0.0, midpoint)
    }
}

fn rescale_ratio(from: ViewportSize, to: ViewportSize) -> Vec2 {
    Vec2 {
        x: to.width / from.width,
        y: to.height / from.height,
    }
}
