use engine::{ActionStates, InputAction};
use tracing::debug;

/// Host joystick events arrive in [-100, 100] per axis and are normalized
/// to [-1, 1] on ingestion.
const JOYSTICK_INPUT_RANGE: f32 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct JoystickVector {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

/// Per-frame input surface: synchronously polled keyboard state plus the
/// host-pushed joystick vector and one-shot latches. Pushes are
/// latest-value overwrites; latches are cleared unconditionally at the end
/// of every simulated frame whether or not they were consumed.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    actions: ActionStates,
    joystick: JoystickVector,
    jump_requested: bool,
    advance_requested: bool,
    load_progress: f32,
}

impl InputState {
    pub(crate) fn set_action(&mut self, action: InputAction, is_down: bool) {
        self.actions.set(action, is_down);
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub(crate) fn push_move_vector(&mut self, x: f32, y: f32) {
        self.joystick = JoystickVector {
            x: normalize_axis(x),
            y: normalize_axis(y),
        };
        debug!(
            x = self.joystick.x,
            y = self.joystick.y,
            "joystick_vector_pushed"
        );
    }

    pub(crate) fn push_move_stop(&mut self) {
        self.joystick = JoystickVector::default();
    }

    pub(crate) fn push_jump(&mut self) {
        self.jump_requested = true;
    }

    pub(crate) fn request_advance(&mut self) {
        self.advance_requested = true;
    }

    pub(crate) fn push_load_progress(&mut self, progress: f32) {
        self.load_progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub(crate) fn joystick(&self) -> JoystickVector {
        self.joystick
    }

    pub(crate) fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    pub(crate) fn advance_requested(&self) -> bool {
        self.advance_requested
    }

    pub(crate) fn load_progress(&self) -> f32 {
        self.load_progress
    }

    pub(crate) fn end_frame(&mut self) {
        self.jump_requested = false;
        self.advance_requested = false;
    }

    /// Drops carried-over movement and latches on scene entry so a fresh
    /// playthrough never consumes stale input.
    pub(crate) fn clear_transient(&mut self) {
        self.joystick = JoystickVector::default();
        self.jump_requested = false;
        self.advance_requested = false;
    }
}

fn normalize_axis(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    (value / JOYSTICK_INPUT_RANGE).clamp(-1.0, 1.0)
}
