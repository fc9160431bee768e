mod anim;
mod input;
mod physics;
mod text;
mod viewport;

pub use anim::{AnimationDef, AnimationDefError, AnimationRegistry, Animator};
pub use input::{ActionStates, InputAction};
pub use physics::{
    Body, BodyId, BodyKind, Contact, PhysicsWorld, Touching, Vec2, WorldBounds, WorldBoundsError,
};
pub use text::{Label, LabelId, TextSystem};
pub use viewport::{ResizeSlot, ViewportSize};
