//! Minimal 2D arcade substrate consumed by the game core: AABB physics
//! bodies, named animation registration, text labels and viewport plumbing.
//! Deliberately not a general engine; it covers exactly the capabilities
//! one small platformer level needs.

pub mod app;

pub use app::{
    ActionStates, AnimationDef, AnimationDefError, AnimationRegistry, Animator, Body, BodyId,
    BodyKind, Contact, InputAction, Label, LabelId, PhysicsWorld, ResizeSlot, TextSystem, Touching,
    Vec2, ViewportSize, WorldBounds, WorldBoundsError,
};
