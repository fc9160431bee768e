use thiserror::Error;
use tracing::{debug, warn};

/// Registration data for a named sprite-sheet animation. The engine does
/// not decode frames; hosts map frame indices onto their own atlases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDef {
    name: &'static str,
    frames: Vec<u32>,
    frame_rate: u32,
    repeat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationDefError {
    #[error("animation '{name}' has no frames")]
    EmptyFrames { name: &'static str },
    #[error("animation '{name}' has a zero frame rate")]
    ZeroFrameRate { name: &'static str },
}

impl AnimationDef {
    pub fn new(
        name: &'static str,
        frames: Vec<u32>,
        frame_rate: u32,
        repeat: bool,
    ) -> Result<Self, AnimationDefError> {
        if frames.is_empty() {
            return Err(AnimationDefError::EmptyFrames { name });
        }
        if frame_rate == 0 {
            return Err(AnimationDefError::ZeroFrameRate { name });
        }
        Ok(Self {
            name,
            frames,
            frame_rate,
            repeat,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn frames(&self) -> &[u32] {
        &self.frames
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn repeats(&self) -> bool {
        self.repeat
    }
}

/// Name-keyed animation store. Registration is idempotent: re-registering
/// an existing name is skipped, never duplicated and never an error.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    defs: Vec<AnimationDef>,
}

impl AnimationRegistry {
    pub fn register(&mut self, def: AnimationDef) -> bool {
        if self.contains(def.name) {
            debug!(name = def.name, "animation_registration_skipped");
            return false;
        }
        self.defs.push(def);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.iter().any(|def| def.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Playback slot for one sprite. Playing the already-current animation is
/// a no-op so a held key does not restart the walk cycle every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Animator {
    current: Option<&'static str>,
}

impl Animator {
    pub fn play(&mut self, name: &'static str, registry: &AnimationRegistry) -> bool {
        if !registry.contains(name) {
            warn!(name, "animation_play_unknown");
            return false;
        }
        if self.current == Some(name) {
            return false;
        }
        self.current = Some(name);
        true
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    pub fn stop(&mut self) {
        self.current = None;
    }
}
