use engine::{AnimationRegistry, TextSystem, ViewportSize};

use super::bridge::LifecycleBridge;
use super::config::{DesignSpace, FeelConfig, GameConfig};
use super::input::InputState;

/// Owned application context threaded through every scene hook. Created
/// at startup, torn down at shutdown; there is no global game handle.
pub(crate) struct AppContext {
    pub(crate) design: DesignSpace,
    pub(crate) feel: FeelConfig,
    pub(crate) viewport: ViewportSize,
    pub(crate) anims: AnimationRegistry,
    pub(crate) labels: TextSystem,
    pub(crate) input: InputState,
    pub(crate) bridge: LifecycleBridge,
}

impl AppContext {
    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self {
            design: config.design,
            feel: config.feel,
            viewport: config.initial_viewport,
            anims: AnimationRegistry::default(),
            labels: TextSystem::default(),
            input: InputState::default(),
            bridge: LifecycleBridge::default(),
        }
    }
}
