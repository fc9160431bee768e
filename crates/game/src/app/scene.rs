use serde::Serialize;
use tracing::info;

use super::boot::BootScene;
use super::context::AppContext;
use super::gameplay::GameScene;
use super::menu::{GameOverScene, MainMenuScene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SceneKey {
    Boot,
    MainMenu,
    Game,
    GameOver,
}

impl SceneKey {
    pub fn name(self) -> &'static str {
        match self {
            SceneKey::Boot => "Boot",
            SceneKey::MainMenu => "MainMenu",
            SceneKey::Game => "Game",
            SceneKey::GameOver => "GameOver",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SceneKey::GameOver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SceneCommand {
    None,
    SwitchTo(SceneKey),
}

/// Isolated unit of game state. `activate` builds the scene's entity set
/// from scratch and `deactivate` releases it, so a scene instance never
/// leaks entities into its successor.
pub(crate) trait Scene {
    fn activate(&mut self, ctx: &mut AppContext);
    fn tick(&mut self, fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand;
    fn resize(&mut self, ctx: &mut AppContext);
    fn deactivate(&mut self, ctx: &mut AppContext);
}

/// Keyed scene set with exactly one active scene. Switching deactivates
/// the outgoing scene before activating the target, which guarantees a
/// fresh Game entity set on every entry and at most one live Game
/// instance.
pub(crate) struct SceneMachine {
    boot: BootScene,
    main_menu: MainMenuScene,
    game: GameScene,
    game_over: GameOverScene,
    active: SceneKey,
}

impl SceneMachine {
    pub(crate) fn new(
        boot: BootScene,
        main_menu: MainMenuScene,
        game: GameScene,
        game_over: GameOverScene,
    ) -> Self {
        Self {
            boot,
            main_menu,
            game,
            game_over,
            active: SceneKey::Boot,
        }
    }

    pub(crate) fn active(&self) -> SceneKey {
        self.active
    }

    pub(crate) fn activate_initial(&mut self, ctx: &mut AppContext) {
        let key = self.active;
        self.scene_mut(key).activate(ctx);
    }

    /// Idempotent: requesting the already-active scene is a no-op.
    pub(crate) fn switch_to(&mut self, target: SceneKey, ctx: &mut AppContext) -> bool {
        if self.active == target {
            return false;
        }
        let from = self.active;
        self.scene_mut(from).deactivate(ctx);
        self.active = target;
        self.scene_mut(target).activate(ctx);
        info!(from = from.name(), to = target.name(), "scene_switched");
        true
    }

    pub(crate) fn tick_active(&mut self, fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand {
        let key = self.active;
        self.scene_mut(key).tick(fixed_dt_seconds, ctx)
    }

    pub(crate) fn resize_active(&mut self, ctx: &mut AppContext) {
        let key = self.active;
        self.scene_mut(key).resize(ctx);
    }

    fn scene_mut(&mut self, key: SceneKey) -> &mut dyn Scene {
        match key {
            SceneKey::Boot => &mut self.boot,
            SceneKey::MainMenu => &mut self.main_menu,
            SceneKey::Game => &mut self.game,
            SceneKey::GameOver => &mut self.game_over,
        }
    }

    #[cfg(test)]
    pub(crate) fn game_mut(&mut self) -> &mut GameScene {
        &mut self.game
    }
}
