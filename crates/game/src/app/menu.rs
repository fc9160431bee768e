use engine::LabelId;
use tracing::info;

use super::context::AppContext;
use super::layout::{game_over_placements, menu_placements};
use super::scene::{Scene, SceneCommand, SceneKey};

pub(crate) struct MainMenuScene {
    title: Option<LabelId>,
}

impl MainMenuScene {
    pub(crate) fn new() -> Self {
        Self { title: None }
    }
}

impl Scene for MainMenuScene {
    fn activate(&mut self, ctx: &mut AppContext) {
        let placements = menu_placements(ctx.viewport);
        self.title = Some(ctx.labels.create(
            placements.title_center,
            "Main Menu",
            placements.title_font_px,
        ));
        info!(scene = SceneKey::MainMenu.name(), "scene_activated");
    }

    fn tick(&mut self, _fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand {
        if ctx.input.advance_requested() {
            return SceneCommand::SwitchTo(SceneKey::Game);
        }
        SceneCommand::None
    }

    fn resize(&mut self, ctx: &mut AppContext) {
        let placements = menu_placements(ctx.viewport);
        if let Some(title) = self.title {
            ctx.labels.set_position(title, placements.title_center);
            ctx.labels.set_font_px(title, placements.title_font_px);
        }
    }

    fn deactivate(&mut self, ctx: &mut AppContext) {
        if let Some(title) = self.title.take() {
            ctx.labels.remove(title);
        }
    }
}

pub(crate) struct GameOverScene {
    title: Option<LabelId>,
}

impl GameOverScene {
    pub(crate) fn new() -> Self {
        Self { title: None }
    }
}

impl Scene for GameOverScene {
    fn activate(&mut self, ctx: &mut AppContext) {
        let placements = game_over_placements(ctx.viewport);
        self.title = Some(ctx.labels.create(
            placements.title_center,
            "Game Over",
            placements.title_font_px,
        ));
        info!(scene = SceneKey::GameOver.name(), "scene_activated");
    }

    fn tick(&mut self, _fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand {
        if ctx.input.advance_requested() {
            return SceneCommand::SwitchTo(SceneKey::MainMenu);
        }
        SceneCommand::None
    }

    fn resize(&mut self, ctx: &mut AppContext) {
        let placements = game_over_placements(ctx.viewport);
        if let Some(title) = self.title {
            ctx.labels.set_position(title, placements.title_center);
            ctx.labels.set_font_px(title, placements.title_font_px);
        }
    }

    fn deactivate(&mut self, ctx: &mut AppContext) {
        if let Some(title) = self.title.take() {
            ctx.labels.remove(title);
        }
    }
}
