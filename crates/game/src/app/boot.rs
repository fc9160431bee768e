use engine::LabelId;
use tracing::info;

use super::context::AppContext;
use super::layout::loading_placements;
use super::scene::{Scene, SceneCommand, SceneKey};

/// Boot/loading scene. Asset decoding lives in the host; the host feeds
/// progress in [0, 1] and the scene advances to the menu once it reaches 1.
pub(crate) struct BootScene {
    progress_label: Option<LabelId>,
}

impl BootScene {
    pub(crate) fn new() -> Self {
        Self {
            progress_label: None,
        }
    }
}

impl Scene for BootScene {
    fn activate(&mut self, ctx: &mut AppContext) {
        let placements = loading_placements(ctx.viewport);
        self.progress_label = Some(ctx.labels.create(
            placements.label_center,
            "Loading 0%",
            placements.label_font_px,
        ));
        info!(scene = SceneKey::Boot.name(), "scene_activated");
    }

    fn tick(&mut self, _fixed_dt_seconds: f32, ctx: &mut AppContext) -> SceneCommand {
        let progress = ctx.input.load_progress();
        if let Some(label) = self.progress_label {
            ctx.labels
                .set_text(label, format!("Loading {:.0}%", progress * 100.0));
        }
        if progress >= 1.0 {
            return SceneCommand::SwitchTo(SceneKey::MainMenu);
        }
        SceneCommand::None
    }

    fn resize(&mut self, ctx: &mut AppContext) {
        let placements = loading_placements(ctx.viewport);
        if let Some(label) = self.progress_label {
            ctx.labels.set_position(label, placements.label_center);
            ctx.labels.set_font_px(label, placements.label_font_px);
        }
    }

    fn deactivate(&mut self, ctx: &mut AppContext) {
        if let Some(label) = self.progress_label.take() {
            ctx.labels.remove(label);
        }
    }
}
