use std::sync::mpsc::Receiver;

use engine::{InputAction, ResizeSlot, ViewportSize};
use tracing::{debug, info, warn};

use super::boot::BootScene;
use super::bridge::SceneActivated;
use super::config::GameConfig;
use super::context::AppContext;
use super::gameplay::GameScene;
use super::menu::{GameOverScene, MainMenuScene};
use super::scene::{SceneCommand, SceneKey, SceneMachine};

/// Host-facing runtime. The embedding shell owns the render/display loop
/// and calls `frame()` once per refresh; everything else arrives through
/// the push methods between frames.
pub struct GameApp {
    fixed_dt_seconds: f32,
    metrics_log_interval_frames: u32,
    ctx: AppContext,
    machine: SceneMachine,
    resize_slot: ResizeSlot,
    metrics: FrameMetrics,
    started: bool,
}

impl GameApp {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        config.validate()?;
        let ctx = AppContext::from_config(&config);
        let machine = SceneMachine::new(
            BootScene::new(),
            MainMenuScene::new(),
            GameScene::new(config.hazard_seed),
            GameOverScene::new(),
        );
        Ok(Self {
            fixed_dt_seconds: 1.0 / config.target_tps as f32,
            metrics_log_interval_frames: config.metrics_log_interval_frames,
            ctx,
            machine,
            resize_slot: ResizeSlot::default(),
            metrics: FrameMetrics::default(),
            started: false,
        })
    }

    /// Runs one fixed simulation frame: drain the pending resize, tick the
    /// active scene, execute its transition request, clear one-shot input.
    pub fn frame(&mut self) {
        if !self.started {
            self.started = true;
            self.machine.activate_initial(&mut self.ctx);
            self.publish_activation(None);
        }

        if let Some(viewport) = self.resize_slot.take() {
            if viewport.is_valid() {
                self.ctx.viewport = viewport;
                self.machine.resize_active(&mut self.ctx);
                debug!(
                    width = viewport.width,
                    height = viewport.height,
                    "viewport_resized"
                );
            } else {
                warn!(
                    width = viewport.width,
                    height = viewport.height,
                    "viewport_resize_ignored"
                );
            }
        }

        let command = self.machine.tick_active(self.fixed_dt_seconds, &mut self.ctx);
        if let SceneCommand::SwitchTo(target) = command {
            let prior = self.machine.active();
            if self.machine.switch_to(target, &mut self.ctx) {
                self.publish_activation(Some(prior));
                self.metrics.record_switch();
            }
        }

        self.ctx.input.end_frame();
        if let Some(snapshot) = self.metrics.record_frame(self.metrics_log_interval_frames) {
            info!(
                frames = snapshot.frames,
                scene_switches = snapshot.scene_switches,
                total_frames = snapshot.total_frames,
                "frame_metrics"
            );
        }
    }

    /// Latest-value resize notification; consumed at the top of the next
    /// frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.resize_slot.push(ViewportSize::new(width, height));
    }

    pub fn set_action(&mut self, action: InputAction, is_down: bool) {
        self.ctx.input.set_action(action, is_down);
    }

    pub fn push_move_vector(&mut self, x: f32, y: f32) {
        self.ctx.input.push_move_vector(x, y);
    }

    pub fn push_move_stop(&mut self) {
        self.ctx.input.push_move_stop();
    }

    pub fn push_jump(&mut self) {
        self.ctx.input.push_jump();
    }

    pub fn push_load_progress(&mut self, progress: f32) {
        self.ctx.input.push_load_progress(progress);
    }

    /// Manual scene advance: start from the menu, restart from game over.
    /// A silent no-op anywhere else, including before the first frame.
    pub fn advance_scene(&mut self) {
        self.ctx.input.request_advance();
    }

    pub fn subscribe(&mut self) -> Receiver<SceneActivated> {
        self.ctx.bridge.subscribe()
    }

    /// None until the first frame has activated the initial scene.
    pub fn active_scene(&self) -> Option<SceneKey> {
        self.started.then(|| self.machine.active())
    }

    fn publish_activation(&mut self, prior: Option<SceneKey>) {
        self.ctx.bridge.publish(SceneActivated {
            scene: self.machine.active(),
            prior,
        });
    }

    #[cfg(test)]
    pub(crate) fn machine_mut(&mut self) -> &mut SceneMachine {
        &mut self.machine
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameMetricsSnapshot {
    frames: u32,
    scene_switches: u32,
    total_frames: u64,
}

/// Frame-counted metrics accumulator. The runtime has no wall clock of its
/// own (the host paces frames), so intervals are counted in frames.
#[derive(Debug, Default)]
struct FrameMetrics {
    frames_in_interval: u32,
    switches_in_interval: u32,
    total_frames: u64,
}

impl FrameMetrics {
    fn record_switch(&mut self) {
        self.switches_in_interval = self.switches_in_interval.saturating_add(1);
    }

    fn record_frame(&mut self, interval_frames: u32) -> Option<FrameMetricsSnapshot> {
        self.total_frames = self.total_frames.saturating_add(1);
        self.frames_in_interval = self.frames_in_interval.saturating_add(1);
        if interval_frames == 0 || self.frames_in_interval < interval_frames {
            return None;
        }
        let snapshot = FrameMetricsSnapshot {
            frames: self.frames_in_interval,
            scene_switches: self.switches_in_interval,
            total_frames: self.total_frames,
        };
        self.frames_in_interval = 0;
        self.switches_in_interval = 0;
        Some(snapshot)
    }
}
