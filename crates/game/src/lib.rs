//! Core of a small browser-hosted 2D platformer: scene lifecycle, the
//! per-frame gameplay simulation, responsive layout and the host bridge.
//! The embedding shell owns rendering, asset decoding and real input
//! devices; it drives [`GameApp::frame`] once per display refresh and
//! pushes input/resize events between frames.

pub mod app;

pub use app::{
    build_app, build_app_from_json, init_tracing, DesignSpace, FeelConfig, GameApp, GameConfig,
    SceneActivated, SceneKey,
};
