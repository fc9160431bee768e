use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::GameConfig;
use super::runtime::GameApp;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Stock wiring: tracing + default level and tuning. Embedding hosts that
/// need their own tuning go through `build_app_from_json`.
pub fn build_app() -> GameApp {
    init_tracing();
    info!("=== Starfall Startup ===");
    GameApp::new(GameConfig::default()).expect("stock config is valid")
}

/// Builds the app from a host-supplied JSON config. Does not install a
/// tracing subscriber; call `init_tracing` (or bring your own) first.
pub fn build_app_from_json(raw: &str) -> Result<GameApp, String> {
    let config = GameConfig::from_json_str(raw)?;
    GameApp::new(config)
}
