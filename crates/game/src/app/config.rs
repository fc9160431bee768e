use std::fmt::Display;

use engine::ViewportSize;
use serde::Deserialize;

pub(crate) type ConfigResult<T> = Result<T, String>;

/// Fixed reference coordinate system the level geometry is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesignSpace {
    pub width: f32,
    pub height: f32,
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Empirically tuned mapping that keeps perceived game feel roughly
/// constant across canvas sizes. Configuration, not physics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeelConfig {
    pub reference_w: f32,
    pub reference_h: f32,
    pub base_scale: f32,
    pub feel_factor: f32,
}

impl Default for FeelConfig {
    fn default() -> Self {
        Self {
            reference_w: 320.0,
            reference_h: 180.0,
            base_scale: 0.67,
            feel_factor: 1.0 / 2.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub target_tps: u32,
    pub design: DesignSpace,
    pub feel: FeelConfig,
    pub initial_viewport: ViewportSize,
    pub hazard_seed: u64,
    pub metrics_log_interval_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_tps: 60,
            design: DesignSpace::default(),
            feel: FeelConfig::default(),
            initial_viewport: ViewportSize::new(1024.0, 768.0),
            hazard_seed: 0,
            metrics_log_interval_frames: 300,
        }
    }
}

impl GameConfig {
    /// Parses a host-supplied config. Reports the exact JSON path of the
    /// first offending field so embedding mistakes are easy to locate.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config = match serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer) {
            Ok(config) => config,
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                return if path.is_empty() || path == "." {
                    Err(format!("parse config json: {source}"))
                } else {
                    Err(format!("parse config json at {path}: {source}"))
                };
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.target_tps == 0 {
            return Err(Self::expected_actual("target_tps", ">= 1", self.target_tps));
        }
        Self::require_positive_finite("design.width", self.design.width)?;
        Self::require_positive_finite("design.height", self.design.height)?;
        Self::require_positive_finite("feel.reference_w", self.feel.reference_w)?;
        Self::require_positive_finite("feel.reference_h", self.feel.reference_h)?;
        Self::require_positive_finite("feel.base_scale", self.feel.base_scale)?;
        if !self.feel.feel_factor.is_finite() {
            return Err(Self::expected_actual(
                "feel.feel_factor",
                "finite number",
                self.feel.feel_factor,
            ));
        }
        if !self.initial_viewport.is_valid() {
            return Err(Self::validation_err(
                "initial_viewport",
                format!(
                    "expected finite positive dimensions, got {}x{}",
                    self.initial_viewport.width, self.initial_viewport.height
                ),
            ));
        }
        Ok(())
    }

    fn require_positive_finite(path: &str, value: f32) -> ConfigResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Self::expected_actual(path, "finite number > 0", value));
        }
        Ok(())
    }

    fn validation_err(path: &str, message: impl Into<String>) -> String {
        format!("validation failed at {path}: {}", message.into())
    }

    fn expected_actual(path: &str, expected: impl Display, actual: impl Display) -> String {
        Self::validation_err(path, format!("expected {expected}, got {actual}"))
    }
}
