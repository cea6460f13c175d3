//! Engine configuration.

use crate::shapes::FillColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the engine. Every field has a default, so a partial JSON
/// object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Visible screen width in pixels.
    pub viewport_width: f64,
    /// Visible screen height in pixels.
    pub viewport_height: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Relative scale change per wheel step.
    pub zoom_factor: f64,
    /// Hit radius of selection handles, in screen pixels.
    pub handle_radius: f64,
    /// Distance of the rotate handle beyond the top-right corner, in screen pixels.
    pub rotate_handle_offset: f64,
    /// Fill for newly drawn shapes.
    pub default_fill: FillColor,
    /// Maximum history entries (`None` = unbounded).
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            min_scale: crate::viewport::DEFAULT_MIN_SCALE,
            max_scale: crate::viewport::DEFAULT_MAX_SCALE,
            zoom_factor: crate::viewport::DEFAULT_ZOOM_FACTOR,
            handle_radius: 8.0,
            rotate_handle_offset: 24.0,
            default_fill: FillColor::red(),
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        for (field, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(invalid("min_scale", "must be positive"));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(invalid("max_scale", "must be at least min_scale"));
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(invalid("zoom_factor", "must be positive"));
        }
        if !(self.handle_radius.is_finite() && self.handle_radius >= 0.0) {
            return Err(invalid("handle_radius", "must not be negative"));
        }
        if !(self.rotate_handle_offset.is_finite() && self.rotate_handle_offset >= 0.0) {
            return Err(invalid("rotate_handle_offset", "must not be negative"));
        }
        if self.history_limit == Some(0) {
            return Err(invalid("history_limit", "must keep at least one entry"));
        }
        Ok(())
    }
}
