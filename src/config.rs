use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunables for the projection engine and renderer.
///
/// Every field has a default, so a TOML file only needs the keys it overrides:
///
/// ```toml
/// low_angular_radius = 0.2
/// anchor_fraction = [0.5, 0.5]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Visible cap (radians) at high altitude
    pub high_angular_radius: f64,
    /// Visible cap (radians) at low altitude
    pub low_angular_radius: f64,
    /// Exponential smoothing rate `k` (per second)
    pub smoothing_rate: f64,
    /// Multiplier on the angular radius beyond which forward projection culls
    pub horizon_slack: f64,
    /// Screen position of the camera as a fraction of the viewport (x, y)
    pub anchor_fraction: (f64, f64),
    /// Spacing of graticule lines in degrees
    pub grid_spacing_deg: f64,
    /// Samples per graticule line
    pub grid_samples: usize,
    /// Altitude fraction below which the atmosphere glow is skipped
    pub glow_threshold: f64,
    pub border_width_high: f64,
    pub border_width_low: f64,
    pub coast_glow_width: f64,
    pub coast_glow_alpha: f64,
    pub atmosphere_width: f64,
    /// Gap between a city dot and its label, in screen units
    pub label_offset: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            high_angular_radius: 0.55,
            low_angular_radius: 0.18,
            smoothing_rate: 3.0,
            horizon_slack: 1.05,
            anchor_fraction: (0.5, 0.8),
            grid_spacing_deg: 15.0,
            grid_samples: 72,
            glow_threshold: 0.05,
            border_width_high: 1.0,
            border_width_low: 2.0,
            coast_glow_width: 4.0,
            coast_glow_alpha: 0.25,
            atmosphere_width: 6.0,
            label_offset: 3.0,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let floats = [
            ("high_angular_radius", self.high_angular_radius),
            ("low_angular_radius", self.low_angular_radius),
            ("smoothing_rate", self.smoothing_rate),
            ("horizon_slack", self.horizon_slack),
            ("anchor_fraction.0", self.anchor_fraction.0),
            ("anchor_fraction.1", self.anchor_fraction.1),
            ("grid_spacing_deg", self.grid_spacing_deg),
            ("glow_threshold", self.glow_threshold),
            ("border_width_high", self.border_width_high),
            ("border_width_low", self.border_width_low),
            ("coast_glow_width", self.coast_glow_width),
            ("coast_glow_alpha", self.coast_glow_alpha),
            ("atmosphere_width", self.atmosphere_width),
            ("label_offset", self.label_offset),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{name} must be finite, got {value}"));
        }

        if !(self.low_angular_radius > 0.0 && self.high_angular_radius > 0.0) {
            return invalid("angular radii must be positive".into());
        }
        if self.high_angular_radius >= std::f64::consts::PI || self.low_angular_radius >= std::f64::consts::PI {
            return invalid("angular radii must be below pi".into());
        }
        if self.low_angular_radius > self.high_angular_radius {
            return invalid(format!(
                "low_angular_radius {} exceeds high_angular_radius {}",
                self.low_angular_radius, self.high_angular_radius
            ));
        }
        if self.smoothing_rate <= 0.0 {
            return invalid("smoothing_rate must be positive".into());
        }
        if self.horizon_slack < 1.0 {
            return invalid("horizon_slack must be at least 1".into());
        }
        let (ax, ay) = self.anchor_fraction;
        if !(0.0..=1.0).contains(&ax) || !(0.0..=1.0).contains(&ay) {
            return invalid(format!("anchor_fraction ({ax}, {ay}) outside [0, 1]"));
        }
        if self.grid_spacing_deg <= 0.0 || self.grid_samples < 2 {
            return invalid("grid needs positive spacing and at least 2 samples".into());
        }
        Ok(())
    }
}
