use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Parameters controlling feature extraction.
///
/// `window` is the number of residues taken on each side of a position for
/// sequence-window features; `contact_radius` is the alpha-carbon contact
/// cutoff in Angstroms for structure features.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionConfig {
    pub window: usize,
    pub contact_radius: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window: 2,
            contact_radius: 8.0,
        }
    }
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    window: Option<usize>,
    contact_radius: Option<f64>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    pub fn contact_radius(mut self, radius: f64) -> Self {
        self.contact_radius = Some(radius);
        self
    }

    /// Builds the configuration, falling back to defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for a zero window or a
    /// non-positive or non-finite contact radius.
    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let defaults = PredictionConfig::default();
        let config = PredictionConfig {
            window: self.window.unwrap_or(defaults.window),
            contact_radius: self.contact_radius.unwrap_or(defaults.contact_radius),
        };
        config.validate()?;
        Ok(config)
    }
}

impl PredictionConfig {
    /// Checks the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "window",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.contact_radius.is_finite() || self.contact_radius <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "contact_radius",
                reason: format!("must be a positive distance, got {}", self.contact_radius),
            });
        }
        Ok(())
    }
}
