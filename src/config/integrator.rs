use crate::engineering::SuffixStyle;
use crate::leaky_integrator::{LeakyIntegrator, DEFAULT_GAIN};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "leaky_integrator.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    pub gain: f64,
    pub suffix_style: SuffixStyle,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            gain: DEFAULT_GAIN,
            suffix_style: SuffixStyle::default(),
        }
    }
}

impl IntegratorConfig {
    /// Integrator with this gain and a cleared state. The gain is applied as is.
    pub fn build(&self) -> LeakyIntegrator {
        LeakyIntegrator::with_gain(self.gain)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Integrator config saved to {}", path.display());
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Integrator config loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
