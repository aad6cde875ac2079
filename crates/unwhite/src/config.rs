//! JSON job configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::filter::{KnockoutParams, DEFAULT_THRESHOLD};

#[derive(thiserror::Error, Debug)]
pub enum ConfigIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

/// Configuration for one knockout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutConfig {
    /// Image to read.
    pub image_path: PathBuf,
    /// Where the PNG goes; omitted means `image_path` is overwritten.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Optional destination for the JSON run report.
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl KnockoutConfig {
    /// Config for `image_path` with default settings (in-place overwrite).
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            output_path: None,
            threshold: DEFAULT_THRESHOLD,
            report_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.image_path.clone())
    }

    /// Filter settings from this config.
    pub fn params(&self) -> KnockoutParams {
        KnockoutParams {
            threshold: self.threshold,
        }
    }
}
