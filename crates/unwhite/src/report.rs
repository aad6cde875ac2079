//! JSON run report.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::config::ConfigIoError;

/// Wall-clock milliseconds spent in each stage of a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimingsMs {
    pub load_image: u64,
    pub filter: u64,
    pub save_image: u64,
    pub total: u64,
}

/// Summary of one knockout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutReport {
    pub image_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub total_pixels: u64,
    pub cleared_pixels: u64,
    #[serde(default)]
    pub timings_ms: TimingsMs,
}

impl KnockoutReport {
    /// Fraction of pixels cleared, in [0, 1].
    pub fn cleared_fraction(&self) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        self.cleared_pixels as f64 / self.total_pixels as f64
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_fraction_handles_empty_image() {
        let report = KnockoutReport {
            image_path: PathBuf::from("a.png"),
            output_path: PathBuf::from("a.png"),
            width: 0,
            height: 0,
            threshold: 240,
            total_pixels: 0,
            cleared_pixels: 0,
            timings_ms: TimingsMs::default(),
        };
        assert_eq!(report.cleared_fraction(), 0.0);
    }
}
