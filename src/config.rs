//! Scoring configuration for the command line.
//!
//! Layers, lowest precedence first: built-in defaults, the `--config` JSON
//! file, then individual flags. Each flag can also come from a `CIRCLE_*`
//! environment variable. Validation runs once, on the merged result.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fs;
use std::path::PathBuf;

use canvas::config::{ConfigError, ScoringConfig};
use clap::Args;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON file with scoring thresholds; missing keys keep their defaults.
    #[arg(long, env = "CIRCLE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Minimum stroke length in pixels.
    #[arg(long, env = "CIRCLE_MIN_PATH_LENGTH", global = true)]
    pub min_path_length: Option<f64>,

    /// Fewest samples before a fit is attempted.
    #[arg(long, env = "CIRCLE_MIN_SAMPLES", global = true)]
    pub min_samples: Option<usize>,

    /// Mean deviation in pixels that drives the score to zero.
    #[arg(long, env = "CIRCLE_DEVIATION_THRESHOLD", global = true)]
    pub deviation_threshold: Option<f64>,

    /// Exclusive lower bound of the turn-angle variance band. Negative disables it.
    #[arg(long, env = "CIRCLE_MIN_TURN_VARIANCE", global = true, allow_negative_numbers = true)]
    pub min_turn_variance: Option<f64>,

    /// Exclusive upper bound of the turn-angle variance band.
    #[arg(long, env = "CIRCLE_MAX_TURN_VARIANCE", global = true)]
    pub max_turn_variance: Option<f64>,
}

impl ConfigArgs {
    /// Read the config file, if any, and merge every layer.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file can't be read, or
    /// [`LoadError::Invalid`] if the merged config fails to parse or validate.
    pub fn load(&self) -> Result<ScoringConfig, LoadError> {
        let file = match &self.config {
            Some(path) => Some(
                fs::read_to_string(path).map_err(|source| LoadError::Read { path: path.clone(), source })?,
            ),
            None => None,
        };
        self.layer(file.as_deref())
    }

    /// Merge defaults, the raw file contents, and flag overrides.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Invalid`] for malformed JSON or an unusable result.
    pub fn layer(&self, file: Option<&str>) -> Result<ScoringConfig, LoadError> {
        let base = match file {
            Some(raw) => serde_json::from_str(raw).map_err(ConfigError::from)?,
            None => ScoringConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, mut config: ScoringConfig) -> ScoringConfig {
        if let Some(v) = self.min_path_length {
            config.min_path_length = v;
        }
        if let Some(v) = self.min_samples {
            config.min_samples = v;
        }
        if let Some(v) = self.deviation_threshold {
            config.deviation_threshold = v;
        }
        if let Some(v) = self.min_turn_variance {
            config.min_turn_variance = v;
        }
        if let Some(v) = self.max_turn_variance {
            config.max_turn_variance = v;
        }
        config
    }
}
