use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use xin_noise::FractalParams;

const DEFAULT_CONFIG: &str = include_str!("../package-content/xin_config.json5");

/// Errors that can occur while loading the sampler configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Which sampler fills a preview grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// One octave of `noise_2d`/`noise_3d`.
    Single,
    /// Octave sum using the configured fractal parameters.
    Fractal,
}

/// Grid settings for the `preview` command.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// Cells per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// World units between neighbouring cells.
    pub scale: f64,
    /// Depth of the sampled slice.
    pub z: f64,
    /// Sampler used for each cell.
    pub mode: SampleMode,
}

/// Top level configuration of the `xin` sampler.
#[derive(Debug, Clone, Deserialize)]
pub struct XinConfig {
    /// Fixed seed, or `None` for an entropy-derived one.
    pub seed: Option<i64>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Octave parameters for fractal sampling.
    pub fractal: FractalParams,
    /// Preview grid settings.
    pub preview: PreviewConfig,
}

impl XinConfig {
    /// Loads the config at `path`, or the built-in default when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Self::embedded();
        };

        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&config_str)
    }

    /// The configuration shipped with the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Parses and validates a JSON5 document.
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: XinConfig = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(ConfigError::Invalid("Preview width and height must be non-zero"));
        }
        if self.preview.width.checked_mul(self.preview.height).is_none() {
            return Err(ConfigError::Invalid("Preview width times height overflows"));
        }
        if !self.preview.scale.is_finite() || self.preview.scale <= 0.0 {
            return Err(ConfigError::Invalid("Preview scale must be a positive number"));
        }
        if !self.preview.z.is_finite() {
            return Err(ConfigError::Invalid("Preview z must be finite"));
        }
        Ok(())
    }
}
