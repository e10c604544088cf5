//! Configuration loaded from a JSON5 file.
//!
//! A commented default file is written on first run so there is always
//! something to edit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Contents written when no config file exists yet.
pub const DEFAULT_CONFIG: &str = include_str!("../default_config.json5");

/// An error that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or created.
    #[error("failed to access config {path}: {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json5::Error,
    },
    /// A value parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrainConfig {
    /// Seed for the default random source.
    pub seed: u32,
    /// Distance in noise space between neighbouring pixels.
    pub frequency: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Z coordinate of the rendered slice.
    pub depth: f64,
    /// Where rendered images are written.
    pub output: PathBuf,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.02,
            width: 512,
            height: 512,
            depth: 0.0,
            output: PathBuf::from("noise.png"),
            log_level: "info".to_owned(),
        }
    }
}

impl GrainConfig {
    /// Load the config at `path`, writing [`DEFAULT_CONFIG`] there first if the
    /// file does not exist.
    ///
    /// Returns the config and whether the file was created.
    pub fn load_or_create(path: &Path) -> Result<(Self, bool), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        let created = if path.exists() {
            false
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
            true
        };

        let contents = fs::read_to_string(path).map_err(io_error)?;
        let config = Self::parse(&contents, path)?;
        Ok((config, created))
    }

    /// Parse config contents. `path` is only used for error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid {
                field: if self.width == 0 { "width" } else { "height" },
                reason: "image dimensions must be non-zero".to_owned(),
            });
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "frequency",
                reason: format!("must be a positive number, got {}", self.frequency),
            });
        }
        if !self.depth.is_finite() {
            return Err(ConfigError::Invalid {
                field: "depth",
                reason: format!("must be finite, got {}", self.depth),
            });
        }
        Ok(())
    }
}
