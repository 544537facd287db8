//! Configuration loading for the glimt viewer.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/glimt/glimt.toml` on Linux). Every field is optional;
//! missing fields fall back to defaults, and a broken file degrades to
//! the default config with a logged warning.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use glimt_core::{AnimationSpeed, EffectKind, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub effect: EffectKind,
    pub theme: Theme,
    pub speed: AnimationSpeed,
    /// Particle density multiplier, clamped to `0.0..=3.0`.
    pub density: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            effect: EffectKind::DataFlow,
            theme: Theme::Dark,
            speed: AnimationSpeed::Medium,
            density: 1.0,
        }
    }
}

impl Config {
    /// Platform config file path.
    pub fn path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "glimt")
            .map(|dirs| dirs.config_dir().join("glimt.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Load from the platform path; a missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config: {err}");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.density.is_finite() {
            self.density = 1.0;
        }
        self.density = self.density.clamp(0.0, 3.0);
        self
    }
}
