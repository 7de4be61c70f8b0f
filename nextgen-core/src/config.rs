//! Application configuration, stored as TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{clamp_count, Asset, DirectionFilter, GenerationRequest};
use crate::rng::SeedPolicy;

/// Default artificial delay before a batch is shown.
pub const DEFAULT_DELAY_MS: u64 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Generator defaults and pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub default_asset: Asset,
    pub default_count: usize,
    pub default_filter: DirectionFilter,
    pub backtest_filter: bool,
    /// Flat pause before results appear; 0 disables it.
    pub delay_ms: u64,
    /// Fixed seed for reproducible batches. Omit for entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_asset: Asset::default(),
            default_count: 10,
            default_filter: DirectionFilter::All,
            backtest_filter: false,
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
        }
    }
}

impl GeneratorSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        SeedPolicy::from_option(self.seed)
    }

    /// Initial request for a form-driven caller, count clamped to the input range.
    pub fn initial_request(&self) -> GenerationRequest {
        GenerationRequest {
            count: clamp_count(self.default_count),
            asset: self.default_asset,
            direction_filter: self.default_filter,
            backtest_filter: self.backtest_filter,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorSettings,
}

impl AppConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path`, or fall back to defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.generator.delay_ms, 3000);
        assert_eq!(cfg.generator.seed_policy(), SeedPolicy::Entropy);
    }

    #[test]
    fn full_toml_parses() {
        let cfg = AppConfig::from_toml(
            r#"
            [generator]
            default_asset = "USD/JPY"
            default_count = 25
            default_filter = "PUT"
            backtest_filter = true
            delay_ms = 0
            seed = 42
            "#,
        )
        .unwrap();
        let g = &cfg.generator;
        assert_eq!(g.default_asset, Asset::UsdJpy);
        assert_eq!(g.default_count, 25);
        assert_eq!(g.default_filter, DirectionFilter::Put);
        assert!(g.backtest_filter);
        assert_eq!(g.delay(), Duration::ZERO);
        assert_eq!(g.seed_policy(), SeedPolicy::Fixed(42));
    }

    #[test]
    fn unknown_asset_rejected() {
        let err = AppConfig::from_toml("[generator]\ndefault_asset = \"BTC/USD\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn initial_request_clamps_count() {
        let mut g = GeneratorSettings::default();
        g.default_count = 500;
        assert_eq!(g.initial_request().count, 30);
        g.default_count = 0;
        assert_eq!(g.initial_request().count, 1);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = AppConfig::load_or_default(Path::new("/nonexistent/nextgen/config.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn corrupt_file_is_error() {
        let dir = std::env::temp_dir().join("nextgen_config_corrupt");
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[generator\nnot toml").unwrap();

        assert!(AppConfig::load_or_default(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = AppConfig::default();
        cfg.generator.seed = Some(5);
        cfg.generator.default_asset = Asset::NzdJpyOtc;
        let text = cfg.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), cfg);
    }
}
