//! # weft Configuration System
//!
//! Hierarchical configuration for the weft runtime environment.
//!
//! ## Features
//! - **Layered sources**: defaults, YAML files and `WEFT_*` environment variables
//! - **Validation**: every loaded configuration is checked before use

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

mod error;
mod logging;
mod validation;

pub use error::ConfigError;
pub use logging::LogFormat;
pub use logging::LoggingConfig;

/// Base configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "config/weft.yaml";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct WeftConfig {
    /// Default logger and `tracing` backend settings.
    #[validate(nested)]
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WeftConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default Values
    /// 2. `config/weft.yaml` - Base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - Environment‑specific overrides (`WEFT_ENV`).
    /// 4. `WEFT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(WeftConfig::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Yaml::file(CONFIG_FILE));
        } else {
            debug!("{} not found, using default configuration", CONFIG_FILE);
        }

        let env = std::env::var("WEFT_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific path, still honouring `WEFT_*` overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment = Figment::from(Serialized::defaults(WeftConfig::default()))
            .merge(Yaml::file(path));
        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed("WEFT_").ignore(&["env"]).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
