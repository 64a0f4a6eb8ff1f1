//! Resolve the effective [`FolioConfig`].
//!
//! Evaluation order:
//! 1) an explicit path (the `--config` flag),
//! 2) `$FOLIO_CONFIG_PATH`,
//! 3) defaults.
//!
//! `$FOLIO_CONTENT_PATH` then overrides the content location regardless of
//! where the rest came from.

pub mod error;

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use error::ConfigLoadError;

use crate::models::FolioConfig;
use crate::validation::{self, ConfigWarnings};

pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";
pub const CONTENT_PATH_ENV: &str = "FOLIO_CONTENT_PATH";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

impl ConfigSource {
    /// Config file that was read, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::EnvPath(path) | ConfigSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::EnvPath(path) => write!(f, "${CONFIG_PATH_ENV} ({})", path.display()),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated configuration plus how it was obtained.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FolioConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    read_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            read_dotenv: true,
        }
    }

    /// Use this file instead of consulting the environment.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Skip reading `.env` from the working directory.
    pub fn without_dotenv(mut self) -> Self {
        self.read_dotenv = false;
        self
    }

    /// Load against the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        if self.read_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => log::debug!("loaded environment from {}", path.display()),
                Err(err) if err.not_found() => {}
                Err(err) => log::warn!("ignoring unreadable .env: {err}"),
            }
        }
        self.load_with(|key| env::var(key).ok())
    }

    /// Load with `lookup` standing in for the process environment.
    pub fn load_with<F>(&self, lookup: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path) = &self.config_path {
            (read_file(path)?, ConfigSource::File(path.clone()))
        } else if let Some(raw) = non_empty(CONFIG_PATH_ENV) {
            let path = PathBuf::from(raw);
            (read_file(&path)?, ConfigSource::EnvPath(path))
        } else {
            (FolioConfig::default(), ConfigSource::Default)
        };

        if let Some(raw) = non_empty(CONTENT_PATH_ENV) {
            log::debug!("content path overridden by ${CONTENT_PATH_ENV}");
            config.content_path = PathBuf::from(raw);
        } else if let Some(base) = source.path().and_then(Path::parent)
            && config.content_path.is_relative()
        {
            config.content_path = base.join(&config.content_path);
        }

        let warnings = validation::validate(&config)?;
        for warning in warnings.iter() {
            log::warn!("{warning}");
        }
        log::info!("configuration loaded from {source}");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }
}

fn read_file(path: &Path) -> Result<FolioConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FolioConfig::from_toml_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
