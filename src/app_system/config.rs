//! Application configuration, read from `inventory.toml` and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::Product;
use super::ConfigError;

/// Runtime settings for the demo binary and the inventory actor.
///
/// Missing fields fall back to [`AppConfig::default`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Capacity of the actor's request channel.
    pub channel_capacity: usize,

    /// Optional TOML file with `[[products]]` tables to seed the store.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            channel_capacity: 32,
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "inventory.toml";
    pub const PATH_VAR: &'static str = "INVENTORY_CONFIG";

    /// Loads the config file, then applies `INVENTORY_*` environment overrides.
    ///
    /// The file named by `INVENTORY_CONFIG` must exist; the default
    /// `inventory.toml` is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(Self::PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(Self::DEFAULT_PATH).exists() => Self::from_file(Self::DEFAULT_PATH)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading config file");
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `INVENTORY_LOG_LEVEL`, `INVENTORY_CHANNEL_CAPACITY` and
    /// `INVENTORY_SEED_FILE` as returned by `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup("INVENTORY_LOG_LEVEL") {
            self.log_level = v;
        }
        if let Some(v) = lookup("INVENTORY_CHANNEL_CAPACITY") {
            self.channel_capacity = v.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("INVENTORY_CHANNEL_CAPACITY is not a number: {v}"))
            })?;
        }
        if let Some(v) = lookup("INVENTORY_SEED_FILE") {
            self.seed_file = Some(PathBuf::from(v));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be > 0".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Reads the products listed in a seed file, in file order.
pub fn load_seed_products(path: impl AsRef<Path>) -> Result<Vec<Product>, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let seed: SeedFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(seed.products)
}
