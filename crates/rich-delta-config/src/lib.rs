//! Configuration for rich-delta.
//!
//! The config file selects which built-in blot and format variants a parse runs
//! against, and in which order:
//!
//! ```toml
//! [registry]
//! blots = ["mention", "list", "heading", "text"]
//! formats = ["link", "bold"]
//! ```

use rich_delta_engine::{BlotVariant, FormatVariant, Registry};
use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "RICH_DELTA_CONFIG";

const DEFAULT_CONFIG: &str = "~/.config/rich-delta/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown blot variant `{name}`")]
    UnknownBlot { name: String },

    #[error("Unknown format variant `{name}`")]
    UnknownFormat { name: String },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Variant names in registration order. `None` keeps the full built-in list.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blots: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
}

impl Config {
    /// Reads a config file. A missing file is `Ok(None)`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&raw)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads the config at [`Config::config_path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `$RICH_DELTA_CONFIG` when set, otherwise `~/.config/rich-delta/config.toml`.
    pub fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(custom) => {
                let custom = PathBuf::from(custom);
                Self::expand_path(&custom).unwrap_or(custom)
            }
            None => PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG).as_ref()),
        }
    }

    /// Expands `~` and `$VARS` in a user-supplied path. `None` when a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }

    /// Builds the parser registry described by this config.
    pub fn build_registry(&self) -> Result<Registry, ConfigError> {
        let mut builder = Registry::builder();

        builder = match &self.registry.blots {
            None => builder.with_builtin_blots(),
            Some(names) => names.iter().try_fold(builder, |b, name| {
                BlotVariant::builtin(name)
                    .map(|v| b.with_blot(v))
                    .ok_or_else(|| ConfigError::UnknownBlot { name: name.clone() })
            })?,
        };

        builder = match &self.registry.formats {
            None => builder.with_builtin_formats(),
            Some(names) => names.iter().try_fold(builder, |b, name| {
                FormatVariant::builtin(name)
                    .map(|v| b.with_format(v))
                    .ok_or_else(|| ConfigError::UnknownFormat { name: name.clone() })
            })?,
        };

        Ok(builder.build())
    }
}
