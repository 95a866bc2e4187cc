//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.wgkeygen.toml` in the working directory
//! 4. `~/.config/wgkeygen/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::output::Format;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub netdev: NetdevConfig,
    pub output: OutputConfig,
}

/// `[netdev]` section: settings shared by both peers' snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetdevConfig {
    pub name: String,
    pub listen_port: u16,
    pub allowed_ips: Vec<String>,
    /// Seconds; `0` disables the keepalive line.
    pub persistent_keepalive: Option<u16>,
}

impl Default for NetdevConfig {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_INTERFACE.to_string(),
            listen_port: constants::DEFAULT_LISTEN_PORT,
            allowed_ips: vec![constants::DEFAULT_ALLOWED_IPS.to_string()],
            persistent_keepalive: Some(constants::DEFAULT_KEEPALIVE),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub netdev: NetdevLayer,
    pub output: OutputLayer,
}

/// `[netdev]` keys present in a single file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetdevLayer {
    pub name: Option<String>,
    pub listen_port: Option<u16>,
    pub allowed_ips: Option<Vec<String>>,
    pub persistent_keepalive: Option<u16>,
}

/// `[output]` keys present in a single file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<Format>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `dir/.wgkeygen.toml` if `dir` is given,
    /// then applies environment variable overrides.
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_with(Self::global_config_path().as_deref(), dir, env)
    }

    /// Same as [`Config::load`] with an explicit global config path.
    /// `None` skips the global layer.
    pub fn load_with(
        global: Option<&Path>,
        dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                tracing::debug!(path = %local_path.display(), "loading local config");
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a single config file as a layer.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key the layer sets, including ones equal to the defaults.
    fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer { netdev, output } = layer;
        if let Some(name) = netdev.name {
            self.netdev.name = name;
        }
        if let Some(port) = netdev.listen_port {
            self.netdev.listen_port = port;
        }
        if let Some(ips) = netdev.allowed_ips {
            self.netdev.allowed_ips = ips;
        }
        if let Some(keepalive) = netdev.persistent_keepalive {
            self.netdev.persistent_keepalive = Some(keepalive);
        }

        if let Some(format) = output.format {
            self.output.format = format;
        }
    }

    /// Apply environment variable overrides. Invalid values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.var(constants::ENV_INTERFACE) {
            self.netdev.name = val.trim().to_string();
        }

        if let Some(val) = env.var(constants::ENV_LISTEN_PORT) {
            match val.trim().parse::<u16>() {
                Ok(port) => self.netdev.listen_port = port,
                Err(_) => warn_invalid(constants::ENV_LISTEN_PORT, &val),
            }
        }

        if let Some(ips) = env.list(constants::ENV_ALLOWED_IPS) {
            if ips.is_empty() {
                warn_invalid(constants::ENV_ALLOWED_IPS, "");
            } else {
                self.netdev.allowed_ips = ips;
            }
        }

        if let Some(val) = env.var(constants::ENV_KEEPALIVE) {
            match val.trim().to_lowercase().as_str() {
                "off" | "none" => self.netdev.persistent_keepalive = None,
                other => match other.parse::<u16>() {
                    Ok(secs) => self.netdev.persistent_keepalive = Some(secs),
                    Err(_) => warn_invalid(constants::ENV_KEEPALIVE, &val),
                },
            }
        }

        if let Some(val) = env.var(constants::ENV_FORMAT) {
            match val.trim().parse::<Format>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn_invalid(constants::ENV_FORMAT, &val),
            }
        }
    }
}

fn warn_invalid(name: &str, value: &str) {
    tracing::warn!("ignoring invalid {name} value: {value:?}");
}
