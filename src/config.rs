//! Configuration for Otto
//!
//! Lookup order:
//! 1. `OTTO_*` environment variables (highest)
//! 2. `otto.toml` in the working directory
//! 3. `<config dir>/otto/config.toml` (e.g. `~/.config/otto/config.toml`)
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OttoError, OttoResult};
use crate::models::{DeployDefaults, Mode};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Vault section of `otto.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VaultConfig {
    /// Vault consulted when `--vault` is not given
    #[serde(default)]
    pub name: Option<String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployDefaults,

    #[serde(default)]
    pub vault: VaultConfig,
}

impl Config {
    /// Load a config file, discarding unknown-key warnings.
    pub fn load(path: &Path) -> OttoResult<Config> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load a config file and collect warnings for unknown keys.
    pub fn load_with_warnings(path: &Path) -> OttoResult<(Config, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| OttoError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the working directory, user config, or defaults.
    /// Never fails; unreadable files fall through to the next source.
    pub fn load_or_default(cwd: Option<&Path>) -> Config {
        Self::load_or_default_with_warnings(cwd).0
    }

    /// Same as [`load_or_default`](Self::load_or_default), keeping the
    /// unknown-key warnings from whichever file was used.
    pub fn load_or_default_with_warnings(cwd: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
        if let Some(root) = cwd {
            let project_config = root.join("otto.toml");
            if project_config.exists() {
                if let Ok((config, warnings)) = Config::load_with_warnings(&project_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("otto/config.toml");
            if user_config.exists() {
                if let Ok((config, warnings)) = Config::load_with_warnings(&user_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        (with_env_overrides(Config::default()), Vec::new())
    }
}

/// Apply `OTTO_*` environment overrides on top of a loaded config.
fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(environment) = std::env::var("OTTO_ENVIRONMENT") {
        if !environment.is_empty() {
            config.deploy.environment = environment;
        }
    }
    if let Ok(mode) = std::env::var("OTTO_MODE") {
        config.deploy.mode = Mode::parse_lenient(&mode);
    }
    if let Ok(vault) = std::env::var("OTTO_VAULT") {
        if !vault.is_empty() {
            config.vault.name = Some(vault);
        }
    }
    config
}
