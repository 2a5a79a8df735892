//! TOML configuration for the `landtracker` tool.
//!
//! The file is looked up in this order: the `--config` flag, the
//! `LANDTRACKER_CONFIG` environment variable, then
//! `<config dir>/landtracker/config.toml`. A missing default file means
//! defaults; a missing file named by the flag or the variable is an error.
//! Unknown keys are rejected.

use landtracker_authz::Gate;
use landtracker_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "LANDTRACKER_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandTrackerConfig {
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Decision engine settings.
    pub authz: AuthzConfig,
}

/// `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset, e.g. `info` or `landtracker_authz=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// `[authz]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthzConfig {
    /// Log every decision at debug level.
    pub log_decisions: bool,
    /// Apply the self-deletion guard on top of the delete policy.
    pub guard_self_delete: bool,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            log_decisions: true,
            guard_self_delete: true,
        }
    }
}

impl LandTrackerConfig {
    /// Name used in paths and messages.
    pub fn project_name() -> &'static str {
        "landtracker"
    }

    /// `<config dir>/landtracker/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolves the file to use: explicit path, then env var, then default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        let env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::resolve_config_source(explicit, env.as_deref()).map(|(path, _)| path)
    }

    /// Like [`resolve_config_path`](Self::resolve_config_path) with the env
    /// value passed in. The flag is `true` when the path was named by
    /// `--config` or the env var rather than being the platform default.
    pub fn resolve_config_source(
        explicit: Option<&str>,
        env: Option<&str>,
    ) -> Option<(PathBuf, bool)> {
        explicit
            .filter(|p| !p.is_empty())
            .or(env.filter(|p| !p.is_empty()))
            .map(|p| (PathBuf::from(p), true))
            .or_else(|| Self::default_config_path().map(|p| (p, false)))
    }

    /// Loads the configuration.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load_from(explicit, env.as_deref())
    }

    /// Loads the configuration with the env value passed in.
    pub fn load_from(explicit: Option<&str>, env: Option<&str>) -> Result<Self> {
        let Some((path, named)) = Self::resolve_config_source(explicit, env) else {
            log::debug!("No config directory on this platform; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if named {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses TOML text; absent keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A gate configured from the `[authz]` table.
    pub fn gate(&self) -> Gate {
        Gate::new().with_decision_logging(self.authz.log_decisions)
    }
}
