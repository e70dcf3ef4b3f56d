use crate::{Error, Result};
use greenmind_engine::TokenApproximation;
use greenmind_engine::catalog::{builtin_comparison, builtin_profiles};
use greenmind_types::{ComparisonRecord, ModelProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "GREENMIND_CONFIG";

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GREENMIND_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.greenmind/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
        && !env_path.trim().is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("greenmind").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".greenmind").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// On-disk overrides for the built-in tables.
///
/// Every field is optional; an empty file yields the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Words-to-tokens ratio (built-in default 1.3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_ratio: Option<f64>,

    /// When true, `models` and `comparison` replace the built-in tables instead of merging
    #[serde(default)]
    pub replace_builtin: bool,

    #[serde(default)]
    pub models: Vec<ModelProfile>,

    #[serde(default)]
    pub comparison: Vec<ComparisonRecord>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using built-in tables", path.display());
            return Ok(Self::default());
        }

        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Like `save_to`, but fails with `AlreadyExists` unless `force` is set
    pub fn create_at(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        self.save_to(path)
    }

    /// Editable starting point: the built-in tables written out in full
    pub fn template() -> Self {
        Self {
            token_ratio: Some(TokenApproximation::DEFAULT_RATIO),
            replace_builtin: false,
            models: builtin_profiles(),
            comparison: builtin_comparison(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token_ratio.is_none()
            && !self.replace_builtin
            && self.models.is_empty()
            && self.comparison.is_empty()
    }
}
