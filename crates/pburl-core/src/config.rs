use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OPERATION_SEPARATOR: &str = "~";
pub const DEFAULT_PARAMETER_SEPARATOR: &str = ",";

/// Per-call codec configuration. Constructed once by the caller and passed by
/// reference into `url_to_obj` / `obj_to_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlConfig {
    /// Parse/serialize custom-domain layouts (no cloud name, mandatory version tag).
    pub is_custom_domain: bool,
    /// Joins successive transformations in a pattern.
    pub operation_separator: String,
    /// Joins `key:value` params inside one transformation.
    pub parameter_separator: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            is_custom_domain: false,
            operation_separator: DEFAULT_OPERATION_SEPARATOR.to_string(),
            parameter_separator: DEFAULT_PARAMETER_SEPARATOR.to_string(),
        }
    }
}

impl UrlConfig {
    pub fn custom_domain() -> Self {
        Self {
            is_custom_domain: true,
            ..Self::default()
        }
    }
}

/// CLI configuration loaded from `~/.config/pburl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PburlConfig {
    /// Treat URLs as custom-domain URLs unless overridden on the command line.
    pub custom_domain: bool,
    /// Base URL used by `build` when the descriptor leaves `baseUrl` empty.
    pub base_url: Option<String>,
    pub operation_separator: String,
    pub parameter_separator: String,
}

impl Default for PburlConfig {
    fn default() -> Self {
        Self {
            custom_domain: false,
            base_url: None,
            operation_separator: DEFAULT_OPERATION_SEPARATOR.to_string(),
            parameter_separator: DEFAULT_PARAMETER_SEPARATOR.to_string(),
        }
    }
}

impl PburlConfig {
    /// Codec configuration derived from this file, with an optional domain-mode override.
    pub fn url_config(&self, custom_domain_override: bool) -> UrlConfig {
        UrlConfig {
            is_custom_domain: self.custom_domain || custom_domain_override,
            operation_separator: self.operation_separator.clone(),
            parameter_separator: self.parameter_separator.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pburl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PburlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PburlConfig> {
    if !path.exists() {
        let default_cfg = PburlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PburlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
