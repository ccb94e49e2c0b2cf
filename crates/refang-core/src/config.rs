use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Output format for conversion results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/refang/config.toml`.
///
/// These knobs shape CLI behavior only; the conversion semantics are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefangConfig {
    /// Default output format for `convert`: "plain" (one URL per line) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Exit non-zero from `convert` when any result fails validation.
    #[serde(default)]
    pub fail_on_invalid: bool,
}

impl Default for RefangConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Plain,
            fail_on_invalid: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("refang")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RefangConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RefangConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RefangConfig = toml::from_str(&data)?;
    Ok(cfg)
}
