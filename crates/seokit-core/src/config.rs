use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Defaults for `seokit suggest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum characters in a suggested title.
    pub title_limit: usize,
    /// Maximum characters in a suggested meta description.
    pub description_limit: usize,
    /// Appended to the title base before clamping.
    pub brand_suffix: String,
    /// Where the suggestion CSV is written.
    pub output: PathBuf,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            title_limit: 60,
            description_limit: 155,
            brand_suffix: " | LEM Building Surveying".to_string(),
            output: PathBuf::from("seo_fixes_suggestions.csv"),
        }
    }
}

/// Defaults for `seokit validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// URL list read when no input path is given.
    pub input: PathBuf,
    /// Where the status report is written.
    pub output: PathBuf,
    /// Per-request timeout in seconds.
    pub timeout_secs: f64,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("urls_to_check.txt"),
            output: PathBuf::from("post_deploy_status.csv"),
            timeout_secs: 10.0,
        }
    }
}

/// Defaults for `seokit redirect-map`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectMapConfig {
    /// Where the redirect worksheet is written.
    pub output: PathBuf,
}

impl Default for RedirectMapConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("redirect_map.csv"),
        }
    }
}

/// Global configuration loaded from `~/.config/seokit/config.toml`.
///
/// Every value is a default for a CLI option; flags given on the command line win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeokitConfig {
    pub suggest: SuggestConfig,
    pub validate: ValidateConfig,
    pub redirect_map: RedirectMapConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("seokit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SeokitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SeokitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SeokitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
