use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page count observed in the lab writeup (pages 1..=116).
pub const DEFAULT_PAGE_COUNT: u32 = 116;

/// Pause between consecutive page requests, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 5000;

/// Global configuration loaded from `~/.config/wpd/config.toml`.
///
/// Every CLI flag overrides its config counterpart; the config only supplies
/// defaults so a recurring endpoint does not have to be retyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpdConfig {
    /// Number of pages to fetch (pages are 1-based, so the range is 1..=page_count).
    pub page_count: u32,
    /// Delay between consecutive page requests, in milliseconds.
    pub delay_ms: u64,
    /// Default endpoint URL; the `page` query parameter is filled in per page.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Default output directory for saved pages (falls back to the current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for WpdConfig {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            delay_ms: DEFAULT_DELAY_MS,
            endpoint: None,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wpd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WpdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WpdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WpdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
