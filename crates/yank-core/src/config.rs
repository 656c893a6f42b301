use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the fetch tool is invoked (optional `[tool]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Executable used for both the catalog listing and the downloads.
    pub program: String,
    /// Format selector passed with `-f`.
    pub format: String,
    /// Container for merged audio/video (`--merge-output-format`).
    pub merge_output_format: String,
    /// External downloader (`--downloader`); empty disables it.
    pub downloader: String,
    /// Arguments for the external downloader (`--downloader-args`).
    pub downloader_args: String,
    /// Output template relative to the target directory. Must keep the title
    /// as the base name so later scans recognize the file.
    pub output_template: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            format: "bv*[height<=1080]+ba/b".to_string(),
            merge_output_format: "mp4".to_string(),
            downloader: "aria2c".to_string(),
            downloader_args: "aria2c:-x 16 -s 16 -k 1M".to_string(),
            output_template: "%(title)s.%(ext)s".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/yank/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YankConfig {
    /// Maximum number of entries processed at once.
    pub max_concurrent_fetches: usize,
    /// Send a desktop notification when a sync finishes.
    #[serde(default = "default_notify")]
    pub notify: bool,
    #[serde(default)]
    pub tool: ToolConfig,
}

fn default_notify() -> bool {
    true
}

impl Default for YankConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 4,
            notify: true,
            tool: ToolConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("yank")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YankConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YankConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<YankConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: YankConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
