//! Engine configuration loading and parsing (`quill.toml`).
//!
//! Unknown fields are ignored (TOML deserialization tolerance) so a config
//! file can carry host-side sections without breaking the engine; every
//! engine setting has a serde default and a missing file yields the default
//! configuration outright.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Number of undo history entries retained per buffer.
    #[serde(default = "HistoryConfig::default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl HistoryConfig {
    const fn default_capacity() -> usize {
        50
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Bound of the per-buffer request channel.
    #[serde(default = "ChannelConfig::default_requests")]
    pub requests: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            requests: Self::default_requests(),
        }
    }
}

impl ChannelConfig {
    const fn default_requests() -> usize {
        1024
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Original file string, when one was read.
    pub raw: Option<String>,
    /// Parsed (or default) data.
    pub file: ConfigFile,
}

impl Config {
    pub fn history_capacity(&self) -> usize {
        self.file.history.capacity
    }

    pub fn request_channel_capacity(&self) -> usize {
        self.file.channel.requests
    }
}

/// Best-effort config path following platform conventions: a working
/// directory `quill.toml` wins, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("quill.toml");
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("quill").join("quill.toml"))
        .unwrap_or(local)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(target: "config", path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: ConfigFile =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    info!(
        target: "config",
        path = %path.display(),
        history_capacity = file.history.capacity,
        request_channel = file.channel.requests,
        "config loaded"
    );
    Ok(Config {
        raw: Some(raw),
        file,
    })
}

/// Load from the discovered platform path.
pub fn load_default() -> Result<Config> {
    load(&discover())
}
