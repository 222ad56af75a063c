use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level SUHBA configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuhbaConfig {
    /// Countdown settings.
    #[serde(default)]
    pub countdown: CountdownToml,

    /// Post store settings.
    #[serde(default)]
    pub store: StoreToml,
}

impl SuhbaConfig {
    /// Reads the configuration at `path`, falling back to defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file: {}", path.display()));
            }
        };
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountdownToml {
    #[serde(default = "default_event_date")]
    pub event_date: String,
    #[serde(default = "default_total_days")]
    pub total_days: u32,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

impl Default for CountdownToml {
    fn default() -> Self {
        Self {
            event_date: default_event_date(),
            total_days: default_total_days(),
            utc_offset: default_utc_offset(),
        }
    }
}

fn default_event_date() -> String {
    "2026-02-04".to_string()
}
fn default_total_days() -> u32 {
    300
}
fn default_utc_offset() -> String {
    "+00:00".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreToml {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreToml {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("status_posts.json")
}
