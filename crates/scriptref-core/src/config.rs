//! Tool configuration: site root, probe tuning and concurrency cap.
//!
//! Settings load from a TOML file under the platform config directory
//! when present and fall back to defaults otherwise; the CLI may
//! override individual values per invocation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Default documentation site root.
pub const DEFAULT_BASE_URL: &str = "https://docs.unity3d.com";

/// Tool configuration with per-field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation site root URL.
    pub base_url: String,
    /// Maximum in-flight existence probes per batch. Kept modest so
    /// the site does not answer with throttling 5xx/429 responses.
    pub concurrency: usize,
    /// Per-attempt probe timeout in seconds.
    pub probe_timeout_secs: u64,
    /// Retries per candidate for transient probe failures.
    pub max_retries: u32,
    /// Initial backoff delay between retries, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            concurrency: 16,
            probe_timeout_secs: 10,
            max_retries: 2,
            retry_delay_ms: 250,
        }
    }
}

impl Config {
    /// Load from the default config path, or defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|err| Error::Config(format!("{}: {err}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location (`config.toml` under the platform
    /// config directory), when one can be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "scriptref", "scriptref")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Per-attempt probe timeout.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Initial retry backoff delay.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        Ok(())
    }
}
