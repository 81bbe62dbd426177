//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::menu::HoverIntentConfig;
use crate::nav::NavConfig;
use crate::pointer::MIN_HISTORY_SIZE;
use crate::runtime::RuntimeConfig;

/// Application directory name under the user config dir
const APP_DIR: &str = "portfolio-nav";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hover-intent timing and heading estimate
    #[serde(default)]
    pub menu: HoverIntentConfig,
    /// Async runtime settings
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Sidebar layout
    #[serde(default)]
    pub nav: NavConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists
    ///
    /// An explicit path must exist. A missing default file falls back to
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            info!("Loading config from {}", path.display());
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            Some(path) => {
                warn!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                Self::default_config()
            }
            None => {
                warn!("No user config directory, using defaults");
                Self::default_config()
            }
        }
    }

    /// `<config_dir>/portfolio-nav/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Create default configuration
    pub fn default_config() -> Result<Self> {
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.menu.toward_submenu_delay_ms == 0 {
            anyhow::bail!("toward_submenu_delay_ms must be greater than zero");
        }
        if self.menu.away_delay_ms == 0 {
            anyhow::bail!("away_delay_ms must be greater than zero");
        }

        let tracker = &self.menu.tracker;
        if tracker.history_size < MIN_HISTORY_SIZE {
            anyhow::bail!(
                "history_size ({}) must be at least {}",
                tracker.history_size,
                MIN_HISTORY_SIZE
            );
        }
        if tracker.max_sideways_px.is_nan() || tracker.max_sideways_px <= 0.0 {
            anyhow::bail!(
                "max_sideways_px ({}) must be positive",
                tracker.max_sideways_px
            );
        }

        if self.runtime.event_queue_capacity == 0 {
            anyhow::bail!("event_queue_capacity must be greater than zero");
        }

        self.nav.validate().context("Invalid nav layout")?;

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(mut self, toward_submenu_ms: Option<u64>, away_ms: Option<u64>) -> Self {
        if let Some(ms) = toward_submenu_ms {
            self.menu.toward_submenu_delay_ms = ms;
        }
        if let Some(ms) = away_ms {
            self.menu.away_delay_ms = ms;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            menu: HoverIntentConfig::default(),
            runtime: RuntimeConfig::default(),
            nav: NavConfig::portfolio(),
        }
    }
}
