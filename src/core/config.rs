//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.settle/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::friend::{DEFAULT_AVATAR_BASE_URL, Friend, FriendId, avatar_url, demo_friends};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SettleConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub friends: Vec<FriendEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub currency: Option<String>,
    pub avatar_base_url: Option<String>,
    pub demo_friends: Option<bool>,
}

/// A friend to seed the session with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FriendEntry {
    pub name: String,
    pub id: Option<String>,
    pub image: Option<String>,
    pub balance: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "€";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency: String,
    pub avatar_base_url: String,
    pub friends: Vec<Friend>,
}

/// Values taken from the command line. `None` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub currency: Option<String>,
    pub empty: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.settle/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".settle").join("config.toml"))
}

/// Load config from `~/.settle/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SettleConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SettleConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SettleConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SettleConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<SettleConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SettleConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Settle Configuration
# All settings are optional. Defaults are used for anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# currency = "€"                           # Or set SETTLE_CURRENCY env var
# avatar_base_url = "https://i.pravatar.cc/48"   # Or set SETTLE_AVATAR_URL
# demo_friends = true                      # Start with Clark, Sarah and Anthony

# [[friends]]
# name = "Maya"
# balance = 12.5                           # Positive: Maya owes you

# [[friends]]
# name = "Leo"
# id = "leo"
# image = "https://i.pravatar.cc/48?u=leo"
# balance = -4
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SettleConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Currency: CLI → env → config → default
    let currency = cli
        .currency
        .clone()
        .or_else(|| std::env::var("SETTLE_CURRENCY").ok())
        .or_else(|| config.general.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    // Avatar base URL: env → config → default
    let avatar_base_url = std::env::var("SETTLE_AVATAR_URL")
        .ok()
        .or_else(|| config.general.avatar_base_url.clone())
        .unwrap_or_else(|| DEFAULT_AVATAR_BASE_URL.to_string());

    let friends = if cli.empty {
        Vec::new()
    } else {
        let mut friends = if config.general.demo_friends.unwrap_or(true) {
            demo_friends()
        } else {
            Vec::new()
        };
        friends.extend(
            config
                .friends
                .iter()
                .map(|entry| seed_friend(entry, &avatar_base_url)),
        );
        friends
    };

    ResolvedConfig {
        currency,
        avatar_base_url,
        friends,
    }
}

fn seed_friend(entry: &FriendEntry, avatar_base_url: &str) -> Friend {
    let id = entry
        .id
        .clone()
        .map(FriendId::from)
        .unwrap_or_else(FriendId::generate);
    let image = entry
        .image
        .clone()
        .unwrap_or_else(|| avatar_url(avatar_base_url, &id));
    Friend::new(id, entry.name.clone(), image, entry.balance.unwrap_or(0.0))
}
