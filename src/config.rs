//! Configuration for authlist
//!
//! Settings come from `authlist.toml` in the working directory or from the
//! platform config directory. Every section and key is optional.

use crate::constants::{CONFIG_GENERATED, DEFAULT_MASK_CHAR};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Provider types understood by [`crate::auth::create_provider`]
pub const SUPPORTED_PROVIDERS: [&str; 2] = ["local", "nextauth"];

const LOCAL_CONFIG_FILE: &str = "authlist.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix list rows with their 1-based position
    pub show_item_numbers: bool,
    /// Character used to mask the password field
    pub mask_char: String,
}

/// Authentication provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Provider type: "local" or "nextauth"
    pub provider: String,
    /// Server root for the nextauth provider
    pub base_url: String,
    /// HTTP request timeout for the nextauth provider
    pub request_timeout_secs: u64,
    /// Local accounts: email -> SHA-256 hex digest of the password
    pub accounts: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log entries to a file in addition to the in-memory log
    pub enabled: bool,
    /// Minimum level captured from the `log` facade
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_item_numbers: true,
            mask_char: DEFAULT_MASK_CHAR.to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: "local".to_string(),
            base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
            accounts: BTreeMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// The masking character, falling back to the default when unset
    pub fn mask(&self) -> char {
        self.mask_char
            .chars()
            .next()
            .or_else(|| DEFAULT_MASK_CHAR.chars().next())
            .unwrap_or('*')
    }
}

impl LoggingConfig {
    /// Parsed level filter, `Info` when the configured value is unknown
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load the first config file found, or defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate one config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// `./authlist.toml` wins over `<config dir>/authlist/config.toml`
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        let mut candidates = std::iter::once(local).chain(Self::get_default_config_path().ok());
        candidates.find(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.mask_char.chars().count() != 1 {
            anyhow::bail!("mask_char must be exactly one character, got '{}'", self.ui.mask_char);
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        self.validate_auth()
    }

    /// Validate the authentication provider settings
    fn validate_auth(&self) -> Result<()> {
        let auth = &self.auth;

        if !SUPPORTED_PROVIDERS.contains(&auth.provider.as_str()) {
            anyhow::bail!(
                "Unsupported auth provider '{}'. Available providers: {}",
                auth.provider,
                SUPPORTED_PROVIDERS.join(", ")
            );
        }

        if auth.request_timeout_secs == 0 || auth.request_timeout_secs > 300 {
            anyhow::bail!(
                "request_timeout_secs must be between 1 and 300, got {}",
                auth.request_timeout_secs
            );
        }

        match auth.provider.as_str() {
            "nextauth" => {
                let url = reqwest::Url::parse(&auth.base_url)
                    .with_context(|| format!("Invalid base_url '{}'", auth.base_url))?;
                if url.scheme() != "http" && url.scheme() != "https" {
                    anyhow::bail!("base_url must use http or https, got '{}'", url.scheme());
                }
            }
            _ => {
                for (email, hash) in &auth.accounts {
                    if email.is_empty() {
                        anyhow::bail!("Account emails cannot be empty");
                    }
                    if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                        anyhow::bail!(
                            "Account '{}': password hash must be 64 hex characters (see --hash-password)",
                            email
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Write the default configuration, with a header explaining accounts
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let header = format!(
            "# authlist Configuration File\n# Generated on {}\n#\n# Add local accounts under [auth.accounts] as\n# \"email\" = \"<output of authlist --hash-password>\"\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(path, header + &body)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// `authlist` directory under the platform config dir
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("authlist"))
    }

    /// Where `load` looks after the working directory
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
