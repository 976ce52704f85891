use serde::{Deserialize, Serialize};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::paths::Paths;
use crate::error::{CookbookError, Result};

/// TheMealDB public v1 endpoint (test key `1`)
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Default image cache budget in megabytes
const DEFAULT_CACHE_CAPACITY_MB: u64 = 64;

/// Keys accepted by `Config::set`
pub const CONFIG_KEYS: &[&str] = &["api.base_url", "images.cache_capacity_mb", "output.format"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Image cache settings
    #[serde(default)]
    pub images: ImagesConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// API-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Image cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Upper bound on decoded image bytes held in memory, in megabytes
    #[serde(default = "default_cache_capacity_mb")]
    pub cache_capacity_mb: u64,
}

fn default_cache_capacity_mb() -> u64 {
    DEFAULT_CACHE_CAPACITY_MB
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cache_capacity_mb: default_cache_capacity_mb(),
        }
    }
}

impl ImagesConfig {
    /// Cache capacity in bytes
    pub fn cache_capacity_bytes(&self) -> u64 {
        self.cache_capacity_mb.saturating_mul(1024 * 1024)
    }
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn is_known_format(value: &str) -> bool {
    value == "pretty" || value == "json"
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values `set` would refuse, for configs written by hand
    pub fn validate(&self) -> Result<()> {
        if self.images.cache_capacity_mb == 0 {
            return Err(CookbookError::Config(
                "images.cache_capacity_mb must be greater than zero".to_string(),
            ));
        }
        if !is_known_format(&self.output.format) {
            return Err(CookbookError::Config(format!(
                "output.format must be 'pretty' or 'json', got '{}'",
                self.output.format
            )));
        }
        Ok(())
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, &contents)?;

        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&paths.config_file, perms)?;
        }

        Ok(())
    }

    /// Set a single value by dotted key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| {
                    CookbookError::InvalidArgument(format!("api.base_url is not a valid URL: {e}"))
                })?;
                self.api.base_url = value.to_string();
            }
            "images.cache_capacity_mb" => {
                let mb: u64 = value.parse().map_err(|_| {
                    CookbookError::InvalidArgument(
                        "images.cache_capacity_mb must be a whole number".to_string(),
                    )
                })?;
                if mb == 0 {
                    return Err(CookbookError::InvalidArgument(
                        "images.cache_capacity_mb must be greater than zero".to_string(),
                    ));
                }
                self.images.cache_capacity_mb = mb;
            }
            "output.format" => {
                if !is_known_format(value) {
                    return Err(CookbookError::InvalidArgument(
                        "output.format must be 'pretty' or 'json'".to_string(),
                    ));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(CookbookError::InvalidArgument(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
