use crate::assistant::ComposingPolicy;
use crate::constants::{
    APP_NAME, DEFAULT_CONTACT_SUBMIT_DELAY_MS, DEFAULT_GEOCODE_TIMEOUT_SECS, DEFAULT_GEOCODE_URL,
    DEFAULT_LOCATION_CACHE_SECS, DEFAULT_REPLY_DELAY_MS, DEFAULT_TICK_RATE_MS,
};
use crate::errors::{PortfolioError, PortfolioResult};
use crate::geolocation::Coordinates;
use crate::resolver::KeywordRule;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::Duration,
};

pub const CONFIG_PATH_ENV: &str = "HOLOFOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reply_delay_ms: u64,
    pub composing_policy: ComposingPolicy,
    pub intro_enabled: bool,
    pub tick_rate_ms: u64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geocode_url: String,
    pub geocode_timeout_secs: u64,
    pub location_cache_secs: u64,
    pub contact_submit_delay_ms: u64,
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_rules: Option<Vec<KeywordRule>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            composing_policy: ComposingPolicy::Block,
            intro_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            latitude: None,
            longitude: None,
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            geocode_timeout_secs: DEFAULT_GEOCODE_TIMEOUT_SECS,
            location_cache_secs: DEFAULT_LOCATION_CACHE_SECS,
            contact_submit_delay_ms: DEFAULT_CONTACT_SUBMIT_DELAY_MS,
            log_level: "info".to_string(),
            keyword_rules: None,
        }
    }
}

impl Config {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn contact_submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact_submit_delay_ms)
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }

    pub fn location_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.location_cache_secs)
    }

    /// Both coordinates or nothing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (creating it with defaults when missing) and makes it
/// the process-wide config.
pub fn initialize_config() -> PortfolioResult<Config> {
    let config_path = get_config_path()?;
    let config = load_or_create(&config_path)?;

    let mut guard = CONFIG
        .write()
        .map_err(|_| PortfolioError::config_error("config lock poisoned"))?;
    *guard = config.clone();

    Ok(config)
}

pub fn load_or_create(config_path: &Path) -> PortfolioResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path).map_err(|e| {
            PortfolioError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| PortfolioError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let config = Config::default();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PortfolioError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, config_str).map_err(|e| {
            PortfolioError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(config)
    }
}

fn config_dir() -> PortfolioResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| PortfolioError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join(APP_NAME))
}

pub fn get_config_path() -> PortfolioResult<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json"))
}

pub fn log_dir() -> PortfolioResult<PathBuf> {
    Ok(config_dir()?.join("logs"))
}

pub fn validate_config(config: &Config) -> PortfolioResult<()> {
    if config.tick_rate_ms == 0 {
        return Err(PortfolioError::config_error("tick_rate_ms must be greater than 0"));
    }

    if config.geocode_timeout_secs == 0 {
        return Err(PortfolioError::config_error(
            "geocode_timeout_secs must be greater than 0",
        ));
    }

    if config.geocode_url.trim().is_empty() {
        return Err(PortfolioError::config_error("geocode_url is required"));
    }

    if let Some(lat) = config.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PortfolioError::config_error("latitude must be within [-90, 90]"));
        }
    }

    if let Some(lon) = config.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(PortfolioError::config_error(
                "longitude must be within [-180, 180]",
            ));
        }
    }

    if let Some(rules) = &config.keyword_rules {
        if rules.iter().any(|r| r.keyword.trim().is_empty()) {
            return Err(PortfolioError::config_error("keyword rules need a keyword"));
        }
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}
