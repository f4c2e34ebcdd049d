use crate::constants::env_vars;
use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{
    ensure_positive, parse_positive, validate_base_url, validate_log_file_path, validate_token,
};

/// Runtime configuration for the service.
///
/// Every upstream setting is required and has no default. Values come from an
/// optional TOML file and are overridden by environment variables.
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Upstream API base URL, e.g. `https://api.abiosgaming.com/v3`.
    pub api_base_url: String,
    /// Shared secret sent in the `Abios-Secret` header.
    pub token: String,
    /// Timeout applied to every outbound request.
    pub request_timeout_seconds: u64,
    /// Outbound limiter sustained rate.
    pub rate_limit_per_second: u32,
    /// Outbound limiter burst capacity.
    pub rate_limit_burst: u32,
    /// Path to the log file. If not specified, logs go to the default location.
    pub log_file_path: Option<String>,
}

/// On-disk shape of the config file. All fields are optional so a file can
/// carry only part of the settings and leave the rest to the environment.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub token: Option<String>,
    pub request_timeout_seconds: Option<u64>,
    pub rate_limit_per_second: Option<u32>,
    pub rate_limit_burst: Option<u32>,
    pub log_file_path: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("token", &mask_secret(&self.token))
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .field("rate_limit_burst", &self.rate_limit_burst)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

impl Config {
    /// Loads configuration for startup.
    ///
    /// # Arguments
    /// * `path` - Explicit config file. When `None`, the default config file
    ///   location is read if it exists.
    ///
    /// # Environment Variables
    /// - `ABIOS_API_BASE_URL` - Upstream base URL
    /// - `ABIOS_TOKEN` - Shared secret
    /// - `ABIOS_CLIENT_REQ_TIMEOUT_SEC` - Per-request timeout in seconds
    /// - `ABIOS_CLIENT_RATE_LIMIT_PERSEC` - Outbound requests per second
    /// - `ABIOS_CLIENT_RATE_LIMIT_BURST` - Outbound burst size
    /// - `ABIOS_LOG_FILE` - Log file path (optional)
    ///
    /// # Returns
    /// * `Ok(Config)` - All required settings present and valid
    /// * `Err(AppError)` - A setting is missing or malformed, or the file is unreadable
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => Self::load_file(path).await?,
            None => {
                let default_path = get_config_path();
                if Path::new(&default_path).exists() {
                    Self::load_file(&default_path).await?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Self::from_sources(file, |name| std::env::var(name).ok())
    }

    /// Builds configuration from environment variables only.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_sources(ConfigFile::default(), |name| std::env::var(name).ok())
    }

    /// Reads a TOML config file.
    pub async fn load_file(path: &str) -> Result<ConfigFile, AppError> {
        let content = fs::read_to_string(path).await?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file)
    }

    /// Merges a config file with a variable lookup (environment wins) and
    /// validates the result.
    pub fn from_sources<F>(file: ConfigFile, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty variables count as unset.
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_base_url = var(env_vars::API_BASE_URL)
            .or(file.api_base_url)
            .ok_or_else(|| missing(env_vars::API_BASE_URL))?;
        let token = var(env_vars::TOKEN)
            .or(file.token)
            .ok_or_else(|| missing(env_vars::TOKEN))?;

        let request_timeout_seconds = resolve_number(
            env_vars::REQUEST_TIMEOUT_SECONDS,
            var(env_vars::REQUEST_TIMEOUT_SECONDS),
            file.request_timeout_seconds,
        )?;
        let rate_limit_per_second = resolve_number(
            env_vars::RATE_LIMIT_PER_SECOND,
            var(env_vars::RATE_LIMIT_PER_SECOND),
            file.rate_limit_per_second,
        )?;
        let rate_limit_burst = resolve_number(
            env_vars::RATE_LIMIT_BURST,
            var(env_vars::RATE_LIMIT_BURST),
            file.rate_limit_burst,
        )?;

        let config = Config {
            api_base_url,
            token,
            request_timeout_seconds,
            rate_limit_per_second,
            rate_limit_burst,
            log_file_path: var(env_vars::LOG_FILE).or(file.log_file_path),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_base_url(env_vars::API_BASE_URL, &self.api_base_url)?;
        validate_token(env_vars::TOKEN, &self.token)?;
        ensure_positive(env_vars::REQUEST_TIMEOUT_SECONDS, self.request_timeout_seconds)?;
        ensure_positive(env_vars::RATE_LIMIT_PER_SECOND, self.rate_limit_per_second)?;
        ensure_positive(env_vars::RATE_LIMIT_BURST, self.rate_limit_burst)?;
        validate_log_file_path(&self.log_file_path)
    }

    /// Per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the platform-specific path for the default config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Displays the effective configuration to stdout with the token masked.
    pub fn display(&self) {
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", self.api_base_url);
        println!("────────────────────────────────────");
        println!("Token:");
        println!("{}", mask_secret(&self.token));
        println!("────────────────────────────────────");
        println!("Request Timeout:");
        println!("{} seconds", self.request_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Outbound Rate Limit:");
        println!(
            "{} req/s (burst {})",
            self.rate_limit_per_second, self.rate_limit_burst
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        match &self.log_file_path {
            Some(custom_path) => println!("{custom_path}"),
            None => {
                println!(
                    "{}/{}",
                    get_log_dir_path(),
                    crate::constants::LOG_FILE_NAME
                );
                println!("(Default location)");
            }
        }
    }
}

fn missing(name: &str) -> AppError {
    AppError::config_error(format!("{name} not set"))
}

fn resolve_number<T>(
    name: &str,
    from_env: Option<String>,
    from_file: Option<T>,
) -> Result<T, AppError>
where
    T: std::str::FromStr + PartialEq + From<u8>,
    T::Err: std::fmt::Display,
{
    match (from_env, from_file) {
        (Some(raw), _) => parse_positive(name, &raw),
        (None, Some(value)) => ensure_positive(name, value),
        (None, None) => Err(missing(name)),
    }
}
