use crate::error::AppError;
use reqwest::Url;
use reqwest::header::HeaderValue;
use std::str::FromStr;

/// Validates the upstream base URL.
///
/// # Validation Rules
/// - Cannot be empty
/// - Must parse as an absolute URL
/// - Scheme must be http or https
pub fn validate_base_url(name: &str, raw: &str) -> Result<(), AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    let url = Url::parse(raw)
        .map_err(|e| AppError::config_error(format!("invalid {name} '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::config_error(format!(
            "invalid {name}: unsupported scheme '{other}'"
        ))),
    }
}

/// Validates the shared secret. It must be non-empty and usable as a header value.
pub fn validate_token(name: &str, token: &str) -> Result<(), AppError> {
    if token.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    HeaderValue::from_str(token)
        .map_err(|_| AppError::config_error(format!("{name} contains invalid characters")))?;
    Ok(())
}

/// Parses a strictly positive integer setting.
///
/// Zero, negative numbers and non-numeric input are all configuration errors
/// naming the offending variable.
pub fn parse_positive<T>(name: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr + PartialEq + From<u8>,
    T::Err: std::fmt::Display,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| AppError::config_error(format!("invalid {name}: {e}")))?;
    ensure_positive(name, value)
}

/// Rejects zero for a numeric setting that came from a typed source (TOML).
pub fn ensure_positive<T>(name: &str, value: T) -> Result<T, AppError>
where
    T: PartialEq + From<u8>,
{
    if value == T::from(0) {
        return Err(AppError::config_error(format!(
            "invalid {name}: must be greater than zero"
        )));
    }
    Ok(value)
}

/// Validates an optional log file path: when present it cannot be empty.
pub fn validate_log_file_path(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }
    Ok(())
}
