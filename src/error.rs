use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Upstream status errors
    #[error("abios: too many retries after {attempts} attempts (URL: {url})")]
    TooManyRetries { attempts: u32, url: String },

    #[error("abios: unexpected status {status} (URL: {url})")]
    UnexpectedStatus { status: u16, url: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Caller gave up
    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a server startup/runtime error with context
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create a request construction error
    pub fn request_build(msg: impl Into<String>) -> Self {
        Self::RequestBuild(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a retry exhaustion error (upstream kept answering 429)
    pub fn too_many_retries(attempts: u32, url: impl Into<String>) -> Self {
        Self::TooManyRetries {
            attempts,
            url: url.into(),
        }
    }

    /// Create an error for any non-200 upstream response
    pub fn unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Maps a reqwest failure onto the network error kinds, keeping the URL.
    pub fn from_transport(error: reqwest::Error, url: &str) -> Self {
        if error.is_timeout() {
            Self::network_timeout(url)
        } else if error.is_connect() {
            Self::network_connection(url, error.to_string())
        } else {
            Self::ApiFetch(error)
        }
    }

    /// True when the caller cancelled or the deadline passed
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled | AppError::DeadlineExceeded)
    }

    /// True for connection level failures (never retried)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiFetch(_)
        )
    }

    /// True for decode failures of an otherwise successful response
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// HTTP status observed upstream, when the error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::UnexpectedStatus { status, .. } => Some(*status),
            AppError::TooManyRetries { .. } => Some(429),
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("ABIOS_TOKEN not set");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(error.to_string(), "Configuration error: ABIOS_TOKEN not set");
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_too_many_retries_helper() {
        let error = AppError::too_many_retries(3, "https://api.example.com/series");
        assert!(matches!(error, AppError::TooManyRetries { attempts: 3, .. }));
        assert_eq!(
            error.to_string(),
            "abios: too many retries after 3 attempts (URL: https://api.example.com/series)"
        );
        assert_eq!(error.status_code(), Some(429));
    }

    #[test]
    fn test_unexpected_status_helper() {
        let error = AppError::unexpected_status(503, "https://api.example.com/teams");
        assert!(matches!(error, AppError::UnexpectedStatus { .. }));
        assert_eq!(
            error.to_string(),
            "abios: unexpected status 503 (URL: https://api.example.com/teams)"
        );
        assert_eq!(error.status_code(), Some(503));
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://api.example.com"
        );
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("https://api.example.com", "Connection refused");
        assert!(matches!(error, AppError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: https://api.example.com - Connection refused"
        );
    }

    #[test]
    fn test_decode_helpers() {
        let malformed = AppError::api_malformed_json("Response is not valid JSON", "u");
        let structure = AppError::api_unexpected_structure("missing field `id`", "u");
        let empty = AppError::api_no_data("Response body is empty", "u");

        assert!(malformed.is_decode());
        assert!(structure.is_decode());
        assert!(empty.is_decode());
        assert_eq!(
            structure.to_string(),
            "API returned unexpected data structure: missing field `id` (URL: u)"
        );
    }

    #[test]
    fn test_is_cancellation() {
        assert!(AppError::Cancelled.is_cancellation());
        assert!(AppError::DeadlineExceeded.is_cancellation());

        assert!(!AppError::network_timeout("url").is_cancellation());
        assert!(!AppError::too_many_retries(3, "url").is_cancellation());
    }

    #[test]
    fn test_is_transport() {
        assert!(AppError::network_timeout("url").is_transport());
        assert!(AppError::network_connection("url", "refused").is_transport());

        assert!(!AppError::unexpected_status(500, "url").is_transport());
        assert!(!AppError::Cancelled.is_transport());
        assert!(!AppError::config_error("x").is_transport());
    }

    #[test]
    fn test_status_code_absent_for_non_http_errors() {
        assert_eq!(AppError::Cancelled.status_code(), None);
        assert_eq!(AppError::config_error("x").status_code(), None);
        assert_eq!(AppError::network_timeout("url").status_code(), None);
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::server_error("bind failed"),
            AppError::request_build("bad url"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::too_many_retries(3, "https://example.com"),
            AppError::unexpected_status(404, "https://example.com"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::Cancelled,
            AppError::DeadlineExceeded,
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
