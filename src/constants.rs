//! Application-wide constants and configuration values
//!
//! This module centralizes protocol constants and tuning values so the
//! transport, server and configuration layers agree on them.

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default address the HTTP boundary listens on
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Seconds in-flight requests get to finish after a shutdown signal
pub const SHUTDOWN_GRACE_SECONDS: u64 = 10;

/// Seconds cancelled requests get to answer before the server task is aborted
pub const CANCELLED_REQUEST_GRACE_SECONDS: u64 = 1;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "abios_live.log";

/// Upstream (Abios) API protocol constants
pub mod upstream {
    /// Header carrying the shared secret on every outbound request
    pub const AUTH_HEADER: &str = "Abios-Secret";

    /// Query parameter holding filter expressions
    pub const FILTER_PARAM: &str = "filter";

    /// Filter selecting series in the live lifecycle state
    pub const LIVE_SERIES_FILTER: &str = "lifecycle=live";

    /// Resource paths
    pub const SERIES_PATH: &str = "series";
    pub const ROSTERS_PATH: &str = "rosters";
    pub const TEAMS_PATH: &str = "teams";
    pub const PLAYERS_PATH: &str = "players";
}

/// Retry configuration for upstream throttling (HTTP 429)
pub mod retry {
    /// Maximum number of attempts per request, the first one included
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Wait used when Retry-After is missing or unparsable (seconds)
    pub const DEFAULT_RETRY_AFTER_SECONDS: u64 = 1;
}

/// Global limiter in front of the inbound HTTP routes
pub mod inbound {
    /// Sustained requests per second
    pub const REQUESTS_PER_SECOND: u32 = 5;

    /// Burst capacity
    pub const BURST: u32 = 10;
}

/// Environment variable names
pub mod env_vars {
    /// Upstream API base URL (required)
    pub const API_BASE_URL: &str = "ABIOS_API_BASE_URL";

    /// Shared secret sent in the auth header (required)
    pub const TOKEN: &str = "ABIOS_TOKEN";

    /// Per-request timeout in seconds (required)
    pub const REQUEST_TIMEOUT_SECONDS: &str = "ABIOS_CLIENT_REQ_TIMEOUT_SEC";

    /// Outbound limiter rate in requests per second (required)
    pub const RATE_LIMIT_PER_SECOND: &str = "ABIOS_CLIENT_RATE_LIMIT_PERSEC";

    /// Outbound limiter burst size (required)
    pub const RATE_LIMIT_BURST: &str = "ABIOS_CLIENT_RATE_LIMIT_BURST";

    /// Log file path override (optional)
    pub const LOG_FILE: &str = "ABIOS_LOG_FILE";
}
