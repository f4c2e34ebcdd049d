//! Live esports data from the Abios API
//!
//! Fetches live series, the rosters playing in them and the players and
//! teams behind those rosters, and serves the result over HTTP. Every
//! upstream call passes through a transport chain that authenticates, rate
//! limits and retries throttled requests.
//!
//! # Examples
//!
//! ```rust,no_run
//! use abios_live::data_fetcher::{HttpAbiosClient, RequestContext};
//! use abios_live::service::{AbiosLiveService, LiveService};
//! use abios_live::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::from_env()?;
//!     let service = AbiosLiveService::new(HttpAbiosClient::new(&config)?);
//!
//!     let ctx = RequestContext::new();
//!     for team in service.get_live_teams(&ctx).await? {
//!         println!("{} {}", team.id, team.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod server;
pub mod service;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Player, SeriesDetails, Team};
pub use data_fetcher::{AbiosClient, HttpAbiosClient, RequestContext};
pub use error::AppError;
pub use service::{AbiosLiveService, LiveService};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
