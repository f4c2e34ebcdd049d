pub mod client;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use client::{AbiosClient, DefaultTransport, HttpAbiosClient};
pub use http_client::create_http_client_with_timeout;
// Re-export URL utilities
pub use urls::*;
