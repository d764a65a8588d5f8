//! HTTP client initialization.
//!
//! Heartbeat probes build their own pinned clients; this module only covers
//! the client used to download hostname lists.

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client for the hostname catalog.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent naming this tool and its version
/// - Timeout from the configuration
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_catalog_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.catalog_fetch_timeout)
        .user_agent(concat!("lancache-diagnostics/", env!("CARGO_PKG_VERSION")))
        .build()
}
