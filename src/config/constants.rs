//! Configuration constants.
//!
//! This module defines the fixed wire details of the heartbeat diagnostic
//! (path, header, ports) and the defaults used by each diagnostics mode.

use std::time::Duration;

// Heartbeat wire contract
/// Path served by every lancache instance for presence checks.
pub const HEARTBEAT_PATH: &str = "/lancache-heartbeat";
/// Response header carrying the identifier of the cache container that served the request.
pub const LANCACHE_HEADER: &str = "X-Lancache-Processed-By";
/// Port the heartbeat probe always dials.
pub const HTTP_PORT: u16 = 80;
/// Port explicit resolvers are queried on unless an identifier names another one.
pub const DNS_PORT: u16 = 53;

// Hostname list rewriting
/// Marker that opens a wildcard entry in a cache-domains list.
pub const WILDCARD_PREFIX: &str = "*.";
/// Concrete subdomain substituted for the wildcard marker.
pub const TEST_PREFIX: &str = "lancachetest.";
/// Comment marker in cache-domains lists.
pub const COMMENT_PREFIX: &str = "#";

// Network operation timeouts
/// DNS resolution timeout (both queries of one resolution share it)
pub const DNS_TIMEOUT: Duration = Duration::from_secs(1);
/// Heartbeat probe timeout
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);
/// Timeout for downloading a hostname list from the catalog
pub const CATALOG_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Catalog
/// Raw base URL of the uklans cache-domains repository.
pub const CACHE_DOMAINS_BASE_URL: &str =
    "https://raw.githubusercontent.com/uklans/cache-domains/master/";

// Modes
/// Host probed by simple diagnostics.
pub const SIMPLE_TARGET_HOST: &str = "lancache.steamcontent.com";
/// Iterations run by simple diagnostics.
pub const SIMPLE_ITERATIONS: usize = 6;
/// Iterations run per CDN by full and custom diagnostics.
pub const CDN_ITERATIONS: usize = 1;

// Local environment
pub const DEFAULT_OUTPUT_FILE: &str = "diagnostics.txt";
pub const RESOLV_CONF: &str = "/etc/resolv.conf";
/// Label used for the operating system resolver in identifiers and reports.
pub const SYSTEM_RESOLVER: &str = "system";
