//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - HTTP client for the hostname catalog
//! - Resolver set from the system DNS configuration
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_catalog_client;
pub use logger::init_logger_with;
pub use resolver::{build_resolver_set, discover_nameservers, init_resolver_set};
