//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (wire details, timeouts, mode defaults)
//! - The CDN catalog
//! - CLI option types and the library configuration

mod catalog;
mod constants;
mod types;

// Re-export all constants
pub use catalog::{Cdn, CDNS};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Mode, Opt};
