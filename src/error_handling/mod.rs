//! Error handling and failure statistics.
//!
//! This module provides:
//! - Typed errors for initialization, hostname list fetching, resolution and probing
//! - Failure categories (`ErrorType`) and their per-resolver counts
//! - Categorization of resolution and probe errors
//!
//! None of the per-attempt errors abort a run: the engine turns each of them
//! into a failed lookup attempt and a log record.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_probe_error, categorize_reqwest_error, categorize_resolution_error,
};
pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InitializationError, ProbeError, ResolutionError};
