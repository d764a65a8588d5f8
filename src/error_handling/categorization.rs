//! Error categorization.
//!
//! Maps resolution and probe errors onto the `ErrorType` counted in reports.

use super::types::{ErrorType, ProbeError, ResolutionError};

/// Categorizes a `reqwest::Error` raised by a heartbeat request.
///
/// The probe never follows redirects and never checks the status code, so
/// only transport-level kinds are distinguished.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::ProbeClientError
    } else if error.is_timeout() {
        ErrorType::ProbeTimeout
    } else if error.is_connect() {
        ErrorType::ProbeConnectError
    } else {
        ErrorType::ProbeOtherError
    }
}

/// Categorizes a failed heartbeat request.
pub fn categorize_probe_error(error: &ProbeError) -> ErrorType {
    match error {
        ProbeError::Client(_) => ErrorType::ProbeClientError,
        ProbeError::Request { source, .. } => categorize_reqwest_error(source),
    }
}

/// Categorizes a failed resolution.
pub fn categorize_resolution_error(error: &ResolutionError) -> ErrorType {
    match error {
        ResolutionError::Timeout { .. } => ErrorType::DnsTimeout,
        ResolutionError::Query { .. } | ResolutionError::System { .. } => {
            ErrorType::DnsQueryError
        }
    }
}
