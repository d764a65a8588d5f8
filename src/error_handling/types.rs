//! Error type definitions.
//!
//! This module defines the typed errors raised at each stage of a diagnostic
//! and the failure categories counted per resolver.

use std::io;
use std::string::FromUtf8Error;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error reading the system DNS configuration.
    #[error("System DNS configuration error: {0}")]
    DnsConfigError(String),

    /// Error creating the output file.
    #[error("Output file error: {0}")]
    OutputFileError(#[from] io::Error),
}

/// A hostname list could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read.
    #[error("body of {url} could not be read: {source}")]
    Body {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The response body is not valid UTF-8.
    #[error("body of {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// A hostname could not be resolved through a resolver.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Resolution did not finish within the configured bound.
    #[error("resolution of {hostname} timed out")]
    Timeout { hostname: String },

    /// A DNS query against an explicit resolver failed.
    #[error("DNS query for {hostname} failed: {message}")]
    Query { hostname: String, message: String },

    /// The operating system resolver reported an error.
    #[error("system lookup of {hostname} failed: {source}")]
    System {
        hostname: String,
        #[source]
        source: io::Error,
    },
}

/// A heartbeat request failed before a response arrived.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The pinned HTTP client could not be built.
    #[error("heartbeat client could not be built: {0}")]
    Client(#[source] ReqwestError),

    /// The request failed in transport (timeout, refused connection, ...).
    #[error("heartbeat request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Categories of failed lookup attempts.
///
/// Each failed attempt falls into exactly one category; a resolver's report
/// carries the count per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // DNS
    DnsTimeout,
    DnsQueryError,
    DnsNoRecords,
    // Heartbeat transport
    ProbeClientError,
    ProbeTimeout,
    ProbeConnectError,
    ProbeOtherError,
    // Heartbeat answered without a cache marker
    MissingLancacheHeader,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsTimeout => "DNS resolution timeout",
            ErrorType::DnsQueryError => "DNS query error",
            ErrorType::DnsNoRecords => "No DNS records",
            ErrorType::ProbeClientError => "Heartbeat client error",
            ErrorType::ProbeTimeout => "Heartbeat timeout",
            ErrorType::ProbeConnectError => "Heartbeat connect error",
            ErrorType::ProbeOtherError => "Heartbeat request error",
            ErrorType::MissingLancacheHeader => "Missing lancache header",
        }
    }
}
