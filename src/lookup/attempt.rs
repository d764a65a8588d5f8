//! The record produced by one resolution + heartbeat probe.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, Local};

use crate::dns::Resolver;

/// Timestamp layout used when attempts are listed (RFC 822 style).
const ATTEMPT_TIME_FORMAT: &str = "%d %b %y %H:%M %Z";

/// Outcome class of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Failure,
}

/// One resolution and heartbeat outcome.
///
/// Never mutated after creation. `timestamp` is for display only and takes
/// no part in consistency comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupAttempt {
    pub resolver: Resolver,
    pub hostname: String,
    /// Resolved addresses in resolver order; empty when resolution failed
    pub addresses: Vec<IpAddr>,
    /// Value of the lancache marker header; only set on success
    pub container_id: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl LookupAttempt {
    /// Creates an attempt stamped with the current time.
    ///
    /// An empty container id is stored as `None`, so the attempt is a failure.
    pub fn new(
        resolver: Resolver,
        hostname: impl Into<String>,
        addresses: Vec<IpAddr>,
        container_id: Option<String>,
    ) -> Self {
        Self {
            resolver,
            hostname: hostname.into(),
            addresses,
            container_id: container_id.filter(|id| !id.is_empty()),
            timestamp: Local::now(),
        }
    }

    /// Failed attempt for `hostname`.
    pub fn failed(resolver: Resolver, hostname: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self::new(resolver, hostname, addresses, None)
    }

    pub fn classification(&self) -> Classification {
        if self.is_success() {
            Classification::Success
        } else {
            Classification::Failure
        }
    }

    /// Successful iff a non-empty container id was captured.
    pub fn is_success(&self) -> bool {
        self.container_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

impl fmt::Display for LookupAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addresses: Vec<String> = self.addresses.iter().map(IpAddr::to_string).collect();
        write!(
            f,
            "{{resolver: {}, hostname: {}, addresses: [{}], container_id: {}, time: {}}}",
            self.resolver,
            self.hostname,
            addresses.join(" "),
            self.container_id.as_deref().unwrap_or(""),
            self.timestamp.format(ATTEMPT_TIME_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_follows_container_id() {
        let ok = LookupAttempt::new(
            Resolver::System,
            "x.example.com",
            vec!["1.2.3.4".parse().unwrap()],
            Some("node-7".into()),
        );
        assert!(ok.is_success());
        assert_eq!(ok.classification(), Classification::Success);

        let failed = LookupAttempt::failed(Resolver::System, "x.example.com", vec![]);
        assert!(!failed.is_success());
        assert_eq!(failed.classification(), Classification::Failure);
    }

    #[test]
    fn test_empty_container_id_is_failure() {
        let attempt = LookupAttempt::new(
            Resolver::System,
            "x.example.com",
            vec!["1.2.3.4".parse().unwrap()],
            Some(String::new()),
        );
        assert_eq!(attempt.container_id, None);
        assert_eq!(attempt.classification(), Classification::Failure);
    }

    #[test]
    fn test_display_lists_fields() {
        let attempt = LookupAttempt::new(
            Resolver::Explicit("10.0.0.53:53".parse().unwrap()),
            "x.example.com",
            vec!["1.2.3.4".parse().unwrap(), "5.6.7.8".parse().unwrap()],
            Some("node-7".into()),
        );
        let rendered = attempt.to_string();
        assert!(rendered.starts_with(
            "{resolver: 10.0.0.53, hostname: x.example.com, addresses: [1.2.3.4 5.6.7.8], container_id: node-7, time: "
        ));
    }
}
