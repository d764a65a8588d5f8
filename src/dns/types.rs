//! Resolver identifiers, resolver sets and transport bindings.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::config::{DNS_PORT, SYSTEM_RESOLVER};

/// Where a hostname is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolver {
    /// The operating system's default resolution mechanism
    System,
    /// A DNS server queried directly
    Explicit(SocketAddr),
}

/// A resolver identifier that is neither `system` nor an address.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid resolver {0:?}: expected \"system\", an IP address or IP:PORT")]
pub struct InvalidResolver(pub String);

impl Resolver {
    /// Parses `system`, `IP` or `IP:PORT`; a bare IP is queried on `default_port`.
    pub fn parse_with_port(input: &str, default_port: u16) -> Result<Self, InvalidResolver> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(SYSTEM_RESOLVER) {
            return Ok(Resolver::System);
        }
        if let Ok(addr) = input.parse::<SocketAddr>() {
            return Ok(Resolver::Explicit(addr));
        }
        input
            .parse::<IpAddr>()
            .map(|ip| Resolver::Explicit(SocketAddr::new(ip, default_port)))
            .map_err(|_| InvalidResolver(input.to_string()))
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Resolver::System)
    }
}

impl FromStr for Resolver {
    type Err = InvalidResolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolver::parse_with_port(s, DNS_PORT)
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::System => f.write_str(SYSTEM_RESOLVER),
            Resolver::Explicit(addr) if addr.port() == DNS_PORT => write!(f, "{}", addr.ip()),
            Resolver::Explicit(addr) => write!(f, "{addr}"),
        }
    }
}

/// Ordered resolvers a diagnostic iterates; `System` always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSet {
    resolvers: Vec<Resolver>,
}

impl Default for ResolverSet {
    fn default() -> Self {
        Self::system_only()
    }
}

impl ResolverSet {
    pub fn system_only() -> Self {
        Self {
            resolvers: vec![Resolver::System],
        }
    }

    /// Builds the set from the nameservers the host is configured with.
    ///
    /// A single configured nameserver is what `System` already goes through,
    /// so it is only probed separately when there are at least two.
    pub fn from_nameservers(nameservers: &[SocketAddr]) -> Self {
        let mut set = Self::system_only();
        if nameservers.len() > 1 {
            set.resolvers
                .extend(nameservers.iter().copied().map(Resolver::Explicit));
        }
        set
    }

    /// Appends resolvers after the ones already present. `System` entries are skipped.
    pub fn with_explicit<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = Resolver>,
    {
        self.resolvers
            .extend(extra.into_iter().filter(|r| !r.is_system()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resolver> {
        self.resolvers.iter()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

/// Forces an HTTP connection for `host` to dial `target`, bypassing name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportBinding {
    pub host: String,
    pub target: SocketAddr,
}

impl TransportBinding {
    /// Pins `host` to the first of `addresses` on `port`; `None` when nothing resolved.
    pub fn pin(host: &str, addresses: &[IpAddr], port: u16) -> Option<Self> {
        addresses.first().map(|ip| TransportBinding {
            host: host.to_string(),
            target: SocketAddr::new(*ip, port),
        })
    }
}
