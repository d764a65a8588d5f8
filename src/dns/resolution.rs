//! Hostname resolution through the system resolver or an explicit DNS server.
//!
//! Explicit resolvers are queried for AAAA and A records of the fully
//! qualified name, IPv6 answers first. Both queries share one timeout.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use super::types::Resolver;
use crate::error_handling::ResolutionError;

/// Resolves hostnames to addresses.
///
/// An empty `Ok` vector is a valid "no record" outcome; callers record it as a
/// failed attempt and never retry.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(
        &self,
        hostname: &str,
        resolver: &Resolver,
    ) -> Result<Vec<IpAddr>, ResolutionError>;
}

/// `HostResolver` backed by the OS resolver and `hickory-resolver`.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(
        &self,
        hostname: &str,
        resolver: &Resolver,
    ) -> Result<Vec<IpAddr>, ResolutionError> {
        // Literal addresses need no round-trip.
        if let Ok(ip) = hostname.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let lookup = async {
            match resolver {
                Resolver::System => lookup_system(hostname).await,
                Resolver::Explicit(addr) => lookup_explicit(hostname, *addr, self.timeout).await,
            }
        };

        tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolutionError::Timeout {
                hostname: hostname.to_string(),
            })?
    }
}

async fn lookup_system(hostname: &str) -> Result<Vec<IpAddr>, ResolutionError> {
    let addrs = tokio::net::lookup_host((hostname, 0))
        .await
        .map_err(|source| ResolutionError::System {
            hostname: hostname.to_string(),
            source,
        })?;

    let mut ips: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        if !ips.contains(&addr.ip()) {
            ips.push(addr.ip());
        }
    }
    debug!("system resolver: {hostname} -> {ips:?}");
    Ok(ips)
}

/// Builds a resolver that talks to `nameserver` only, without caching.
///
/// Caching is disabled so repeated iterations each reach the server.
pub fn explicit_resolver(nameserver: SocketAddr, timeout: Duration) -> TokioAsyncResolver {
    let group = NameServerConfigGroup::from_ips_clear(&[nameserver.ip()], nameserver.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], group);

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    TokioAsyncResolver::tokio(config, opts)
}

async fn lookup_explicit(
    hostname: &str,
    nameserver: SocketAddr,
    timeout: Duration,
) -> Result<Vec<IpAddr>, ResolutionError> {
    let resolver = explicit_resolver(nameserver, timeout);
    let fqdn = fully_qualified(hostname);

    let v6 = query_addresses(&resolver, &fqdn, RecordType::AAAA).await;
    let v4 = query_addresses(&resolver, &fqdn, RecordType::A).await;

    match (v6, v4) {
        (Ok(mut v6), Ok(v4)) => {
            v6.extend(v4);
            debug!("resolver {nameserver}: {hostname} -> {v6:?}");
            Ok(v6)
        }
        (Ok(found), Err(e)) | (Err(e), Ok(found)) if !found.is_empty() => {
            debug!("resolver {nameserver}: one query for {hostname} failed ({e}), using {found:?}");
            Ok(found)
        }
        (Ok(_), Err(e)) | (Err(e), Ok(_)) | (Err(e), Err(_)) => Err(ResolutionError::Query {
            hostname: hostname.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Runs one record query; "no records" is an empty answer rather than an error.
async fn query_addresses(
    resolver: &TokioAsyncResolver,
    fqdn: &str,
    record_type: RecordType,
) -> Result<Vec<IpAddr>, ResolveError> {
    match resolver.lookup(fqdn, record_type).await {
        Ok(lookup) => Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                RData::A(a) => Some(IpAddr::V4(a.0)),
                _ => None,
            })
            .collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// NOERROR without records or NXDOMAIN. hickory also reports SERVFAIL and
/// REFUSED as "no records", and those are hard failures.
fn is_empty_answer(error: &ResolveError) -> bool {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            matches!(*response_code, ResponseCode::NoError | ResponseCode::NXDomain)
        }
        _ => false,
    }
}

pub(super) fn fully_qualified(hostname: &str) -> String {
    if hostname.ends_with('.') {
        hostname.to_string()
    } else {
        format!("{hostname}.")
    }
}
