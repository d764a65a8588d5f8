//! Resolver set initialization.
//!
//! Reads the nameservers of the system DNS configuration (`/etc/resolv.conf`
//! on Unix) and combines them with the resolvers given on the command line.

use std::net::SocketAddr;

use log::{debug, warn};

use crate::config::RESOLV_CONF;
use crate::dns::{Resolver, ResolverSet};
use crate::error_handling::InitializationError;

/// Nameservers listed in the system DNS configuration, in file order.
///
/// hickory lists each nameserver once per protocol; duplicates are dropped.
///
/// # Errors
///
/// Returns `InitializationError::DnsConfigError` if the configuration cannot be read.
pub fn discover_nameservers() -> Result<Vec<SocketAddr>, InitializationError> {
    let (config, _opts) = hickory_resolver::system_conf::read_system_conf()
        .map_err(|e| InitializationError::DnsConfigError(format!("{RESOLV_CONF}: {e}")))?;

    let mut nameservers: Vec<SocketAddr> = Vec::new();
    for server in config.name_servers() {
        if !nameservers.contains(&server.socket_addr) {
            nameservers.push(server.socket_addr);
        }
    }
    debug!("system nameservers: {nameservers:?}");
    Ok(nameservers)
}

/// Resolver set for discovered `nameservers` plus the `extra` resolvers.
pub fn build_resolver_set(
    nameservers: &[SocketAddr],
    extra: impl IntoIterator<Item = Resolver>,
) -> ResolverSet {
    ResolverSet::from_nameservers(nameservers).with_explicit(extra)
}

/// Discovers the system nameservers and builds the resolver set.
///
/// Discovery failures are logged and degrade to the system resolver plus `extra`.
/// Returns the set and the discovered nameservers, for reporting.
pub fn init_resolver_set(extra: Vec<Resolver>) -> (ResolverSet, Vec<SocketAddr>) {
    let nameservers = match discover_nameservers() {
        Ok(nameservers) => nameservers,
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    };
    (build_resolver_set(&nameservers, extra), nameservers)
}
