//! DNS resolution.
//!
//! This module provides:
//! - `Resolver`, the tagged choice between the OS resolver and an explicit DNS server
//! - `ResolverSet`, the ordered resolvers a diagnostic runs through
//! - `HostResolver` and its `hickory-resolver` backed implementation
//! - `TransportBinding`, which pins the heartbeat connection to a resolved address

mod resolution;
mod types;

// Re-export public API
pub use resolution::{explicit_resolver, DnsResolver, HostResolver};
pub use types::{InvalidResolver, Resolver, ResolverSet, TransportBinding};
