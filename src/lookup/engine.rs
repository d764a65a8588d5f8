//! The lookup engine.
//!
//! Runs resolvers × iterations × hostnames strictly in sequence, resolving
//! and probing each hostname, and reduces every resolver's attempts to a
//! `ResolverReport`. Resolvers are isolated from each other: accumulators are
//! reset per resolver so a report can single out one broken resolver.

use log::{debug, info, warn};

use super::attempt::LookupAttempt;
use super::consistency::{consistency_delta, ComparisonScope};
use crate::config::Config;
use crate::dns::{DnsResolver, HostResolver, Resolver, ResolverSet, TransportBinding};
use crate::error_handling::{categorize_resolution_error, ErrorType, ProcessingStats};
use crate::probe::{HeartbeatProber, ProbeResult};

/// Hostnames a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupScope {
    /// One target host, probed every iteration
    Host(String),
    /// Every entry of a hostname list, probed every iteration
    Hostnames(Vec<String>),
}

impl LookupScope {
    pub fn hostnames(&self) -> &[String] {
        match self {
            LookupScope::Host(host) => std::slice::from_ref(host),
            LookupScope::Hostnames(hostnames) => hostnames,
        }
    }

    pub fn is_single_host(&self) -> bool {
        matches!(self, LookupScope::Host(_))
    }

    fn comparison(&self) -> ComparisonScope {
        match self {
            LookupScope::Host(_) => ComparisonScope::SingleHost,
            LookupScope::Hostnames(_) => ComparisonScope::MultiHost,
        }
    }
}

/// What one resolver's batch showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverVerdict {
    /// Not a single attempt reached a lancache instance.
    NoCacheDetected,
    /// Every attempt agreed with the first one.
    Consistent,
    /// Some attempts disagreed with the first one.
    Inconsistent { delta: Vec<LookupAttempt> },
}

impl ResolverVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            ResolverVerdict::NoCacheDetected => "no cache detected",
            ResolverVerdict::Consistent => "consistent",
            ResolverVerdict::Inconsistent { .. } => "inconsistent",
        }
    }
}

/// Summary of one resolver's iterations.
#[derive(Debug, Clone)]
pub struct ResolverReport {
    pub resolver: Resolver,
    pub iterations: usize,
    pub host_count: usize,
    pub single_host: bool,
    pub successes: Vec<LookupAttempt>,
    pub failures: Vec<LookupAttempt>,
    pub verdict: ResolverVerdict,
    pub stats: ProcessingStats,
}

impl ResolverReport {
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Attempts that disagreed with the batch reference; empty unless inconsistent.
    pub fn delta(&self) -> &[LookupAttempt] {
        match &self.verdict {
            ResolverVerdict::Inconsistent { delta } => delta,
            _ => &[],
        }
    }
}

/// Resolves and probes hostnames through a `HostResolver`.
#[derive(Debug, Clone)]
pub struct LookupEngine<R> {
    resolver: R,
    prober: HeartbeatProber,
}

impl LookupEngine<DnsResolver> {
    /// Engine backed by real DNS, with timeouts and ports from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DnsResolver::new(config.dns_timeout),
            HeartbeatProber::from_config(config),
        )
    }
}

impl<R: HostResolver> LookupEngine<R> {
    pub fn new(resolver: R, prober: HeartbeatProber) -> Self {
        Self { resolver, prober }
    }

    /// Resolves `hostname` through `resolver`, then probes the first address.
    ///
    /// Never fails: resolution errors and empty answers become failed attempts.
    pub async fn lookup(&self, hostname: &str, resolver: &Resolver) -> ProbeResult {
        let addresses = match self.resolver.resolve(hostname, resolver).await {
            Ok(addresses) => addresses,
            Err(e) => {
                warn!("Could not get IPs: {e}");
                return ProbeResult {
                    attempt: LookupAttempt::failed(*resolver, hostname, Vec::new()),
                    failure: Some(categorize_resolution_error(&e)),
                };
            }
        };

        let Some(binding) = TransportBinding::pin(hostname, &addresses, self.prober.port()) else {
            debug!("{hostname}: no records via {resolver}");
            return ProbeResult {
                attempt: LookupAttempt::failed(*resolver, hostname, addresses),
                failure: Some(ErrorType::DnsNoRecords),
            };
        };

        self.prober
            .probe(hostname, resolver, addresses, Some(&binding))
            .await
    }

    /// Runs `iterations` passes over `scope` for every resolver in `resolvers`.
    pub async fn run(
        &self,
        scope: &LookupScope,
        iterations: usize,
        resolvers: &ResolverSet,
    ) -> Vec<ResolverReport> {
        let mut reports = Vec::with_capacity(resolvers.len());
        for resolver in resolvers.iter() {
            reports.push(self.run_resolver(scope, iterations, resolver).await);
        }
        reports
    }

    async fn run_resolver(
        &self,
        scope: &LookupScope,
        iterations: usize,
        resolver: &Resolver,
    ) -> ResolverReport {
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        let mut stats = ProcessingStats::new();

        for iteration in 0..iterations {
            debug!(
                "resolver {resolver}: iteration {}/{iterations} over {} host(s)",
                iteration + 1,
                scope.hostnames().len()
            );
            for hostname in scope.hostnames() {
                let result = self.lookup(hostname, resolver).await;
                if let Some(failure) = result.failure {
                    stats.increment_error(failure);
                }
                if result.attempt.is_success() {
                    successes.push(result.attempt);
                } else {
                    failures.push(result.attempt);
                }
            }
        }

        let verdict = if successes.is_empty() {
            ResolverVerdict::NoCacheDetected
        } else {
            let batch: Vec<LookupAttempt> =
                successes.iter().chain(failures.iter()).cloned().collect();
            let delta = consistency_delta(&batch, scope.comparison());
            if delta.is_empty() {
                ResolverVerdict::Consistent
            } else {
                ResolverVerdict::Inconsistent { delta }
            }
        };

        info!(
            "resolver {resolver}: {} succeeded, {} failed, {}",
            successes.len(),
            failures.len(),
            verdict.label()
        );

        ResolverReport {
            resolver: *resolver,
            iterations,
            host_count: scope.hostnames().len(),
            single_host: scope.is_single_host(),
            successes,
            failures,
            verdict,
            stats,
        }
    }
}
