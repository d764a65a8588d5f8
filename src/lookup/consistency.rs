//! Consistency checking over a batch of lookup attempts.
//!
//! The first attempt of a batch is the reference. Every attempt is compared
//! with it field by field, ignoring the timestamp and, for batches spanning
//! several hostnames, the hostname. Attempts that differ form the delta.

use super::attempt::LookupAttempt;

/// Which fields take part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonScope {
    /// Repeated probes of one hostname: the hostname is compared too.
    SingleHost,
    /// Probes of many hostnames: the hostname is ignored.
    MultiHost,
}

/// True when `a` and `b` agree once normalized for `scope`.
pub fn attempts_agree(a: &LookupAttempt, b: &LookupAttempt, scope: ComparisonScope) -> bool {
    let hostname_agrees = match scope {
        ComparisonScope::SingleHost => a.hostname == b.hostname,
        ComparisonScope::MultiHost => true,
    };

    hostname_agrees
        && a.resolver == b.resolver
        && a.addresses == b.addresses
        && a.container_id == b.container_id
}

/// Attempts of `batch` that disagree with its first attempt, in batch order.
///
/// Returned records are the original, unnormalized attempts. An empty result
/// means every attempt agrees with the reference; an empty batch is trivially
/// consistent.
pub fn consistency_delta(batch: &[LookupAttempt], scope: ComparisonScope) -> Vec<LookupAttempt> {
    let Some(reference) = batch.first() else {
        return Vec::new();
    };

    batch
        .iter()
        .filter(|attempt| !attempts_agree(attempt, reference, scope))
        .cloned()
        .collect()
}
