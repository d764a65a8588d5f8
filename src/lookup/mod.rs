//! Lookup attempts, the lookup engine and consistency checking.
//!
//! An attempt is one resolution followed by one heartbeat probe. The engine
//! collects attempts per resolver and asks the consistency checker whether
//! they all behaved the same way.

mod attempt;
mod consistency;
mod engine;

// Re-export public API
pub use attempt::{Classification, LookupAttempt};
pub use consistency::{attempts_agree, consistency_delta, ComparisonScope};
pub use engine::{LookupEngine, LookupScope, ResolverReport, ResolverVerdict};
