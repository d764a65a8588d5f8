//! Failure statistics for one resolver's batch.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-category counts of failed attempts.
///
/// Every `ErrorType` is initialized to zero on creation. The engine owns one
/// instance per resolver and hands it to the report when the resolver is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Adds every count of `other` to this instance.
    pub fn merge(&mut self, other: &ProcessingStats) {
        for (error, count) in other.nonzero() {
            *self.errors.entry(error).or_insert(0) += count;
        }
    }

    /// Non-zero counts, in `ErrorType` declaration order.
    pub fn nonzero(&self) -> Vec<(ErrorType, usize)> {
        ErrorType::iter()
            .map(|e| (e, self.get_error_count(e)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
