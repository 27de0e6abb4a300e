//! Fatal analyzer-internal faults.
//!
//! These signal a bug in the analyzer itself (an invariant a component
//! assumed could not be violated), never a defect in the analyzed
//! program. They propagate out of the rule dispatch pass uninterrupted
//! and must not be downgraded to diagnostics.

use thiserror::Error;

/// An analyzer-internal invariant violation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("internal error: {reason}")]
pub struct ShouldNotHappenError {
    reason: String,
}

impl ShouldNotHappenError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
