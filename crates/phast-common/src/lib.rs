//! Common types and utilities for the phast static analyzer.
//!
//! This crate provides foundational types used across all phast crates:
//! - Three-valued logic (`TrinaryLogic`) for relational queries whose
//!   answer may be statically undecidable
//! - Rule diagnostics (`RuleError`, `RuleErrorBuilder`)
//! - Fatal analyzer-internal faults (`ShouldNotHappenError`)

// Three-valued logic for static facts
pub mod trinary;
pub use trinary::{LogicError, TrinaryLogic};

// Diagnostics emitted by rules
pub mod diagnostics;
pub use diagnostics::{RuleError, RuleErrorBuilder};

// Analyzer-internal invariant violations
pub mod errors;
pub use errors::ShouldNotHappenError;
