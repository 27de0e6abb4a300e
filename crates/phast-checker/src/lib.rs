//! Rule dispatch engine and rule catalog for the phast static analyzer.
//!
//! This crate ties the substrate together:
//! - `ast` - the syntax-node contract consumed from the external parser
//! - `scope` - the per-node type environment built by the external
//!   abstract-interpretation pass
//! - `rule` - the rule contract: a pure function from (node, scope) to
//!   diagnostics
//! - `registry` - the dispatch engine matching nodes to interested rules
//! - `helper` - the shared type-resolution pattern rules use to handle
//!   unknown classes uniformly
//! - `case_sensitivity` - casing-mismatch detection against canonical
//!   declared names
//! - `rules` - the concrete rule catalog

pub mod ast;
pub mod case_sensitivity;
pub mod helper;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod scope;

pub use ast::{BinaryOpKind, ComparisonOp, Name, Node, NodeId, NodeKind, SyntaxKind, UseKind};
pub use case_sensitivity::{ClassCaseSensitivityCheck, ClassNameNodePair};
pub use helper::{FoundTypeResult, RuleLevelHelper};
pub use registry::RuleRegistry;
pub use rule::Rule;
pub use scope::{Scope, ScopeBuilder};
