//! The rule contract.

use crate::ast::{Node, SyntaxKind};
use crate::scope::Scope;
use phast_common::{RuleError, ShouldNotHappenError};

/// A single semantic check.
///
/// A rule declares the one node kind it inspects and is invoked with
/// every visited node of that kind plus the current scope. It must be a
/// pure function of its inputs: no rule mutates the scope or the tree.
///
/// Analyzed-program defects come back as `RuleError` values. An `Err`
/// is reserved for analyzer-internal invariant violations (an AST shape
/// the rule's precondition assumed impossible) and aborts the whole
/// dispatch pass.
pub trait Rule {
    /// The node kind this rule wants to inspect.
    fn node_kind(&self) -> SyntaxKind;

    /// Check one node.
    fn process_node(
        &self,
        node: &Node,
        scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError>;
}
