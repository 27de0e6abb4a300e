//! The rule dispatch engine.
//!
//! Holds the registered rules, indexed by the single node kind each one
//! declares, and drives a pre-order pass over the tree: for every node,
//! all rules registered for that exact kind run with `(node, scope)` and
//! their diagnostics are concatenated in traversal order.
//!
//! A rule returning `ShouldNotHappenError` aborts the pass via `?` - it
//! signals an unhandled case in the analyzer itself, never downgraded to
//! a diagnostic.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ast::{Node, SyntaxKind};
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, ShouldNotHappenError};

/// The set of registered rules, ready to analyze units.
///
/// Rules may borrow the reflection layer, so the registry is bounded by
/// the symbol table's lifetime.
pub struct RuleRegistry<'a> {
    rules: Vec<Box<dyn Rule + 'a>>,
    by_kind: FxHashMap<SyntaxKind, Vec<usize>>,
}

impl<'a> RuleRegistry<'a> {
    /// Index `rules` by declared node kind; registration order is
    /// preserved within a kind.
    pub fn new(rules: Vec<Box<dyn Rule + 'a>>) -> Self {
        let mut by_kind: FxHashMap<SyntaxKind, Vec<usize>> = FxHashMap::default();
        for (index, rule) in rules.iter().enumerate() {
            by_kind.entry(rule.node_kind()).or_default().push(index);
        }
        Self { rules, by_kind }
    }

    /// Analyze one unit: visit the tree rooted at `root` pre-order and
    /// collect every diagnostic in traversal order.
    pub fn process_unit(
        &self,
        root: &Node,
        scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let mut errors = Vec::new();
        self.visit(root, scope, &mut errors)?;
        Ok(errors)
    }

    fn visit(
        &self,
        node: &Node,
        scope: &Scope,
        errors: &mut Vec<RuleError>,
    ) -> Result<(), ShouldNotHappenError> {
        let kind = node.syntax_kind();
        if let Some(indices) = self.by_kind.get(&kind) {
            trace!(?kind, line = node.line, rules = indices.len(), "dispatching node");
            for &index in indices {
                errors.extend(self.rules[index].process_node(node, scope)?);
            }
        }
        for child in node.children() {
            self.visit(child, scope, errors)?;
        }
        Ok(())
    }
}
