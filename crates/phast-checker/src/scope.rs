//! The per-node type environment.
//!
//! A `Scope` maps expression nodes to their statically-inferred types and
//! answers positional predicates ("is this node the target of an
//! in-place array assignment"). It is populated by the external
//! abstract-interpretation pass, valid only for the single unit it was
//! built for, and never shared across units.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::ast::{Node, NodeId};
use phast_solver::Type;

static MIXED: Type = Type::Mixed;

/// Read-only type environment for one analyzed unit.
#[derive(Debug, Default)]
pub struct Scope {
    types: FxHashMap<NodeId, Type>,
    expression_assign: FxHashSet<NodeId>,
}

impl Scope {
    /// The statically-inferred type of `node`.
    ///
    /// Untracked nodes answer `mixed` - the dynamic default for an
    /// expression the inference pass knew nothing about.
    pub fn get_type(&self, node: &Node) -> &Type {
        self.types.get(&node.id).unwrap_or(&MIXED)
    }

    /// Whether `node` is the base of an in-place (compound) assignment,
    /// where the language auto-vivifies offsets.
    pub fn is_in_expression_assign(&self, node: &Node) -> bool {
        self.expression_assign.contains(&node.id)
    }
}

/// Builder used by the inference pass (and tests) to populate a scope.
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    scope: Scope,
}

impl ScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, id: NodeId, ty: Type) -> Self {
        self.scope.types.insert(id, ty);
        self
    }

    #[must_use]
    pub fn with_expression_assign(mut self, id: NodeId) -> Self {
        self.scope.expression_assign.insert(id);
        self
    }

    #[must_use]
    pub fn build(self) -> Scope {
        self.scope
    }
}
