//! Comparison-validity checking for binary operations.

use crate::ast::{BinaryOpKind, Node, NodeKind, SyntaxKind};
use crate::helper::RuleLevelHelper;
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder, ShouldNotHappenError};
use phast_solver::{Type, VerbosityLevel, union_types};

/// Reports loose comparisons between a number and an object or array,
/// which the language evaluates to an error at runtime.
pub struct InvalidComparisonRule<'a> {
    helper: RuleLevelHelper<'a>,
}

impl<'a> InvalidComparisonRule<'a> {
    pub fn new(helper: RuleLevelHelper<'a>) -> Self {
        Self { helper }
    }

    fn is_number_type(&self, scope: &Scope, expr: &Node) -> bool {
        let accepted_type = union_types(vec![Type::Integer, Type::Float]);
        let result = self.helper.find_type_to_check(scope, expr, "", |ty| {
            accepted_type.accepts(ty, true).is_yes()
        });
        let ty = result.get_type();
        // Narrowing changed the type: the expression holds more than
        // numbers, so stay quiet.
        if ty.is_error() || !ty.equals(scope.get_type(expr)) {
            return false;
        }
        !accepted_type.is_super_type_of(ty).is_no()
    }

    fn is_object_type(&self, scope: &Scope, expr: &Node) -> bool {
        let accepted_type = Type::any_object();
        let result = self.helper.find_type_to_check(scope, expr, "", |ty| {
            accepted_type.is_super_type_of(ty).is_yes()
        });
        let ty = result.get_type();
        if ty.is_error() {
            return false;
        }
        let is_super_type = accepted_type.is_super_type_of(ty);
        if matches!(ty, Type::BenevolentUnion(_)) {
            // Benevolent unions reflect the language's loose semantics:
            // only a definite non-object stays quiet.
            !is_super_type.is_no()
        } else {
            is_super_type.is_yes()
        }
    }

    fn is_array_type(&self, scope: &Scope, expr: &Node) -> bool {
        let result = self
            .helper
            .find_type_to_check(scope, expr, "", |ty| ty.is_array().is_yes());
        let ty = result.get_type();
        !ty.is_error() && ty.is_array().is_yes()
    }
}

impl Rule for InvalidComparisonRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::BinaryOp
    }

    fn process_node(
        &self,
        node: &Node,
        scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::BinaryOp { op, left, right } = &node.kind else {
            return Err(ShouldNotHappenError::new(
                "comparison rule dispatched on a non-binary node",
            ));
        };
        let BinaryOpKind::Comparison(comparison) = op else {
            return Ok(Vec::new());
        };

        let invalid = (self.is_number_type(scope, left)
            && (self.is_object_type(scope, right) || self.is_array_type(scope, right)))
            || (self.is_number_type(scope, right)
                && (self.is_object_type(scope, left) || self.is_array_type(scope, left)));
        if !invalid {
            return Ok(Vec::new());
        }

        Ok(vec![
            RuleErrorBuilder::message(format!(
                "Comparison operation \"{}\" between {} and {} results in an error.",
                comparison.sigil(),
                scope.get_type(left).describe(VerbosityLevel::Value),
                scope.get_type(right).describe(VerbosityLevel::Value)
            ))
            .line(left.line)
            .identifier("comparison.invalid")
            .build(),
        ])
    }
}
