//! Offset-existence checking for index accesses.

use crate::ast::{Node, NodeKind, SyntaxKind};
use crate::helper::{RuleLevelHelper, constant_arrays};
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder, ShouldNotHappenError};
use phast_solver::{Type, VerbosityLevel, flatten_types};

/// Reports index accesses on non-offset-accessible values and accesses
/// at offsets a known array shape definitely lacks.
///
/// With `report_maybes` enabled, possible violations (the relation
/// answers `Maybe` with at least one concrete member shape definitively
/// lacking the offset) are reported as well.
pub struct NonexistentOffsetRule<'a> {
    helper: RuleLevelHelper<'a>,
    report_maybes: bool,
}

impl<'a> NonexistentOffsetRule<'a> {
    pub fn new(helper: RuleLevelHelper<'a>, report_maybes: bool) -> Self {
        Self {
            helper,
            report_maybes,
        }
    }
}

impl Rule for NonexistentOffsetRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::OffsetAccess
    }

    fn process_node(
        &self,
        node: &Node,
        scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::OffsetAccess { base, index } = &node.kind else {
            return Err(ShouldNotHappenError::new(
                "offset rule dispatched on a non-offset node",
            ));
        };

        let dim_type = index.as_deref().map(|index| scope.get_type(index));
        let unknown_class_pattern = match dim_type {
            Some(dim) => format!(
                "Access to offset {} on an unknown class {{0}}.",
                dim.describe(VerbosityLevel::Value)
            ),
            None => "Access to an offset on an unknown class {0}.".to_string(),
        };

        let accessible_result = self.helper.find_type_to_check(
            scope,
            base,
            &unknown_class_pattern,
            |ty| ty.is_offset_accessible().is_yes(),
        );
        if accessible_result.is_error() {
            return Ok(accessible_result.into_unknown_class_errors());
        }
        let accessible_type = accessible_result.get_type();
        let is_offset_accessible = accessible_type.is_offset_accessible();

        // The language auto-vivifies offsets on the target of an in-place
        // assignment; nothing to report there.
        if scope.is_in_expression_assign(node) && is_offset_accessible.is_yes() {
            return Ok(Vec::new());
        }

        if !is_offset_accessible.is_yes() {
            if is_offset_accessible.is_no() || self.report_maybes {
                let message = match dim_type {
                    Some(dim) => format!(
                        "Cannot access offset {} on {}.",
                        dim.describe(VerbosityLevel::Value),
                        accessible_type.describe(VerbosityLevel::Value)
                    ),
                    None => format!(
                        "Cannot access an offset on {}.",
                        accessible_type.describe(VerbosityLevel::TypeOnly)
                    ),
                };
                return Ok(vec![
                    RuleErrorBuilder::message(message)
                        .line(node.line)
                        .identifier("offsetAccess.nonOffsetAccessible")
                        .build(),
                ]);
            }
            return Ok(Vec::new());
        }

        let Some(dim_type) = dim_type else {
            return Ok(Vec::new());
        };

        let result = self
            .helper
            .find_type_to_check(scope, base, &unknown_class_pattern, |ty| {
                ty.has_offset_value_type(dim_type).is_yes()
            });
        if result.is_error() {
            return Ok(result.into_unknown_class_errors());
        }
        let base_type = result.get_type();

        let has_offset = base_type.has_offset_value_type(dim_type);
        let mut report = has_offset.is_no();

        if has_offset.is_maybe() {
            // A union answered Maybe; a concretely-known member shape that
            // definitively lacks the offset is still worth reporting.
            for constant_array in constant_arrays(base_type) {
                if constant_array.has_offset_value_type(dim_type).is_no() {
                    report = true;
                    break;
                }
            }
        }

        if !report && self.report_maybes {
            'members: for inner_type in flatten_types(base_type) {
                if matches!(dim_type, Type::Union(_) | Type::BenevolentUnion(_)) {
                    if inner_type.has_offset_value_type(dim_type).is_no() {
                        report = true;
                        break;
                    }
                    continue;
                }
                for inner_dim in flatten_types(dim_type) {
                    if inner_type.has_offset_value_type(inner_dim).is_no() {
                        report = true;
                        break 'members;
                    }
                }
            }
        }

        if report {
            return Ok(vec![
                RuleErrorBuilder::message(format!(
                    "Offset {} does not exist on {}.",
                    dim_type.describe(VerbosityLevel::Value),
                    base_type.describe(VerbosityLevel::Value)
                ))
                .line(node.line)
                .identifier("offsetAccess.notFound")
                .build(),
            ]);
        }

        Ok(Vec::new())
    }
}
