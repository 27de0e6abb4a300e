//! Existence and casing checks on use declarations.

use crate::ast::{Node, NodeKind, SyntaxKind, UseKind};
use crate::case_sensitivity::{ClassCaseSensitivityCheck, ClassNameNodePair};
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder, ShouldNotHappenError};
use phast_reflection::ReflectionProvider;

/// Reports use declarations importing names reflection cannot resolve,
/// and known names spelled with the wrong case.
pub struct ExistingNamesInUseRule<'a> {
    provider: ReflectionProvider<'a>,
    case_check: ClassCaseSensitivityCheck<'a>,
    check_function_name_case: bool,
}

impl<'a> ExistingNamesInUseRule<'a> {
    pub fn new(
        provider: ReflectionProvider<'a>,
        case_check: ClassCaseSensitivityCheck<'a>,
        check_function_name_case: bool,
    ) -> Self {
        Self {
            provider,
            case_check,
            check_function_name_case,
        }
    }

    fn check_constants(&self, uses: &[crate::ast::Name]) -> Vec<RuleError> {
        let mut errors = Vec::new();
        for name in uses {
            if !self.provider.has_constant(&name.text) {
                errors.push(
                    RuleErrorBuilder::message(format!("Used constant {} not found.", name.text))
                        .line(name.line)
                        .identifier("constant.notFound")
                        .build(),
                );
            }
        }
        errors
    }

    fn check_functions(
        &self,
        uses: &[crate::ast::Name],
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let mut errors = Vec::new();
        for name in uses {
            if !self.provider.has_function(&name.text) {
                errors.push(
                    RuleErrorBuilder::message(format!("Used function {} not found.", name.text))
                        .line(name.line)
                        .identifier("function.notFound")
                        .build(),
                );
                continue;
            }
            if !self.check_function_name_case {
                continue;
            }
            let function = self
                .provider
                .get_function(&name.text)
                .map_err(|err| ShouldNotHappenError::new(err.to_string()))?;
            let real_name = function.name();
            if real_name != name.text {
                errors.push(
                    RuleErrorBuilder::message(format!(
                        "Function {real_name} used with incorrect case: {}.",
                        name.text
                    ))
                    .line(name.line)
                    .identifier("function.nameCase")
                    .build(),
                );
            }
        }
        Ok(errors)
    }

    fn check_classes(&self, uses: &[crate::ast::Name]) -> Vec<RuleError> {
        let mut errors = Vec::new();
        let mut known = Vec::new();
        for name in uses {
            if self.provider.has_class(&name.text) {
                known.push(ClassNameNodePair::from(name));
            } else {
                errors.push(
                    RuleErrorBuilder::message(format!("Used class {} not found.", name.text))
                        .line(name.line)
                        .identifier("class.notFound")
                        .build(),
                );
            }
        }
        errors.extend(self.case_check.check_class_names(&known));
        errors
    }
}

impl Rule for ExistingNamesInUseRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::UseDecl
    }

    fn process_node(
        &self,
        node: &Node,
        _scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::UseDecl { kind, uses } = &node.kind else {
            return Err(ShouldNotHappenError::new(
                "use rule dispatched on a non-use node",
            ));
        };

        match kind {
            UseKind::Constant => Ok(self.check_constants(uses)),
            UseKind::Function => self.check_functions(uses),
            UseKind::Class => Ok(self.check_classes(uses)),
            UseKind::Unknown => Err(ShouldNotHappenError::new(
                "use declaration with unresolved import kind",
            )),
        }
    }
}
