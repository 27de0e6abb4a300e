//! Existence and casing checks on class declarations.

use crate::ast::{Node, NodeKind, SyntaxKind};
use crate::case_sensitivity::{ClassCaseSensitivityCheck, ClassNameNodePair};
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder, ShouldNotHappenError};
use phast_reflection::ReflectionProvider;

/// Reports an `extends` clause naming a class reflection cannot resolve,
/// and a known parent spelled with the wrong case.
pub struct ExistingClassInExtendsRule<'a> {
    provider: ReflectionProvider<'a>,
    case_check: ClassCaseSensitivityCheck<'a>,
}

impl<'a> ExistingClassInExtendsRule<'a> {
    pub fn new(
        provider: ReflectionProvider<'a>,
        case_check: ClassCaseSensitivityCheck<'a>,
    ) -> Self {
        Self {
            provider,
            case_check,
        }
    }
}

impl Rule for ExistingClassInExtendsRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::ClassDecl
    }

    fn process_node(
        &self,
        node: &Node,
        _scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::ClassDecl { extends, .. } = &node.kind else {
            return Err(ShouldNotHappenError::new(
                "extends rule dispatched on a non-class node",
            ));
        };
        let Some(extends) = extends else {
            return Ok(Vec::new());
        };

        if !self.provider.has_class(&extends.text) {
            return Ok(vec![
                RuleErrorBuilder::message(format!("Class {} not found.", extends.text))
                    .line(extends.line)
                    .identifier("class.notFound")
                    .build(),
            ]);
        }

        Ok(self
            .case_check
            .check_class_names(&[ClassNameNodePair::from(extends)]))
    }
}

/// Reports `implements` clauses naming unresolvable interfaces, and
/// known interfaces spelled with the wrong case.
pub struct ExistingClassesInImplementsRule<'a> {
    provider: ReflectionProvider<'a>,
    case_check: ClassCaseSensitivityCheck<'a>,
}

impl<'a> ExistingClassesInImplementsRule<'a> {
    pub fn new(
        provider: ReflectionProvider<'a>,
        case_check: ClassCaseSensitivityCheck<'a>,
    ) -> Self {
        Self {
            provider,
            case_check,
        }
    }
}

impl Rule for ExistingClassesInImplementsRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::ClassDecl
    }

    fn process_node(
        &self,
        node: &Node,
        _scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::ClassDecl { implements, .. } = &node.kind else {
            return Err(ShouldNotHappenError::new(
                "implements rule dispatched on a non-class node",
            ));
        };

        let mut errors = Vec::new();
        let mut known = Vec::new();
        for name in implements {
            if self.provider.has_class(&name.text) {
                known.push(ClassNameNodePair::from(name));
            } else {
                errors.push(
                    RuleErrorBuilder::message(format!("Interface {} not found.", name.text))
                        .line(name.line)
                        .identifier("interface.notFound")
                        .build(),
                );
            }
        }
        errors.extend(self.case_check.check_class_names(&known));
        Ok(errors)
    }
}
