//! Declared-throws accuracy checking.

use crate::ast::{Node, NodeKind, SyntaxKind};
use crate::rule::Rule;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder, ShouldNotHappenError};
use phast_reflection::ReflectionProvider;

/// Reports declared throws classes no throw point in the body can
/// actually produce.
///
/// A declared class is used when some thrown class is it or descends
/// from it. An override with an empty body-throw set inherits no
/// obligation of its own and is left alone.
pub struct TooWideMethodThrowsRule<'a> {
    provider: ReflectionProvider<'a>,
}

impl<'a> TooWideMethodThrowsRule<'a> {
    pub fn new(provider: ReflectionProvider<'a>) -> Self {
        Self { provider }
    }
}

impl Rule for TooWideMethodThrowsRule<'_> {
    fn node_kind(&self) -> SyntaxKind {
        SyntaxKind::MethodDecl
    }

    fn process_node(
        &self,
        node: &Node,
        _scope: &Scope,
    ) -> Result<Vec<RuleError>, ShouldNotHappenError> {
        let NodeKind::MethodDecl {
            class_name,
            name,
            declared_throws,
            throw_points,
            overrides_parent,
        } = &node.kind
        else {
            return Err(ShouldNotHappenError::new(
                "throws rule dispatched on a non-method node",
            ));
        };

        if declared_throws.is_empty() {
            return Ok(Vec::new());
        }
        if throw_points.is_empty() && *overrides_parent {
            return Ok(Vec::new());
        }

        let subject = match class_name {
            Some(class_name) => format!("Method {class_name}::{name}()"),
            None => format!("Function {name}()"),
        };

        let mut errors = Vec::new();
        for declared in declared_throws {
            let used = throw_points.iter().any(|thrown| {
                self.provider
                    .is_subclass_of_or_equal(&thrown.text, &declared.text)
            });
            if used {
                continue;
            }
            errors.push(
                RuleErrorBuilder::message(format!(
                    "{subject} has {} in its @throws declaration but it's not thrown.",
                    declared.text
                ))
                .line(declared.line)
                .identifier("throws.unusedType")
                .build(),
            );
        }
        Ok(errors)
    }
}
