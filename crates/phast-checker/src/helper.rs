//! Shared type-resolution pattern for rules.
//!
//! Almost every rule starts the same way: resolve an expression's type
//! from the scope, deal with references to classes the reflection layer
//! does not know, and optionally narrow a union to the members the rule
//! can say something about. `RuleLevelHelper` centralizes that pattern so
//! every rule reports unknown classes with the same message shape,
//! manufactured once at the point of detection.

use tracing::debug;

use crate::ast::Node;
use crate::scope::Scope;
use phast_common::{RuleError, RuleErrorBuilder};
use phast_reflection::ReflectionProvider;
use phast_solver::{Type, flatten_types, union_types};

/// Result of [`RuleLevelHelper::find_type_to_check`].
///
/// Callers must check `is_error()` first and, when set, propagate the
/// pre-built diagnostics verbatim instead of re-deriving a message.
#[derive(Debug)]
pub struct FoundTypeResult {
    ty: Type,
    unknown_class_errors: Vec<RuleError>,
}

impl FoundTypeResult {
    pub fn get_type(&self) -> &Type {
        &self.ty
    }

    pub fn is_error(&self) -> bool {
        self.ty.is_error()
    }

    pub fn unknown_class_errors(&self) -> &[RuleError] {
        &self.unknown_class_errors
    }

    pub fn into_unknown_class_errors(self) -> Vec<RuleError> {
        self.unknown_class_errors
    }
}

/// Scope/type resolution shared by the rule catalog.
#[derive(Clone, Copy, Debug)]
pub struct RuleLevelHelper<'a> {
    provider: ReflectionProvider<'a>,
    /// When off, a nullable union is checked as its non-null remainder.
    check_nullables: bool,
    /// When off, unions are narrowed to the members satisfying the
    /// caller's predicate before the rule proceeds.
    check_union_types: bool,
}

impl<'a> RuleLevelHelper<'a> {
    pub fn new(
        provider: ReflectionProvider<'a>,
        check_nullables: bool,
        check_union_types: bool,
    ) -> Self {
        Self {
            provider,
            check_nullables,
            check_union_types,
        }
    }

    /// Resolve the static type of `expr`, constrained for checking.
    ///
    /// `unknown_class_pattern` is a message template with a `{0}`
    /// placeholder receiving the offending class name. The returned type
    /// is `Error` exactly when at least one diagnostic was pre-built, so
    /// a caller observing `Error` always has something to report.
    ///
    /// `predicate` only drives narrowing; the helper itself never rejects
    /// a non-matching type - report-vs-skip policy stays with the calling
    /// rule.
    pub fn find_type_to_check(
        &self,
        scope: &Scope,
        expr: &Node,
        unknown_class_pattern: &str,
        predicate: impl Fn(&Type) -> bool,
    ) -> FoundTypeResult {
        let mut ty = scope.get_type(expr).clone();

        if !self.check_nullables {
            if let Some(stripped) = strip_null(&ty) {
                if predicate(&stripped) {
                    ty = stripped;
                }
            }
        }

        if !self.check_union_types {
            if let Type::Union(union) = &ty {
                let kept: Vec<Type> = union
                    .members()
                    .iter()
                    .filter(|member| predicate(member))
                    .cloned()
                    .collect();
                if !kept.is_empty() && kept.len() < union.members().len() {
                    ty = union_types(kept);
                }
            }
        }

        let mut errors = Vec::new();
        for class_name in ty.referenced_classes() {
            if !self.provider.has_class(class_name) {
                debug!(class_name, line = expr.line, "reference to unknown class");
                errors.push(unknown_class_error(
                    unknown_class_pattern,
                    class_name,
                    expr.line,
                ));
            }
        }
        if !errors.is_empty() {
            return FoundTypeResult {
                ty: Type::error(),
                unknown_class_errors: errors,
            };
        }

        // The inference pass may already have produced the terminal error
        // type; the caller still gets at least one diagnostic to report.
        if let Type::Error(error) = &ty {
            let name = error
                .unknown_class
                .clone()
                .unwrap_or_else(|| "*ERROR*".to_string());
            let diagnostic = unknown_class_error(unknown_class_pattern, &name, expr.line);
            return FoundTypeResult {
                ty,
                unknown_class_errors: vec![diagnostic],
            };
        }

        FoundTypeResult {
            ty,
            unknown_class_errors: Vec::new(),
        }
    }
}

/// `union - null`, when `ty` is a union containing null.
fn strip_null(ty: &Type) -> Option<Type> {
    let Type::Union(union) = ty else {
        return None;
    };
    if !union.members().iter().any(|member| matches!(member, Type::Null)) {
        return None;
    }
    let remainder: Vec<Type> = union
        .members()
        .iter()
        .filter(|member| !matches!(member, Type::Null))
        .cloned()
        .collect();
    Some(union_types(remainder))
}

fn unknown_class_error(pattern: &str, class_name: &str, line: u32) -> RuleError {
    RuleErrorBuilder::message(pattern.replace("{0}", class_name))
        .line(line)
        .identifier("class.notFound")
        .build()
}

/// The flattened leaves of `ty` that are known-shape arrays.
pub fn constant_arrays(ty: &Type) -> Vec<&Type> {
    flatten_types(ty)
        .into_iter()
        .filter(|leaf| matches!(leaf, Type::ConstantArray(_)))
        .collect()
}
