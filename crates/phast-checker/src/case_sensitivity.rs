//! Casing-mismatch detection for class-like names.
//!
//! Existence is deliberately not this checker's concern: an unresolvable
//! name emits nothing here (a different rule reports it), while a known
//! name spelled with the wrong case emits exactly one diagnostic naming
//! the canonical declaration.

use crate::ast::Name;
use phast_common::{RuleError, RuleErrorBuilder};
use phast_reflection::ReflectionProvider;

/// A used class name paired with the node it originated from.
///
/// Carries just enough of the origin (the source line) to report precise
/// locations; not an owning relationship.
#[derive(Clone, Debug)]
pub struct ClassNameNodePair {
    pub class_name: String,
    pub line: u32,
}

impl ClassNameNodePair {
    pub fn new(class_name: impl Into<String>, line: u32) -> Self {
        Self {
            class_name: class_name.into(),
            line,
        }
    }
}

impl From<&Name> for ClassNameNodePair {
    fn from(name: &Name) -> Self {
        Self::new(name.text.clone(), name.line)
    }
}

/// Compares used class-name spellings against canonical declarations.
#[derive(Clone, Copy, Debug)]
pub struct ClassCaseSensitivityCheck<'a> {
    provider: ReflectionProvider<'a>,
}

impl<'a> ClassCaseSensitivityCheck<'a> {
    pub fn new(provider: ReflectionProvider<'a>) -> Self {
        Self { provider }
    }

    /// One diagnostic per pair whose spelling differs from the canonical
    /// declaration only by case; exact matches and unknown names emit
    /// nothing.
    pub fn check_class_names(&self, pairs: &[ClassNameNodePair]) -> Vec<RuleError> {
        let mut errors = Vec::new();
        for pair in pairs {
            let Ok(class) = self.provider.get_class(&pair.class_name) else {
                continue;
            };
            let real_name = class.name();
            if real_name == pair.class_name {
                continue;
            }
            let symbol = if class.is_interface() {
                "Interface"
            } else {
                "Class"
            };
            errors.push(
                RuleErrorBuilder::message(format!(
                    "{symbol} {real_name} referenced with incorrect case: {}.",
                    pair.class_name
                ))
                .line(pair.line)
                .identifier("class.nameCase")
                .build(),
            );
        }
        errors
    }
}
