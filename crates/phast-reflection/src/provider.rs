//! Name resolution against the symbol table.
//!
//! The provider is a thin read-only view: existence checks are
//! case-insensitive, and `get_*` fails loudly when the caller skipped the
//! corresponding `has_*` gate - a missing symbol at that point is a
//! caller bug, not an analyzed-program defect.

use thiserror::Error;

use crate::reflections::{ClassReflection, FunctionReflection};
use crate::table::SymbolTable;

/// Requested class does not exist in the symbol table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("class {name} not found in the symbol table")]
pub struct ClassNotFoundError {
    pub name: String,
}

/// Requested function does not exist in the symbol table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("function {name} not found in the symbol table")]
pub struct FunctionNotFoundError {
    pub name: String,
}

/// Read-only resolver over a loaded [`SymbolTable`].
#[derive(Clone, Copy, Debug)]
pub struct ReflectionProvider<'a> {
    table: &'a SymbolTable,
}

impl<'a> ReflectionProvider<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.table.class(name).is_some()
    }

    pub fn get_class(&self, name: &str) -> Result<ClassReflection<'a>, ClassNotFoundError> {
        self.table
            .class(name)
            .map(|data| ClassReflection {
                table: self.table,
                data,
            })
            .ok_or_else(|| ClassNotFoundError {
                name: name.to_string(),
            })
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.table.function(name).is_some()
    }

    pub fn get_function(&self, name: &str) -> Result<FunctionReflection<'a>, FunctionNotFoundError> {
        self.table
            .function(name)
            .map(|data| FunctionReflection { data })
            .ok_or_else(|| FunctionNotFoundError {
                name: name.to_string(),
            })
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.table.constant(name).is_some()
    }

    /// Canonical declared casing of a constant.
    pub fn constant_name(&self, name: &str) -> Option<&'a str> {
        self.table.constant(name)
    }

    /// Whether `sub` names a class equal to or descending from `sup`.
    ///
    /// Unknown subclasses answer `false`; existence is the caller's
    /// concern.
    pub fn is_subclass_of_or_equal(&self, sub: &str, sup: &str) -> bool {
        match self.get_class(sub) {
            Ok(class) => class.is_subclass_of_or_equal(sup),
            Err(_) => sub.eq_ignore_ascii_case(sup),
        }
    }
}
