//! Symbol reflection layer for the phast static analyzer.
//!
//! Resolves class, function, and constant names against the known symbol
//! table. Name resolution is case-**insensitive** - the analyzed
//! language's symbol table is - but every reflection result carries the
//! **canonical declared casing**, which is what enables casing-mismatch
//! diagnostics downstream.
//!
//! The symbol table is built once by an external loader and is read-only
//! during analysis; reflection values borrow it and are constructed per
//! resolution request.

pub mod provider;
pub mod reflections;
pub mod table;

pub use provider::{ClassNotFoundError, FunctionNotFoundError, ReflectionProvider};
pub use reflections::{ClassReflection, FunctionReflection, MethodReflection, PropertyReflection};
pub use table::{ClassData, ClassKind, FunctionData, MethodData, PropertyData, SymbolTable};
