//! The concrete rule catalog.
//!
//! Every rule here is a client of the substrate: it resolves types
//! through `RuleLevelHelper`, asks three-valued questions of the type
//! algebra, and reports findings as `RuleError` data. Per-rule strictness
//! knobs (`report_maybes`, `check_function_name_case`) are wired by
//! whoever assembles the registry.

mod arrays;
mod classes;
mod exceptions;
mod operators;
mod namespaces;

pub use arrays::NonexistentOffsetRule;
pub use classes::{ExistingClassInExtendsRule, ExistingClassesInImplementsRule};
pub use exceptions::TooWideMethodThrowsRule;
pub use namespaces::ExistingNamesInUseRule;
pub use operators::InvalidComparisonRule;
