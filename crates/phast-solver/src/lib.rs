//! Type algebra for the phast static analyzer.
//!
//! This crate models the universe of possible runtime value shapes of the
//! analyzed language as a closed sum type (`Type`) and implements the
//! relational queries every rule depends on. It uses:
//!
//! - **Three-valued answers**: every relation returns `TrinaryLogic`,
//!   never `bool`, because static knowledge is frequently incomplete
//! - **Immutable values**: types are plain values, freely shareable and
//!   never mutated after construction
//! - **Normalized unions**: a union never contains another union; all
//!   construction goes through the combinators in [`combinators`]
//!
//! Key benefits:
//! - Exhaustive matching - the compiler enforces that no consumer forgets
//!   the `Error` (unknown class) case
//! - Uniform capability surface - rules never special-case variants
//!   beyond the one `is_error()` boundary check

pub mod combinators;
pub mod format;
mod offsets;
mod relations;
pub mod types;

pub use combinators::{benevolent_union, flatten_types, union_types};
pub use format::VerbosityLevel;
pub use types::{ArrayKey, ArrayType, ConstantArrayType, ErrorType, ObjectType, Type, UnionType};

#[cfg(test)]
mod tests;
