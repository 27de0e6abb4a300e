//! Three-valued logic for statically-computed facts.
//!
//! Static analysis frequently cannot decide a question with certainty:
//! "does this array have offset `'c'`" may be true on some control-flow
//! paths and false on others. Every relational query in the type algebra
//! therefore answers with `TrinaryLogic` instead of `bool`, and callers
//! must handle `Maybe` explicitly before coercing to a boolean.

use serde::Serialize;
use thiserror::Error;

/// A three-valued boolean: `Yes`, `Maybe`, or `No`.
///
/// The variants are ordered `No < Maybe < Yes` so that conjunction is the
/// minimum of its operands and disjunction the maximum. `Maybe` dominates
/// unless the other operand forces the result (`and` with `No` is `No`,
/// `or` with `Yes` is `Yes`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TrinaryLogic {
    No,
    Maybe,
    Yes,
}

/// Error returned when a `Maybe` value is coerced to a boolean.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert MAYBE to a boolean; handle the maybe case explicitly")]
pub struct LogicError;

impl TrinaryLogic {
    /// Create a `Yes` value.
    pub const fn yes() -> Self {
        Self::Yes
    }

    /// Create a `No` value.
    pub const fn no() -> Self {
        Self::No
    }

    /// Create a `Maybe` value.
    pub const fn maybe() -> Self {
        Self::Maybe
    }

    /// Lift an ordinary boolean into three-valued logic.
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    /// Whether this value is definitely true.
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Whether this value is definitely false.
    pub const fn is_no(self) -> bool {
        matches!(self, Self::No)
    }

    /// Whether this value is statically undecided.
    pub const fn is_maybe(self) -> bool {
        matches!(self, Self::Maybe)
    }

    /// Logical negation: `Yes` ↔ `No`, `Maybe` is a fixed point.
    pub const fn negate(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::Maybe => Self::Maybe,
            Self::No => Self::Yes,
        }
    }

    /// Three-valued conjunction (minimum of the operands).
    pub fn and(self, other: Self) -> Self {
        self.min(other)
    }

    /// Three-valued disjunction (maximum of the operands).
    pub fn or(self, other: Self) -> Self {
        self.max(other)
    }

    /// Conjunction over an operand sequence; the empty sequence is `Yes`.
    pub fn and_all(operands: impl IntoIterator<Item = Self>) -> Self {
        operands.into_iter().fold(Self::Yes, Self::and)
    }

    /// Disjunction over an operand sequence; the empty sequence is `No`.
    pub fn or_all(operands: impl IntoIterator<Item = Self>) -> Self {
        operands.into_iter().fold(Self::No, Self::or)
    }

    /// Coerce to a boolean.
    ///
    /// Fails on `Maybe`: the caller is required to decide what a
    /// statically-undecided answer means in its own context (typically
    /// gated by a `report_maybes` configuration flag).
    pub const fn to_bool(self) -> Result<bool, LogicError> {
        match self {
            Self::Yes => Ok(true),
            Self::No => Ok(false),
            Self::Maybe => Err(LogicError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TrinaryLogic; 3] = [TrinaryLogic::Yes, TrinaryLogic::Maybe, TrinaryLogic::No];

    #[test]
    fn test_double_negation_is_identity() {
        for value in ALL {
            assert_eq!(value.negate().negate(), value);
        }
    }

    #[test]
    fn test_and_identities() {
        for value in ALL {
            assert_eq!(value.and(TrinaryLogic::Yes), value);
            assert_eq!(value.and(TrinaryLogic::No), TrinaryLogic::No);
        }
        assert_eq!(
            TrinaryLogic::Maybe.and(TrinaryLogic::Maybe),
            TrinaryLogic::Maybe
        );
    }

    #[test]
    fn test_or_identities() {
        for value in ALL {
            assert_eq!(value.or(TrinaryLogic::No), value);
            assert_eq!(value.or(TrinaryLogic::Yes), TrinaryLogic::Yes);
        }
        assert_eq!(
            TrinaryLogic::Maybe.or(TrinaryLogic::Maybe),
            TrinaryLogic::Maybe
        );
    }

    #[test]
    fn test_variadic_folds() {
        assert_eq!(TrinaryLogic::and_all([]), TrinaryLogic::Yes);
        assert_eq!(TrinaryLogic::or_all([]), TrinaryLogic::No);
        assert_eq!(
            TrinaryLogic::and_all([TrinaryLogic::Yes, TrinaryLogic::Maybe, TrinaryLogic::Yes]),
            TrinaryLogic::Maybe
        );
        assert_eq!(
            TrinaryLogic::or_all([TrinaryLogic::No, TrinaryLogic::Maybe, TrinaryLogic::Yes]),
            TrinaryLogic::Yes
        );
    }

    #[test]
    fn test_to_bool_rejects_maybe() {
        assert_eq!(TrinaryLogic::Yes.to_bool(), Ok(true));
        assert_eq!(TrinaryLogic::No.to_bool(), Ok(false));
        assert!(TrinaryLogic::Maybe.to_bool().is_err());
    }

    #[test]
    fn test_from_bool_round_trip() {
        assert_eq!(TrinaryLogic::from_bool(true), TrinaryLogic::Yes);
        assert_eq!(TrinaryLogic::from_bool(false), TrinaryLogic::No);
    }
}
