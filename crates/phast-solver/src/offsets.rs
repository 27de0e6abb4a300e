//! Offset-access queries over the type algebra.
//!
//! Three questions, all three-valued:
//!
//! - `is_offset_accessible` - does the type support index/key access at all
//! - `has_offset_value_type` - is access at an offset of the given type
//!   known to succeed
//! - `is_array` - is the type an array shape
//!
//! Strings are offset-accessible by integer in the analyzed language;
//! objects are offset-accessible when their class is known to descend
//! from the offset interface (`ArrayAccess`).

use crate::combinators::flatten_types;
use crate::types::{ArrayKey, ConstantArrayType, Type};
use phast_common::TrinaryLogic;

/// Interface a class implements to make its instances offset-accessible.
pub(crate) const OFFSET_INTERFACE: &str = "ArrayAccess";

impl Type {
    /// Whether values of this type support index/offset access.
    pub fn is_offset_accessible(&self) -> TrinaryLogic {
        match self {
            Type::String | Type::ConstantString(_) => TrinaryLogic::Yes,
            Type::Array(_) | Type::ConstantArray(_) => TrinaryLogic::Yes,
            Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
            Type::Object(object) => match object.class_name.as_deref() {
                None => TrinaryLogic::Maybe,
                Some(_) if object.is_or_descends_from(OFFSET_INTERFACE) => TrinaryLogic::Yes,
                // Ancestry not recorded: the class may still implement the
                // offset interface.
                Some(_) if object.ancestors.is_empty() => TrinaryLogic::Maybe,
                Some(_) => TrinaryLogic::No,
            },
            Type::Union(union) | Type::BenevolentUnion(union) => {
                union.fold_members(Type::is_offset_accessible)
            }
            Type::Integer
            | Type::Float
            | Type::Boolean
            | Type::Null
            | Type::ConstantInteger(_)
            | Type::ConstantFloat(_)
            | Type::ConstantBoolean(_) => TrinaryLogic::No,
        }
    }

    /// Whether accessing this type at an offset of type `offset` is known
    /// to succeed.
    ///
    /// `Maybe` when the container's shape is only partially known - a
    /// general array may simply not contain the key, and a union of array
    /// shapes may disagree member by member.
    pub fn has_offset_value_type(&self, offset: &Type) -> TrinaryLogic {
        match self {
            Type::ConstantArray(constant) => {
                // A union offset folds over its leaves so that Maybe
                // handling stays correct for arbitrarily nested unions.
                let leaves = flatten_types(offset);
                if leaves.len() > 1 {
                    return fold_disagreeing(
                        leaves.iter().map(|leaf| self.has_offset_value_type(leaf)),
                    );
                }
                constant_array_offset(constant, offset)
            }
            Type::Array(array) => {
                if array.key_type.accepts(offset, false) == TrinaryLogic::No {
                    TrinaryLogic::No
                } else {
                    // The key kind fits, but a general array may not
                    // contain the specific offset.
                    TrinaryLogic::Maybe
                }
            }
            Type::String => match offset {
                Type::Integer | Type::ConstantInteger(_) => TrinaryLogic::Maybe,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ConstantString(value) => match offset {
                Type::ConstantInteger(index) => {
                    TrinaryLogic::from_bool(string_index_in_range(value, *index))
                }
                Type::Integer => TrinaryLogic::Maybe,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
            Type::Object(object) => match object.class_name.as_deref() {
                None => TrinaryLogic::Maybe,
                // The offset interface gives no static key information.
                Some(_) if object.is_or_descends_from(OFFSET_INTERFACE) => TrinaryLogic::Maybe,
                Some(_) if object.ancestors.is_empty() => TrinaryLogic::Maybe,
                Some(_) => TrinaryLogic::No,
            },
            Type::Union(union) | Type::BenevolentUnion(union) => {
                union.fold_members(|member| member.has_offset_value_type(offset))
            }
            Type::Integer
            | Type::Float
            | Type::Boolean
            | Type::Null
            | Type::ConstantInteger(_)
            | Type::ConstantFloat(_)
            | Type::ConstantBoolean(_) => TrinaryLogic::No,
        }
    }

    /// Whether this type is an array shape.
    pub fn is_array(&self) -> TrinaryLogic {
        match self {
            Type::Array(_) | Type::ConstantArray(_) => TrinaryLogic::Yes,
            Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
            Type::Union(union) | Type::BenevolentUnion(union) => union.fold_members(Type::is_array),
            _ => TrinaryLogic::No,
        }
    }
}

fn constant_array_offset(constant: &ConstantArrayType, offset: &Type) -> TrinaryLogic {
    match offset {
        Type::ConstantInteger(value) => {
            TrinaryLogic::from_bool(constant.shape.contains_key(&ArrayKey::Integer(*value)))
        }
        Type::ConstantString(value) => {
            TrinaryLogic::from_bool(constant.shape.contains_key(&ArrayKey::String(value.clone())))
        }
        Type::Integer => general_key_answer(constant, |key| matches!(key, ArrayKey::Integer(_))),
        Type::String => general_key_answer(constant, |key| matches!(key, ArrayKey::String(_))),
        Type::Mixed | Type::Error(_) => {
            if constant.shape.is_empty() {
                TrinaryLogic::No
            } else {
                TrinaryLogic::Maybe
            }
        }
        _ => TrinaryLogic::No,
    }
}

/// A general (non-constant) offset against a known shape: `Maybe` when at
/// least one key of the offset's kind exists, `No` otherwise.
fn general_key_answer(
    constant: &ConstantArrayType,
    matches_kind: impl Fn(&ArrayKey) -> bool,
) -> TrinaryLogic {
    if constant.shape.keys().any(matches_kind) {
        TrinaryLogic::Maybe
    } else {
        TrinaryLogic::No
    }
}

/// "Unanimous or Maybe" fold for per-leaf offset answers.
fn fold_disagreeing(answers: impl IntoIterator<Item = TrinaryLogic>) -> TrinaryLogic {
    let mut result = None;
    for answer in answers {
        match result {
            None => result = Some(answer),
            Some(previous) if previous == answer => {}
            Some(_) => return TrinaryLogic::Maybe,
        }
    }
    result.unwrap_or(TrinaryLogic::No)
}

/// Character offsets, including the language's negative-from-the-end form.
fn string_index_in_range(value: &str, index: i64) -> bool {
    let length = value.chars().count() as i64;
    if index >= 0 {
        index < length
    } else {
        // checked_neg: i64::MIN has no positive counterpart and is
        // always out of range.
        index
            .checked_neg()
            .is_some_and(|from_end| from_end <= length)
    }
}
