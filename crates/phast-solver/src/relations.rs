//! Subtype and acceptance relations over the type algebra.
//!
//! Both relations return `TrinaryLogic`:
//!
//! - `is_super_type_of` - set inclusion: Yes when every value of `other`
//!   is a value of `self`
//! - `accepts` - assignability: whether a value of `other` may be passed
//!   where `self` is expected; `strict_types` toggles whether the
//!   language's implicit scalar coercions are honored
//!
//! Union members fold with "unanimous or Maybe" semantics: a definite
//! answer survives only when every member agrees.

use crate::types::{ConstantArrayType, ObjectType, Type, UnionType};
use phast_common::TrinaryLogic;

impl UnionType {
    /// Fold a query over the members: unanimous answers survive,
    /// disagreement degrades to `Maybe`.
    pub(crate) fn fold_members(&self, query: impl Fn(&Type) -> TrinaryLogic) -> TrinaryLogic {
        let mut result = None;
        for member in self.members() {
            let answer = query(member);
            match result {
                None => result = Some(answer),
                Some(previous) if previous == answer => {}
                Some(_) => return TrinaryLogic::Maybe,
            }
        }
        result.unwrap_or(TrinaryLogic::No)
    }
}

impl Type {
    /// Whether every value of `other` is a value of `self`.
    pub fn is_super_type_of(&self, other: &Type) -> TrinaryLogic {
        if self.equals(other) {
            return TrinaryLogic::Yes;
        }

        // A union on the right folds member answers: unanimous coverage
        // survives, partial coverage degrades to Maybe.
        if let Type::Union(union) | Type::BenevolentUnion(union) = other {
            return union.fold_members(|member| self.is_super_type_of(member));
        }

        match self {
            Type::Mixed => TrinaryLogic::Yes,
            // The terminal error type behaves like the top type so that a
            // single unresolvable class does not cascade into follow-up
            // findings.
            Type::Error(_) => TrinaryLogic::Yes,

            Type::Integer => match other {
                Type::ConstantInteger(_) => TrinaryLogic::Yes,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::Float => match other {
                Type::ConstantFloat(_) => TrinaryLogic::Yes,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::Boolean => match other {
                Type::ConstantBoolean(_) => TrinaryLogic::Yes,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::String => match other {
                Type::ConstantString(_) => TrinaryLogic::Yes,
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::Null => match other {
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },

            // A constant covers only itself; the matching general type may
            // still hold the constant's value.
            Type::ConstantInteger(_) => match other {
                Type::Integer | Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ConstantFloat(_) => match other {
                Type::Float | Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ConstantBoolean(_) => match other {
                Type::Boolean | Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ConstantString(_) => match other {
                Type::String | Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },

            Type::Array(array) => match other {
                Type::Array(other_array) => array
                    .key_type
                    .is_super_type_of(&other_array.key_type)
                    .and(array.value_type.is_super_type_of(&other_array.value_type)),
                Type::ConstantArray(constant) => TrinaryLogic::and_all(
                    constant.shape.iter().map(|(key, value)| {
                        array
                            .key_type
                            .is_super_type_of(&key.to_type())
                            .and(array.value_type.is_super_type_of(value))
                    }),
                ),
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ConstantArray(constant) => match other {
                Type::ConstantArray(other_constant) => {
                    constant_array_covers(constant, other_constant)
                }
                Type::Array(_) | Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },

            Type::Object(object) => match other {
                Type::Object(other_object) => object_covers(object, other_object),
                Type::Mixed | Type::Error(_) => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },

            // A union on the left covers what any member covers.
            Type::Union(union) | Type::BenevolentUnion(union) => TrinaryLogic::or_all(
                union.members().iter().map(|member| member.is_super_type_of(other)),
            ),
        }
    }

    /// Whether a value of `other` may be assigned or passed where `self`
    /// is expected.
    ///
    /// With `strict_types` disabled the language coerces freely between
    /// scalar families, so any scalar is accepted where a scalar is
    /// expected. Integer-to-float widening is honored even under strict
    /// typing, matching the analyzed language.
    pub fn accepts(&self, other: &Type, strict_types: bool) -> TrinaryLogic {
        // The error type is accepted everywhere: it already produced its
        // own finding at the point of detection.
        if other.is_error() {
            return TrinaryLogic::Yes;
        }
        if matches!(self, Type::Mixed) {
            return TrinaryLogic::Yes;
        }
        if matches!(other, Type::Mixed) {
            return TrinaryLogic::Maybe;
        }

        if let Type::Union(union) | Type::BenevolentUnion(union) = other {
            return TrinaryLogic::and_all(
                union.members().iter().map(|member| self.accepts(member, strict_types)),
            );
        }
        if let Type::Union(union) | Type::BenevolentUnion(union) = self {
            return TrinaryLogic::or_all(
                union.members().iter().map(|member| member.accepts(other, strict_types)),
            );
        }

        // Integer-to-float widening is always implicit.
        if matches!(self, Type::Float | Type::ConstantFloat(_))
            && matches!(other, Type::Integer | Type::ConstantInteger(_))
        {
            return TrinaryLogic::Yes;
        }

        let direct = self.is_super_type_of(other);
        if direct == TrinaryLogic::No && !strict_types && is_scalar(self) && is_scalar(other) {
            return TrinaryLogic::Yes;
        }
        direct
    }
}

fn is_scalar(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Integer
            | Type::Float
            | Type::Boolean
            | Type::String
            | Type::ConstantInteger(_)
            | Type::ConstantFloat(_)
            | Type::ConstantBoolean(_)
            | Type::ConstantString(_)
    )
}

/// Known-shape arrays cover each other pointwise over an identical key set.
fn constant_array_covers(left: &ConstantArrayType, right: &ConstantArrayType) -> TrinaryLogic {
    if left.shape.len() != right.shape.len() {
        return TrinaryLogic::No;
    }
    let mut result = TrinaryLogic::Yes;
    for (key, value) in &left.shape {
        match right.shape.get(key) {
            Some(other_value) => result = result.and(value.is_super_type_of(other_value)),
            None => return TrinaryLogic::No,
        }
    }
    result
}

/// Class-backed object coverage via recorded ancestry.
///
/// Recorded ancestry only ever proves coverage; it cannot disprove it
/// (an unseen subclass may implement an interface), so the relation
/// degrades to `Maybe` instead of inventing a definite `No`.
fn object_covers(left: &ObjectType, right: &ObjectType) -> TrinaryLogic {
    let Some(left_name) = left.class_name.as_deref() else {
        // "any object" covers every object.
        return TrinaryLogic::Yes;
    };
    let Some(right_name) = right.class_name.as_deref() else {
        return TrinaryLogic::Maybe;
    };

    if left_name.eq_ignore_ascii_case(right_name) || right.is_or_descends_from(left_name) {
        return TrinaryLogic::Yes;
    }
    if left.is_or_descends_from(right_name) {
        // Downcast direction: a value of the ancestor type may or may not
        // be an instance of the descendant.
        return TrinaryLogic::Maybe;
    }
    // Apparently unrelated names: the value types carry no class-kind or
    // finality information, and when the left side is an interface an
    // unseen subclass of the right class could still implement it.
    TrinaryLogic::Maybe
}
