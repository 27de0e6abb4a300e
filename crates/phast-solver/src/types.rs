//! The `Type` sum type and its variant payloads.
//!
//! A `Type` is a static approximation of the set of runtime values an
//! expression can hold. Variants cover the scalar primitives of the
//! analyzed language, their constant (singleton) refinements, the two
//! array shapes (general and known-shape), class-backed and anonymous
//! objects, unions, and two terminal variants:
//!
//! - `Mixed` - the dynamic top type; every unannotated expression starts
//!   here and most queries answer `Maybe`
//! - `Error` - irrecoverable unknown (e.g. a reference to a nonexistent
//!   class), modeled as a first-class variant so consumers match on it
//!   exhaustively instead of null-checking

use indexmap::IndexMap;

use crate::combinators;
use phast_common::ShouldNotHappenError;

// =============================================================================
// Type - the closed variant set
// =============================================================================

/// A static approximation of a set of possible runtime values.
///
/// Immutable; combinators always return new values. Relations between two
/// `Type`s are never boolean - see the query methods, all of which return
/// [`phast_common::TrinaryLogic`].
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    /// Any integer.
    Integer,
    /// Any float.
    Float,
    /// Any boolean.
    Boolean,
    /// Any string.
    String,
    /// The null singleton.
    Null,
    /// The dynamic top type.
    Mixed,
    /// A known integer constant.
    ConstantInteger(i64),
    /// A known float constant.
    ConstantFloat(f64),
    /// A known boolean constant.
    ConstantBoolean(bool),
    /// A known string constant.
    ConstantString(String),
    /// A general array with key/value type approximations.
    Array(ArrayType),
    /// An array whose exact key -> value-type shape is statically known.
    ConstantArray(ConstantArrayType),
    /// An object, optionally bound to a declaring class.
    Object(ObjectType),
    /// A union of at least two non-union member types.
    Union(UnionType),
    /// A union reflecting the language's loose comparison semantics.
    BenevolentUnion(UnionType),
    /// Terminal unknown; carries the offending class name when known.
    Error(ErrorType),
}

impl Type {
    /// Structural equality (not subtype equality).
    pub fn equals(&self, other: &Type) -> bool {
        self == other
    }

    /// Whether this is the terminal `Error` type.
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error(_))
    }

    /// Class names mentioned anywhere in this type.
    ///
    /// The rule-level helper checks each of these against the reflection
    /// provider to detect references to nonexistent classes.
    pub fn referenced_classes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_referenced_classes(&mut out);
        out
    }

    fn collect_referenced_classes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Type::Object(object) => {
                if let Some(name) = &object.class_name {
                    out.push(name.as_str());
                }
            }
            Type::Array(array) => {
                array.key_type.collect_referenced_classes(out);
                array.value_type.collect_referenced_classes(out);
            }
            Type::ConstantArray(array) => {
                for value in array.shape.values() {
                    value.collect_referenced_classes(out);
                }
            }
            Type::Union(union) | Type::BenevolentUnion(union) => {
                for member in &union.members {
                    member.collect_referenced_classes(out);
                }
            }
            _ => {}
        }
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Type {
    pub fn constant_string(value: impl Into<String>) -> Type {
        Type::ConstantString(value.into())
    }

    /// A general array of `key -> value`.
    pub fn array_of(key_type: Type, value_type: Type) -> Type {
        Type::Array(ArrayType::new(key_type, value_type))
    }

    /// A known-shape array from ordered `(key, value-type)` entries.
    pub fn constant_array(entries: impl IntoIterator<Item = (ArrayKey, Type)>) -> Type {
        Type::ConstantArray(ConstantArrayType::new(entries))
    }

    /// An object of a class whose ancestry is not recorded.
    pub fn object(class_name: impl Into<String>) -> Type {
        Type::Object(ObjectType::named(class_name))
    }

    /// An object of a class with its full ancestry (parents + interfaces).
    pub fn object_with_ancestors(
        class_name: impl Into<String>,
        ancestors: impl IntoIterator<Item = String>,
    ) -> Type {
        Type::Object(ObjectType::with_ancestors(class_name, ancestors))
    }

    /// An object of an unknown class ("any object").
    pub fn any_object() -> Type {
        Type::Object(ObjectType::any())
    }

    /// The terminal error type with no recorded origin.
    pub fn error() -> Type {
        Type::Error(ErrorType { unknown_class: None })
    }

    /// The terminal error type produced by an unresolvable class name.
    pub fn error_for_class(class_name: impl Into<String>) -> Type {
        Type::Error(ErrorType {
            unknown_class: Some(class_name.into()),
        })
    }

    /// Normalizing union construction; see [`combinators::union_types`].
    pub fn union(members: Vec<Type>) -> Type {
        combinators::union_types(members)
    }
}

// =============================================================================
// Variant payloads
// =============================================================================

/// Key/value approximation of a general array.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub key_type: Box<Type>,
    pub value_type: Box<Type>,
}

impl ArrayType {
    pub fn new(key_type: Type, value_type: Type) -> Self {
        Self {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }
}

/// An array key: the analyzed language only permits integer and string keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Integer(i64),
    String(String),
}

impl ArrayKey {
    /// The constant type of this key.
    pub fn to_type(&self) -> Type {
        match self {
            ArrayKey::Integer(value) => Type::ConstantInteger(*value),
            ArrayKey::String(value) => Type::ConstantString(value.clone()),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(value: i64) -> Self {
        ArrayKey::Integer(value)
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::String(value.to_string())
    }
}

/// An array whose exact shape is statically known.
///
/// Key order is declaration order and is preserved for deterministic
/// rendering in diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantArrayType {
    pub shape: IndexMap<ArrayKey, Type>,
}

impl ConstantArrayType {
    pub fn new(entries: impl IntoIterator<Item = (ArrayKey, Type)>) -> Self {
        Self {
            shape: entries.into_iter().collect(),
        }
    }
}

/// An object type, optionally bound to a declaring class.
///
/// `ancestors` records the full ancestry (parent classes + implemented
/// interfaces) when the constructor of the type knew it; relational
/// queries degrade to `Maybe` when ancestry was not recorded. Name
/// comparisons are case-insensitive, matching the analyzed language.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    /// `None` means "any object" - the class is unknown.
    pub class_name: Option<String>,
    pub ancestors: Vec<String>,
}

impl ObjectType {
    pub fn named(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ancestors: Vec::new(),
        }
    }

    pub fn with_ancestors(
        class_name: impl Into<String>,
        ancestors: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ancestors: ancestors.into_iter().collect(),
        }
    }

    pub fn any() -> Self {
        Self {
            class_name: None,
            ancestors: Vec::new(),
        }
    }

    /// Whether `name` is this class or one of its recorded ancestors.
    pub fn is_or_descends_from(&self, name: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(name))
            || self
                .ancestors
                .iter()
                .any(|ancestor| ancestor.eq_ignore_ascii_case(name))
    }
}

/// A union of at least two non-union member types.
///
/// Never construct one directly from rule code; use
/// [`combinators::union_types`], which flattens and normalizes. A nested
/// union is illegal state and `new` rejects it as an internal fault.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    members: Vec<Type>,
}

impl UnionType {
    pub fn new(members: Vec<Type>) -> Result<Self, ShouldNotHappenError> {
        if members.len() < 2 {
            return Err(ShouldNotHappenError::new(
                "union type must have at least two members",
            ));
        }
        if members
            .iter()
            .any(|member| matches!(member, Type::Union(_) | Type::BenevolentUnion(_)))
        {
            return Err(ShouldNotHappenError::new(
                "union type must not contain another union; flatten at construction",
            ));
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[Type] {
        &self.members
    }
}

/// The terminal unknown type.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorType {
    /// The unresolvable class name that produced this type, when known.
    pub unknown_class: Option<String>,
}
