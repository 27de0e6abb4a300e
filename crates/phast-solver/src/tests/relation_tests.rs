use crate::types::{Type, UnionType};
use crate::union_types;
use phast_common::TrinaryLogic;

fn sample_types() -> Vec<Type> {
    vec![
        Type::Integer,
        Type::Float,
        Type::String,
        Type::Boolean,
        Type::Null,
        Type::Mixed,
        Type::ConstantInteger(5),
        Type::constant_string("a"),
        Type::array_of(Type::Integer, Type::String),
        Type::constant_array([("a".into(), Type::Integer)]),
        Type::object("Foo"),
        Type::any_object(),
        Type::error(),
        union_types(vec![Type::Integer, Type::String]),
    ]
}

#[test]
fn test_equals_and_supertype_are_reflexive() {
    for ty in sample_types() {
        assert!(ty.equals(&ty), "{ty:?} should equal itself");
        assert_eq!(
            ty.is_super_type_of(&ty),
            TrinaryLogic::Yes,
            "{ty:?} should be a supertype of itself"
        );
    }
}

#[test]
fn test_general_scalar_covers_its_constants() {
    assert_eq!(
        Type::Integer.is_super_type_of(&Type::ConstantInteger(5)),
        TrinaryLogic::Yes
    );
    assert_eq!(
        Type::String.is_super_type_of(&Type::constant_string("a")),
        TrinaryLogic::Yes
    );
    // The other direction is only possible, never certain.
    assert_eq!(
        Type::ConstantInteger(5).is_super_type_of(&Type::Integer),
        TrinaryLogic::Maybe
    );
}

#[test]
fn test_unrelated_scalars_do_not_cover() {
    assert_eq!(
        Type::Integer.is_super_type_of(&Type::String),
        TrinaryLogic::No
    );
    assert_eq!(
        Type::Null.is_super_type_of(&Type::Boolean),
        TrinaryLogic::No
    );
}

#[test]
fn test_mixed_is_top() {
    for ty in sample_types() {
        assert_eq!(Type::Mixed.is_super_type_of(&ty), TrinaryLogic::Yes);
    }
    assert_eq!(
        Type::Integer.is_super_type_of(&Type::Mixed),
        TrinaryLogic::Maybe
    );
}

#[test]
fn test_union_covers_each_member() {
    let union = union_types(vec![Type::Integer, Type::String]);
    assert_eq!(union.is_super_type_of(&Type::Integer), TrinaryLogic::Yes);
    assert_eq!(union.is_super_type_of(&Type::String), TrinaryLogic::Yes);
    assert_eq!(union.is_super_type_of(&Type::Float), TrinaryLogic::No);
    // Covering a union requires covering every member; covering only
    // some of them is partial, not a definite no.
    let wider = union_types(vec![Type::Integer, Type::Float, Type::String]);
    assert_eq!(wider.is_super_type_of(&union), TrinaryLogic::Yes);
    assert_eq!(union.is_super_type_of(&wider), TrinaryLogic::Maybe);

    let disjoint = union_types(vec![Type::Boolean, Type::Null]);
    assert_eq!(union.is_super_type_of(&disjoint), TrinaryLogic::No);
}

#[test]
fn test_object_ancestry() {
    let base = Type::object("Base");
    let derived = Type::object_with_ancestors("Derived", ["Base".to_string()]);
    assert_eq!(base.is_super_type_of(&derived), TrinaryLogic::Yes);
    assert_eq!(derived.is_super_type_of(&base), TrinaryLogic::Maybe);
    assert_eq!(Type::any_object().is_super_type_of(&derived), TrinaryLogic::Yes);
    // Class names compare case-insensitively.
    assert_eq!(
        Type::object("base").is_super_type_of(&derived),
        TrinaryLogic::Yes
    );
}

#[test]
fn test_unrelated_objects_stay_undecided() {
    // Ancestry can prove a subtype relation but never disprove one: an
    // unseen subclass of B could implement A.
    let a = Type::object_with_ancestors("A", ["BaseA".to_string()]);
    let b = Type::object_with_ancestors("B", ["BaseB".to_string()]);
    assert_eq!(a.is_super_type_of(&b), TrinaryLogic::Maybe);
    assert_eq!(b.is_super_type_of(&a), TrinaryLogic::Maybe);
}

#[test]
fn test_object_does_not_cover_scalars() {
    assert_eq!(
        Type::any_object().is_super_type_of(&Type::Integer),
        TrinaryLogic::No
    );
    assert_eq!(
        Type::Integer.is_super_type_of(&Type::object("Foo")),
        TrinaryLogic::No
    );
}

#[test]
fn test_accepts_loose_scalar_coercion() {
    assert_eq!(Type::String.accepts(&Type::Integer, false), TrinaryLogic::Yes);
    assert_eq!(Type::String.accepts(&Type::Integer, true), TrinaryLogic::No);
    // Integer-to-float widening survives strict mode.
    assert_eq!(Type::Float.accepts(&Type::Integer, true), TrinaryLogic::Yes);
    assert_eq!(
        Type::String.accepts(&Type::any_object(), false),
        TrinaryLogic::No
    );
}

#[test]
fn test_number_union_accepts_numbers_only() {
    let number = union_types(vec![Type::Integer, Type::Float]);
    assert_eq!(number.accepts(&Type::Integer, true), TrinaryLogic::Yes);
    assert_eq!(number.accepts(&Type::Float, true), TrinaryLogic::Yes);
    assert_eq!(number.accepts(&Type::String, true), TrinaryLogic::No);
    assert_eq!(number.accepts(&Type::any_object(), true), TrinaryLogic::No);
}

#[test]
fn test_error_type_is_accepted_everywhere() {
    for ty in sample_types() {
        assert_eq!(ty.accepts(&Type::error(), true), TrinaryLogic::Yes);
    }
}

#[test]
fn test_nested_union_construction_is_rejected() {
    let inner = union_types(vec![Type::Integer, Type::String]);
    assert!(UnionType::new(vec![inner, Type::Float]).is_err());
    assert!(UnionType::new(vec![Type::Float]).is_err());
}

#[test]
fn test_constant_array_coverage() {
    let shape = Type::constant_array([("a".into(), Type::Integer), ("b".into(), Type::String)]);
    let narrower = Type::constant_array([
        ("a".into(), Type::ConstantInteger(1)),
        ("b".into(), Type::constant_string("x")),
    ]);
    assert_eq!(shape.is_super_type_of(&narrower), TrinaryLogic::Yes);
    assert_eq!(narrower.is_super_type_of(&shape), TrinaryLogic::Maybe);

    let different_keys = Type::constant_array([("c".into(), Type::Integer)]);
    assert_eq!(shape.is_super_type_of(&different_keys), TrinaryLogic::No);
}

#[test]
fn test_general_array_covers_matching_constant_array() {
    let general = Type::array_of(Type::String, Type::Integer);
    let constant = Type::constant_array([("a".into(), Type::ConstantInteger(3))]);
    assert_eq!(general.is_super_type_of(&constant), TrinaryLogic::Yes);

    let int_keyed = Type::constant_array([(0.into(), Type::Integer)]);
    assert_eq!(general.is_super_type_of(&int_keyed), TrinaryLogic::No);
}
