use crate::types::Type;
use crate::union_types;
use phast_common::TrinaryLogic;

fn shape() -> Type {
    Type::constant_array([("a".into(), Type::Integer), ("b".into(), Type::String)])
}

#[test]
fn test_offset_accessible_basics() {
    assert_eq!(shape().is_offset_accessible(), TrinaryLogic::Yes);
    assert_eq!(Type::String.is_offset_accessible(), TrinaryLogic::Yes);
    assert_eq!(Type::Integer.is_offset_accessible(), TrinaryLogic::No);
    assert_eq!(Type::Null.is_offset_accessible(), TrinaryLogic::No);
    assert_eq!(Type::Mixed.is_offset_accessible(), TrinaryLogic::Maybe);
}

#[test]
fn test_offset_accessible_objects() {
    // Unknown class: cannot rule the offset interface out.
    assert_eq!(Type::any_object().is_offset_accessible(), TrinaryLogic::Maybe);
    assert_eq!(Type::object("Foo").is_offset_accessible(), TrinaryLogic::Maybe);
    let collection =
        Type::object_with_ancestors("Collection", ["ArrayAccess".to_string()]);
    assert_eq!(collection.is_offset_accessible(), TrinaryLogic::Yes);
    let plain = Type::object_with_ancestors("Plain", ["Base".to_string()]);
    assert_eq!(plain.is_offset_accessible(), TrinaryLogic::No);
}

#[test]
fn test_offset_accessible_union_disagreement() {
    let mixed_bag = union_types(vec![
        Type::array_of(Type::Integer, Type::String),
        Type::Integer,
    ]);
    assert_eq!(mixed_bag.is_offset_accessible(), TrinaryLogic::Maybe);
}

#[test]
fn test_constant_array_known_offsets() {
    let base = shape();
    assert_eq!(
        base.has_offset_value_type(&Type::constant_string("a")),
        TrinaryLogic::Yes
    );
    assert_eq!(
        base.has_offset_value_type(&Type::constant_string("c")),
        TrinaryLogic::No
    );
    assert_eq!(
        base.has_offset_value_type(&Type::ConstantInteger(0)),
        TrinaryLogic::No
    );
    // A general string offset may hit either string key.
    assert_eq!(
        base.has_offset_value_type(&Type::String),
        TrinaryLogic::Maybe
    );
    assert_eq!(
        base.has_offset_value_type(&Type::Integer),
        TrinaryLogic::No
    );
}

#[test]
fn test_constant_array_union_offset() {
    let base = shape();
    let known_keys = union_types(vec![
        Type::constant_string("a"),
        Type::constant_string("b"),
    ]);
    assert_eq!(base.has_offset_value_type(&known_keys), TrinaryLogic::Yes);

    let partially_known = union_types(vec![
        Type::constant_string("a"),
        Type::constant_string("c"),
    ]);
    assert_eq!(
        base.has_offset_value_type(&partially_known),
        TrinaryLogic::Maybe
    );

    let unknown_keys = union_types(vec![
        Type::constant_string("c"),
        Type::constant_string("d"),
    ]);
    assert_eq!(base.has_offset_value_type(&unknown_keys), TrinaryLogic::No);
}

#[test]
fn test_general_array_offsets_are_maybe() {
    let array = Type::array_of(Type::String, Type::Integer);
    assert_eq!(
        array.has_offset_value_type(&Type::constant_string("a")),
        TrinaryLogic::Maybe
    );
    assert_eq!(
        array.has_offset_value_type(&Type::any_object()),
        TrinaryLogic::No
    );
}

#[test]
fn test_string_offsets() {
    assert_eq!(
        Type::String.has_offset_value_type(&Type::Integer),
        TrinaryLogic::Maybe
    );
    assert_eq!(
        Type::String.has_offset_value_type(&Type::constant_string("a")),
        TrinaryLogic::No
    );
    let hello = Type::constant_string("hello");
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(4)),
        TrinaryLogic::Yes
    );
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(5)),
        TrinaryLogic::No
    );
    // Negative offsets count from the end.
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(-5)),
        TrinaryLogic::Yes
    );
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(-6)),
        TrinaryLogic::No
    );
}

#[test]
fn test_string_offset_extremes_are_out_of_range() {
    let hello = Type::constant_string("hello");
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(i64::MAX)),
        TrinaryLogic::No
    );
    assert_eq!(
        hello.has_offset_value_type(&Type::ConstantInteger(i64::MIN)),
        TrinaryLogic::No
    );
}

#[test]
fn test_union_base_offsets() {
    let base = union_types(vec![
        Type::constant_array([("a".into(), Type::Integer)]),
        Type::constant_array([("b".into(), Type::Integer)]),
    ]);
    // Present in one member shape, absent in the other.
    assert_eq!(
        base.has_offset_value_type(&Type::constant_string("a")),
        TrinaryLogic::Maybe
    );
    assert_eq!(
        base.has_offset_value_type(&Type::constant_string("z")),
        TrinaryLogic::No
    );
}

#[test]
fn test_is_array() {
    assert_eq!(shape().is_array(), TrinaryLogic::Yes);
    assert_eq!(
        Type::array_of(Type::Mixed, Type::Mixed).is_array(),
        TrinaryLogic::Yes
    );
    assert_eq!(Type::String.is_array(), TrinaryLogic::No);
    assert_eq!(Type::Mixed.is_array(), TrinaryLogic::Maybe);
    let partial = union_types(vec![Type::array_of(Type::Mixed, Type::Mixed), Type::Null]);
    assert_eq!(partial.is_array(), TrinaryLogic::Maybe);
}
