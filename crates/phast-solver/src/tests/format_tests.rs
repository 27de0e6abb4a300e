use crate::VerbosityLevel;
use crate::types::Type;
use crate::{benevolent_union, union_types};

#[test]
fn test_scalar_rendering() {
    assert_eq!(Type::Integer.describe(VerbosityLevel::Value), "int");
    assert_eq!(Type::Null.describe(VerbosityLevel::TypeOnly), "null");
    assert_eq!(Type::Mixed.describe(VerbosityLevel::Value), "mixed");
}

#[test]
fn test_constants_render_values_only_at_value_level() {
    let constant = Type::constant_string("c");
    assert_eq!(constant.describe(VerbosityLevel::TypeOnly), "string");
    assert_eq!(constant.describe(VerbosityLevel::Value), "'c'");

    assert_eq!(
        Type::ConstantInteger(123).describe(VerbosityLevel::Value),
        "123"
    );
    assert_eq!(
        Type::ConstantFloat(1.0).describe(VerbosityLevel::Value),
        "1.0"
    );
    assert_eq!(
        Type::ConstantBoolean(true).describe(VerbosityLevel::Value),
        "true"
    );
}

#[test]
fn test_array_rendering() {
    assert_eq!(
        Type::array_of(Type::Mixed, Type::Mixed).describe(VerbosityLevel::Value),
        "array"
    );
    assert_eq!(
        Type::array_of(Type::Integer, Type::String).describe(VerbosityLevel::Value),
        "array<int, string>"
    );

    let shape = Type::constant_array([("a".into(), Type::Integer), ("b".into(), Type::String)]);
    assert_eq!(shape.describe(VerbosityLevel::TypeOnly), "array");
    assert_eq!(
        shape.describe(VerbosityLevel::Value),
        "array{a: int, b: string}"
    );

    let quoted = Type::constant_array([("not an ident".into(), Type::Integer)]);
    assert_eq!(
        quoted.describe(VerbosityLevel::Value),
        "array{'not an ident': int}"
    );
}

#[test]
fn test_object_rendering() {
    assert_eq!(
        Type::object("Foo\\Bar").describe(VerbosityLevel::Value),
        "Foo\\Bar"
    );
    assert_eq!(Type::any_object().describe(VerbosityLevel::Value), "object");
}

#[test]
fn test_union_rendering() {
    let union = union_types(vec![Type::Integer, Type::String]);
    assert_eq!(union.describe(VerbosityLevel::TypeOnly), "int|string");

    let loose = benevolent_union(vec![Type::Integer, Type::String]);
    assert_eq!(loose.describe(VerbosityLevel::TypeOnly), "(int|string)");
}

#[test]
fn test_error_rendering() {
    assert_eq!(Type::error().describe(VerbosityLevel::Value), "*ERROR*");
    assert_eq!(
        Type::error_for_class("Foo").describe(VerbosityLevel::Value),
        "*ERROR*"
    );
}
