use crate::types::Type;
use crate::{benevolent_union, flatten_types, union_types};

#[test]
fn test_union_flattens_nested_unions() {
    let inner = union_types(vec![Type::String, Type::Float]);
    let outer = union_types(vec![Type::Integer, inner]);
    let leaves = flatten_types(&outer);
    let rendered: Vec<_> = leaves
        .iter()
        .map(|ty| ty.describe(crate::VerbosityLevel::TypeOnly))
        .collect();
    assert_eq!(rendered, ["int", "string", "float"]);
}

#[test]
fn test_union_deduplicates_members() {
    let union = union_types(vec![Type::Integer, Type::String, Type::Integer]);
    assert_eq!(flatten_types(&union).len(), 2);
}

#[test]
fn test_union_collapses_to_single_member() {
    assert!(union_types(vec![Type::Integer]).equals(&Type::Integer));
    assert!(union_types(vec![Type::Integer, Type::Integer]).equals(&Type::Integer));
}

#[test]
fn test_union_absorbs_covered_members() {
    // int | 5 is just int.
    let union = union_types(vec![Type::Integer, Type::ConstantInteger(5)]);
    assert!(union.equals(&Type::Integer));

    // mixed absorbs everything.
    let top = union_types(vec![Type::Mixed, Type::Integer, Type::String]);
    assert!(top.equals(&Type::Mixed));
}

#[test]
fn test_flatten_of_single_type_is_singleton() {
    let leaves = flatten_types(&Type::Boolean);
    assert_eq!(leaves.len(), 1);
    assert!(leaves[0].equals(&Type::Boolean));
}

#[test]
fn test_benevolent_union_keeps_variant() {
    let loose = benevolent_union(vec![Type::Integer, Type::String]);
    assert!(matches!(loose, Type::BenevolentUnion(_)));
    assert_eq!(flatten_types(&loose).len(), 2);
}

#[test]
fn test_empty_union_is_mixed() {
    assert!(union_types(Vec::new()).equals(&Type::Mixed));
}
