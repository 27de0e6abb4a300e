//! End-to-end scenarios for the extends/implements rules.

use phast_checker::ast::{Name, Node, NodeKind};
use phast_checker::case_sensitivity::ClassCaseSensitivityCheck;
use phast_checker::rule::Rule;
use phast_checker::rules::{ExistingClassInExtendsRule, ExistingClassesInImplementsRule};
use phast_checker::scope::Scope;
use phast_reflection::{ClassData, ClassKind, ReflectionProvider, SymbolTable};

fn table() -> SymbolTable {
    let mut table = SymbolTable::new();
    table.add_class(ClassData::plain("Foo\\Bar", ClassKind::Class));
    table.add_class(ClassData::plain("Foo\\Countable", ClassKind::Interface));
    table.add_class(ClassData::plain("Foo\\Stringable", ClassKind::Interface));
    table
}

fn class_decl(extends: Option<Name>, implements: Vec<Name>) -> Node {
    Node::new(
        1,
        2,
        NodeKind::ClassDecl {
            name: "App\\Thing".to_string(),
            extends,
            implements,
        },
    )
}

#[test]
fn test_unknown_parent_is_reported() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassInExtendsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(Some(Name::new("Foo\\Missing", 2)), Vec::new());

    let errors = rule.process_node(&node, &Scope::default()).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Class Foo\\Missing not found.");
    assert_eq!(errors[0].identifier(), Some("class.notFound"));
    assert_eq!(errors[0].line, Some(2));
}

#[test]
fn test_wrong_case_parent_is_reported() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassInExtendsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(Some(Name::new("foo\\bar", 2)), Vec::new());

    let errors = rule.process_node(&node, &Scope::default()).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "Class Foo\\Bar referenced with incorrect case: foo\\bar."
    );
    assert_eq!(errors[0].identifier(), Some("class.nameCase"));
}

#[test]
fn test_exact_parent_is_quiet() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassInExtendsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(Some(Name::new("Foo\\Bar", 2)), Vec::new());

    assert!(rule.process_node(&node, &Scope::default()).unwrap().is_empty());
}

#[test]
fn test_no_parent_is_quiet() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassInExtendsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(None, Vec::new());

    assert!(rule.process_node(&node, &Scope::default()).unwrap().is_empty());
}

#[test]
fn test_implements_reports_unknown_and_wrong_case_together() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassesInImplementsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(
        None,
        vec![
            Name::new("Foo\\Missing", 3),
            Name::new("foo\\countable", 4),
            Name::new("Foo\\Stringable", 5),
        ],
    );

    let errors = rule.process_node(&node, &Scope::default()).unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "Interface Foo\\Missing not found.");
    assert_eq!(errors[0].identifier(), Some("interface.notFound"));
    assert_eq!(errors[0].line, Some(3));
    assert_eq!(
        errors[1].message(),
        "Interface Foo\\Countable referenced with incorrect case: foo\\countable."
    );
    assert_eq!(errors[1].line, Some(4));
}

#[test]
fn test_empty_implements_is_quiet() {
    let table = table();
    let provider = ReflectionProvider::new(&table);
    let rule =
        ExistingClassesInImplementsRule::new(provider, ClassCaseSensitivityCheck::new(provider));
    let node = class_decl(None, Vec::new());

    assert!(rule.process_node(&node, &Scope::default()).unwrap().is_empty());
}
