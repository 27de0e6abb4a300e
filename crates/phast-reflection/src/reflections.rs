//! Reflection values handed out by the provider.
//!
//! Constructed once per resolution request from the underlying symbol
//! table and treated as read-only afterward. Each carries canonical
//! declared casing regardless of the spelling used to look it up.

use phast_common::TrinaryLogic;
use phast_solver::Type;

use crate::table::{ClassData, ClassKind, FunctionData, MethodData, PropertyData, SymbolTable};

/// A resolved class-like symbol.
#[derive(Clone, Copy, Debug)]
pub struct ClassReflection<'a> {
    pub(crate) table: &'a SymbolTable,
    pub(crate) data: &'a ClassData,
}

impl<'a> ClassReflection<'a> {
    /// Canonical declared name.
    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    pub fn kind(&self) -> ClassKind {
        self.data.kind
    }

    pub fn is_interface(&self) -> bool {
        self.data.kind == ClassKind::Interface
    }

    pub fn is_final(&self) -> bool {
        self.data.is_final
    }

    pub fn is_deprecated(&self) -> TrinaryLogic {
        self.data.is_deprecated
    }

    pub fn doc_comment(&self) -> Option<&'a str> {
        self.data.doc_comment.as_deref()
    }

    pub fn parent_class(&self) -> Option<ClassReflection<'a>> {
        let parent = self.data.parent.as_deref()?;
        self.table.class(parent).map(|data| ClassReflection {
            table: self.table,
            data,
        })
    }

    /// Canonical names of all ancestors: transitive parents plus every
    /// implemented interface, in discovery order.
    pub fn ancestor_names(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_ancestors(self.table, self.data, &mut out);
        out
    }

    /// Whether this class is `name` or descends from it (case-insensitive).
    pub fn is_subclass_of_or_equal(&self, name: &str) -> bool {
        if self.data.name.eq_ignore_ascii_case(name) {
            return true;
        }
        self.ancestor_names()
            .iter()
            .any(|ancestor| ancestor.eq_ignore_ascii_case(name))
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.find_property(name).is_some()
    }

    pub fn get_property(&self, name: &str) -> Option<PropertyReflection<'a>> {
        self.find_property(name)
            .map(|(owner, data)| PropertyReflection {
                declaring_class: owner,
                data,
            })
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.find_method(name).is_some()
    }

    pub fn get_method(&self, name: &str) -> Option<MethodReflection<'a>> {
        self.find_method(name)
            .map(|(owner, data)| MethodReflection {
                declaring_class: owner,
                data,
            })
    }

    /// The object type of instances of this class, with recorded ancestry
    /// so that relational queries stay context-free.
    pub fn instance_type(&self) -> Type {
        Type::object_with_ancestors(self.data.name.clone(), self.ancestor_names())
    }

    // Properties and methods resolve against this class first, then the
    // parent chain; the declaring class owns the member.
    fn find_property(&self, name: &str) -> Option<(&'a str, &'a PropertyData)> {
        let mut current = Some(self.data);
        while let Some(class) = current {
            if let Some(property) = class.properties.iter().find(|p| p.name == name) {
                return Some((class.name.as_str(), property));
            }
            current = class.parent.as_deref().and_then(|p| self.table.class(p));
        }
        None
    }

    fn find_method(&self, name: &str) -> Option<(&'a str, &'a MethodData)> {
        let mut current = Some(self.data);
        while let Some(class) = current {
            if let Some(method) = class
                .methods
                .iter()
                .find(|m| m.name.eq_ignore_ascii_case(name))
            {
                return Some((class.name.as_str(), method));
            }
            current = class.parent.as_deref().and_then(|p| self.table.class(p));
        }
        None
    }
}

fn collect_ancestors(table: &SymbolTable, class: &ClassData, out: &mut Vec<String>) {
    let mut push = |name: &str| {
        if let Some(data) = table.class(name) {
            if !out.iter().any(|seen| seen.eq_ignore_ascii_case(&data.name)) {
                out.push(data.name.clone());
                return Some(data);
            }
        } else if !out.iter().any(|seen| seen.eq_ignore_ascii_case(name)) {
            // Ancestor not in the table: keep the used spelling so subtype
            // queries still see it.
            out.push(name.to_string());
        }
        None
    };

    let mut pending = Vec::new();
    if let Some(parent) = class.parent.as_deref() {
        if let Some(data) = push(parent) {
            pending.push(data);
        }
    }
    for interface in &class.interfaces {
        if let Some(data) = push(interface) {
            pending.push(data);
        }
    }
    for data in pending {
        collect_ancestors(table, data, out);
    }
}

/// A resolved property, exclusively owned by its declaring class.
#[derive(Clone, Copy, Debug)]
pub struct PropertyReflection<'a> {
    declaring_class: &'a str,
    data: &'a PropertyData,
}

impl<'a> PropertyReflection<'a> {
    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    pub fn declaring_class(&self) -> &'a str {
        self.declaring_class
    }

    pub fn is_static(&self) -> bool {
        self.data.is_static
    }

    pub fn is_public(&self) -> bool {
        self.data.is_public
    }

    pub fn is_private(&self) -> bool {
        !self.data.is_public
    }

    pub fn readable_type(&self) -> &'a Type {
        &self.data.readable_type
    }

    pub fn writable_type(&self) -> &'a Type {
        &self.data.writable_type
    }

    pub fn can_change_type_after_assignment(&self) -> bool {
        self.data.can_change_type_after_assignment
    }

    pub fn is_deprecated(&self) -> TrinaryLogic {
        self.data.is_deprecated
    }

    pub fn is_internal(&self) -> TrinaryLogic {
        self.data.is_internal
    }

    pub fn doc_comment(&self) -> Option<&'a str> {
        self.data.doc_comment.as_deref()
    }
}

/// A resolved method; only what the rule catalog consumes.
#[derive(Clone, Copy, Debug)]
pub struct MethodReflection<'a> {
    declaring_class: &'a str,
    data: &'a MethodData,
}

impl<'a> MethodReflection<'a> {
    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    pub fn declaring_class(&self) -> &'a str {
        self.declaring_class
    }

    pub fn throw_classes(&self) -> &'a [String] {
        &self.data.throw_classes
    }
}

/// A resolved free function.
#[derive(Clone, Copy, Debug)]
pub struct FunctionReflection<'a> {
    pub(crate) data: &'a FunctionData,
}

impl<'a> FunctionReflection<'a> {
    /// Canonical declared name.
    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    pub fn is_deprecated(&self) -> TrinaryLogic {
        self.data.is_deprecated
    }
}
