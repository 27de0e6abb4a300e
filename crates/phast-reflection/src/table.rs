//! The raw symbol backing store.
//!
//! Plain data filled in by whoever loads declarations (out of scope
//! here); lookups are keyed by lowercased name while entries keep their
//! canonical declared spelling.

use rustc_hash::FxHashMap;

use phast_common::TrinaryLogic;
use phast_solver::Type;

/// Whether a class-like symbol was declared as a class or an interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Declaration data for one class-like symbol.
#[derive(Clone, Debug)]
pub struct ClassData {
    /// Canonical declared casing.
    pub name: String,
    pub kind: ClassKind,
    pub parent: Option<String>,
    pub interfaces: Vec<String>,
    pub is_final: bool,
    pub is_deprecated: TrinaryLogic,
    pub doc_comment: Option<String>,
    pub properties: Vec<PropertyData>,
    pub methods: Vec<MethodData>,
}

impl ClassData {
    /// A class with no members, no parent, nothing deprecated.
    pub fn plain(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            is_final: false,
            is_deprecated: TrinaryLogic::No,
            doc_comment: None,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_interfaces(mut self, interfaces: impl IntoIterator<Item = String>) -> Self {
        self.interfaces = interfaces.into_iter().collect();
        self
    }

    pub fn with_property(mut self, property: PropertyData) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodData) -> Self {
        self.methods.push(method);
        self
    }
}

/// Declaration data for one property.
///
/// Readable and writable types may differ: a property can be widened on
/// write and narrowed on read.
#[derive(Clone, Debug)]
pub struct PropertyData {
    pub name: String,
    pub is_static: bool,
    pub is_public: bool,
    pub readable_type: Type,
    pub writable_type: Type,
    pub can_change_type_after_assignment: bool,
    pub is_deprecated: TrinaryLogic,
    pub is_internal: TrinaryLogic,
    pub doc_comment: Option<String>,
}

impl PropertyData {
    /// A public dynamic property readable and writable as `ty`.
    pub fn public(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            is_public: true,
            readable_type: ty.clone(),
            writable_type: ty,
            can_change_type_after_assignment: true,
            is_deprecated: TrinaryLogic::No,
            is_internal: TrinaryLogic::No,
            doc_comment: None,
        }
    }
}

/// Declaration data for one method; only what the rule catalog consumes.
#[derive(Clone, Debug)]
pub struct MethodData {
    pub name: String,
    /// Classes listed in the method's declared throws clause.
    pub throw_classes: Vec<String>,
}

/// Declaration data for one free function.
#[derive(Clone, Debug)]
pub struct FunctionData {
    /// Canonical declared casing.
    pub name: String,
    pub is_deprecated: TrinaryLogic,
}

/// The symbol table: case-insensitive keyed maps of all known symbols.
///
/// Read-only during an analysis pass; safe to query from parallel file
/// analyses.
#[derive(Debug, Default)]
pub struct SymbolTable {
    classes: FxHashMap<String, ClassData>,
    functions: FxHashMap<String, FunctionData>,
    constants: FxHashMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassData) {
        self.classes.insert(class.name.to_lowercase(), class);
    }

    pub fn add_function(&mut self, function: FunctionData) {
        self.functions
            .insert(function.name.to_lowercase(), function);
    }

    pub fn add_constant(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.constants.insert(name.to_lowercase(), name);
    }

    pub(crate) fn class(&self, name: &str) -> Option<&ClassData> {
        self.classes.get(&name.to_lowercase())
    }

    pub(crate) fn function(&self, name: &str) -> Option<&FunctionData> {
        self.functions.get(&name.to_lowercase())
    }

    pub(crate) fn constant(&self, name: &str) -> Option<&str> {
        self.constants.get(&name.to_lowercase()).map(String::as_str)
    }
}
