//! Syntax-node contract.
//!
//! The parser producing these nodes is an external collaborator; this
//! module only fixes the shape the rule catalog consumes: opaque node
//! identity, a closed kind discriminator, access to declared
//! sub-structure, and a source line. Node kinds form a closed sum so
//! that dispatch and rules match exhaustively.

/// Opaque node identity; unique within one analyzed unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A symbol name together with its source line.
///
/// Used wherever a rule needs to report a finding at the exact spelling
/// site (extends/implements/use clauses, throws declarations).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    pub text: String,
    pub line: u32,
}

impl Name {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// Comparison operators with the language's loose semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Smaller,
    SmallerOrEqual,
    Greater,
    GreaterOrEqual,
    Spaceship,
}

impl ComparisonOp {
    /// The operator's source sigil, for diagnostics.
    pub fn sigil(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Smaller => "<",
            ComparisonOp::SmallerOrEqual => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterOrEqual => ">=",
            ComparisonOp::Spaceship => "<=>",
        }
    }
}

/// Binary operators the catalog distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOpKind {
    Comparison(ComparisonOp),
    Concat,
    Add,
}

/// What a use declaration imports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UseKind {
    Class,
    Function,
    Constant,
    /// Unclassified import; reaching a rule with one is an analyzer bug.
    Unknown,
}

/// Closed sum of node shapes.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// A variable reference.
    Variable(String),
    /// An integer literal.
    IntLiteral(i64),
    /// A string literal.
    StringLiteral(String),
    /// An array literal with its element expressions.
    ArrayLiteral(Vec<Node>),
    /// Index/key access: `base[index]`, index absent in append position.
    OffsetAccess {
        base: Box<Node>,
        index: Option<Box<Node>>,
    },
    /// Plain assignment: `target = value`.
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    BinaryOp {
        op: BinaryOpKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    ClassDecl {
        name: String,
        extends: Option<Name>,
        implements: Vec<Name>,
    },
    UseDecl {
        kind: UseKind,
        uses: Vec<Name>,
    },
    MethodDecl {
        class_name: Option<String>,
        name: String,
        /// Classes named in the declared throws clause.
        declared_throws: Vec<Name>,
        /// Classes thrown anywhere in the body, as collected by the
        /// external pass.
        throw_points: Vec<Name>,
        overrides_parent: bool,
    },
    StmtList(Vec<Node>),
}

/// Fieldless discriminator rules register against.
///
/// Rules declare exactly one kind; there is no wildcard or inheritance
/// matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Variable,
    IntLiteral,
    StringLiteral,
    ArrayLiteral,
    OffsetAccess,
    Assign,
    BinaryOp,
    ClassDecl,
    UseDecl,
    MethodDecl,
    StmtList,
}

/// One syntax-tree node.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub line: u32,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: u32, line: u32, kind: NodeKind) -> Self {
        Self {
            id: NodeId(id),
            line,
            kind,
        }
    }

    /// The kind discriminator used for rule registration.
    pub fn syntax_kind(&self) -> SyntaxKind {
        match &self.kind {
            NodeKind::Variable(_) => SyntaxKind::Variable,
            NodeKind::IntLiteral(_) => SyntaxKind::IntLiteral,
            NodeKind::StringLiteral(_) => SyntaxKind::StringLiteral,
            NodeKind::ArrayLiteral(_) => SyntaxKind::ArrayLiteral,
            NodeKind::OffsetAccess { .. } => SyntaxKind::OffsetAccess,
            NodeKind::Assign { .. } => SyntaxKind::Assign,
            NodeKind::BinaryOp { .. } => SyntaxKind::BinaryOp,
            NodeKind::ClassDecl { .. } => SyntaxKind::ClassDecl,
            NodeKind::UseDecl { .. } => SyntaxKind::UseDecl,
            NodeKind::MethodDecl { .. } => SyntaxKind::MethodDecl,
            NodeKind::StmtList(_) => SyntaxKind::StmtList,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::OffsetAccess { base, index } => {
                let mut out = vec![base.as_ref()];
                if let Some(index) = index {
                    out.push(index.as_ref());
                }
                out
            }
            NodeKind::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            NodeKind::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::ArrayLiteral(items) | NodeKind::StmtList(items) => items.iter().collect(),
            NodeKind::Variable(_)
            | NodeKind::IntLiteral(_)
            | NodeKind::StringLiteral(_)
            | NodeKind::ClassDecl { .. }
            | NodeKind::UseDecl { .. }
            | NodeKind::MethodDecl { .. } => Vec::new(),
        }
    }
}
