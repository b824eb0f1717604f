use super::{expressions::Expr, types::Type};

/// A typed parameter in a function signature, the same `type name` shape as
/// a plain declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Type,
    pub name: String,
}

/// Statement node.
///
/// Nodes are built once, bottom-up, and never mutated afterwards; consumers
/// pattern-match on the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `type name`
    Declare { ty: Type, name: String },
    /// `name op expr` where op is one of `= += -= *= /= %= **=`.
    /// The operator is carried as its source spelling.
    Assign { name: String, op: String, value: Expr },
    /// `type name = expr`
    DeclareAssign { ty: Type, name: String, value: Expr },
    /// `enum name { members }`. Member order is preserved; uniqueness is not
    /// enforced here.
    EnumDeclare { name: String, members: Vec<String> },
    Pass,
    Return(Option<Expr>),
    /// `type name(params): block`
    FuncDeclare {
        return_type: Type,
        name: String,
        params: Vec<Param>,
        body: Vec<Stmt>,
    },
}
