use super::types::Type;

/// Expression node.
///
/// One variant per expression kind the grammar can produce. Literal variants
/// carry their raw source text; turning `"42"` into a native integer is the
/// consumer's job, not the front end's. Operator fields hold the operator's
/// source spelling (`"+"`, `"&&"`, `"=="`).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Arithmetic operation: `+ - * / % **`.
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Prefix increment/decrement on a bare identifier: `++x`, `--x`.
    Unary { op: String, operand: String },
    /// Logical connective: `&&` or `||`.
    Logical {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Comparison: `== != < > <= >=`.
    Comparison {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Ternary conditional, spelled `cond ? then ! else`.
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// Member access: `left.right`. Chains fold to the left.
    Access { left: Box<Expr>, right: Box<Expr> },
    Integer(String),
    String(String),
    Boolean(String),
    Floating(String),
    Identifier(String),
    /// C-style cast: `(type) expr`.
    Cast { ty: Type, operand: Box<Expr> },
    /// Call of a named function: `name(args)`.
    Call { name: String, args: Vec<Expr> },
}
