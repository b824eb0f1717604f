/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - statements: Definitions for the statement variants
/// - expressions: Definitions for the expression variants
/// - types: Definitions for type representations in the AST
pub mod expressions;
pub mod statements;
pub mod types;

use statements::Stmt;

/// The ordered sequence of top-level statements produced by a parse.
/// Source order is preserved verbatim.
pub type Program = Vec<Stmt>;
