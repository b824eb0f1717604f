use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest binding. Left-associative
/// operators reparse their right side at their own level; `**` reparses at
/// `Multiplicative` and is therefore right-associative; `.` parses its right
/// side at `Primary` so member chains fold to the left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    LogicalOr,
    LogicalAnd,
    Comparison,
    Additive,
    Multiplicative,
    Power,
    Unary,
    Call,
    Member,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Ternary conditional, lowest-binding expression operator
    parser.led(TokenKind::Question, BindingPower::Ternary, parse_conditional_expr);

    // Logical, || looser than &&
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_logical_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_logical_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_comparison_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Exponentiation, right-associative
    parser.led(TokenKind::StarStar, BindingPower::Power, parse_power_expr);

    // Member access
    parser.led(TokenKind::Dot, BindingPower::Member, parse_access_expr);

    // Literals and symbols. Calls hang off the identifier NUD since only a
    // bare identifier can be a call target.
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Floating, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Boolean, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::PlusPlus, parse_prefix_expr);
    parser.nud(TokenKind::MinusMinus, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Bool, parse_typed_decl_stmt);
    parser.stmt(TokenKind::Int, parse_typed_decl_stmt);
    parser.stmt(TokenKind::Double, parse_typed_decl_stmt);
    parser.stmt(TokenKind::Str, parse_typed_decl_stmt);
    parser.stmt(TokenKind::Void, parse_typed_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_assign_stmt);
    parser.stmt(TokenKind::Enum, parse_enum_decl_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Pass, parse_pass_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
