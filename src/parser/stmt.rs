use crate::{
    ast::{
        statements::{Param, Stmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Dispatches on the statement table. There is no expression-statement
/// fallback: a token without a statement handler cannot begin a statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind) {
        let handler = *handler;
        return handler(parser);
    }

    if kind == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_position(),
        ));
    }

    Err(Error::new(
        ErrorImpl::UnexpectedToken {
            token: parser.current_token().value.clone(),
        },
        parser.get_position(),
    ))
}

/// Every statement starting with a type keyword: plain declaration,
/// declare-assign, or function declaration. The token after the declared
/// name decides which.
pub fn parse_typed_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let ty = parse_type(parser, BindingPower::Default)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier after type"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    match parser.current_token_kind() {
        TokenKind::OpenParen => parse_func_decl_stmt(parser, ty, name),
        TokenKind::Assignment => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Newline)?;

            Ok(Stmt::DeclareAssign { ty, name, value })
        }
        _ => {
            parser.expect(TokenKind::Newline)?;

            Ok(Stmt::Declare { ty, name })
        }
    }
}

fn parse_func_decl_stmt(
    parser: &mut Parser,
    return_type: Type,
    name: String,
) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let ty = parse_type(parser, BindingPower::Default)?;
            let param_name = parser.expect(TokenKind::Identifier)?.value;
            params.push(Param {
                ty,
                name: param_name,
            });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Colon)?;

    let body = parse_block(parser)?;

    Ok(Stmt::FuncDeclare {
        return_type,
        name,
        params,
        body,
    })
}

/// `identifier assign_op expr`. Bare expressions are not statements in this
/// grammar, so an identifier at statement level must be an assignment head.
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.advance().value.clone();

    let op_kind = parser.current_token_kind();
    let is_assign_op = matches!(
        op_kind,
        TokenKind::Assignment
            | TokenKind::PlusEquals
            | TokenKind::MinusEquals
            | TokenKind::StarEquals
            | TokenKind::SlashEquals
            | TokenKind::PercentEquals
            | TokenKind::StarStarEquals
    );

    if !is_assign_op {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected an assignment operator"),
            },
            parser.get_position(),
        ));
    }

    let op = parser.advance().value.clone();
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Assign { name, op, value })
}

/// `enum name { members }`. Member order is preserved and duplicates pass
/// through untouched.
pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];

    if parser.current_token_kind() != TokenKind::CloseCurly {
        loop {
            members.push(parser.expect(TokenKind::Identifier)?.value);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::EnumDeclare { name, members })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Newline {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Return(value))
}

pub fn parse_pass_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Pass)
}

/// `block := NEWLINE INDENT stmt+ DEDENT`. A block with no statement is a
/// syntax error, never an empty body.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::Newline)?;
    parser.expect(TokenKind::Indent)?;

    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::Dedent
        && parser.current_token_kind() != TokenKind::EOF
    {
        body.push(parse_stmt(parser)?);
    }

    if body.is_empty() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("a block must contain at least one statement"),
            },
            parser.get_position(),
        ));
    }

    parser.expect(TokenKind::Dedent)?;

    Ok(body)
}
