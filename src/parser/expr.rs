use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    types::{parse_type, starts_type},
};

/// Pratt loop: parse a NUD for the current token, then fold LED operators
/// onto it while their binding power exceeds `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None if token_kind == TokenKind::EOF => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                parser.get_position(),
            ))
        }
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            }
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

/// Literal and identifier leaves. Literals keep their raw source text. An
/// identifier directly followed by `(` is a call; only bare identifiers can
/// be call targets.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => Ok(Expr::Integer(parser.advance().value.clone())),
        TokenKind::Floating => Ok(Expr::Floating(parser.advance().value.clone())),
        TokenKind::String => Ok(Expr::String(parser.advance().value.clone())),
        TokenKind::Boolean => Ok(Expr::Boolean(parser.advance().value.clone())),
        TokenKind::Identifier => {
            let name = parser.advance().value.clone();
            if parser.current_token_kind() == TokenKind::OpenParen {
                return parse_call_expr(parser, name);
            }
            Ok(Expr::Identifier(name))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let op = parser.advance().value.clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `**` reparses its right side one level down, so `2 ** 3 ** 4` nests as
/// `2 ** (3 ** 4)`.
pub fn parse_power_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let op = parser.advance().value.clone();
    let right = parse_expr(parser, BindingPower::Multiplicative)?;

    Ok(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_logical_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let op = parser.advance().value.clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Logical {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_comparison_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let op = parser.advance().value.clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Comparison {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Ternary conditional: `cond ? then ! else`. The else branch reparses at
/// `Default`, so chained ternaries nest rightward.
pub fn parse_conditional_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.advance();
    let then_branch = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Exclamation)?;
    let else_branch = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Conditional {
        condition: Box::new(left),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

/// Prefix `++`/`--`, restricted to a bare identifier operand.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let op = parser.advance().value.clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("prefix operators require an identifier operand"),
        },
        parser.get_position(),
    );
    let operand = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    Ok(Expr::Unary { op, operand })
}

/// NUD for `(`: either a parenthesized expression or a C-style cast. A type
/// keyword directly after the paren decides, since no expression can start
/// with one. Grouping is transparent and produces no node of its own; the
/// cast operand binds at prefix strength.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    if starts_type(parser.current_token_kind()) {
        let ty = parse_type(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseParen)?;
        let operand = parse_expr(parser, BindingPower::Unary)?;

        return Ok(Expr::Cast {
            ty,
            operand: Box::new(operand),
        });
    }

    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(inner)
}

fn parse_call_expr(parser: &mut Parser, name: String) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call { name, args })
}

/// Member access folds to the left: `a.b.c` is `access(access(a, b), c)`.
/// The right side is a leaf, including a call leaf.
pub fn parse_access_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let right = parse_expr(parser, BindingPower::Primary)?;

    Ok(Expr::Access {
        left: Box::new(left),
        right: Box::new(right),
    })
}
