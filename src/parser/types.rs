//! Type parsing implementation.
//!
//! This module handles parsing of type annotations: the five primitive
//! keywords and the array composition `type[]`, which nests by recursion
//! (`int[][]`).
//!
//! Like expression parsing, it uses NUD/LED handlers with binding powers,
//! with the primitive keywords as the leaves and `[` as the only infix.

use std::collections::HashMap;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Bool, parse_primitive_type);
    parser.type_nud(TokenKind::Int, parse_primitive_type);
    parser.type_nud(TokenKind::Double, parse_primitive_type);
    parser.type_nud(TokenKind::Str, parse_primitive_type);
    parser.type_nud(TokenKind::Void, parse_primitive_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_array_type);
}

/// True for the keywords that can begin a type annotation. Used by the
/// expression parser to tell a cast from a grouping after `(`.
pub fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Bool | TokenKind::Int | TokenKind::Double | TokenKind::Str | TokenKind::Void
    )
}

pub fn parse_primitive_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Bool => Ok(Type::Bool),
        TokenKind::Int => Ok(Type::Int),
        TokenKind::Double => Ok(Type::Double),
        TokenKind::Str => Ok(Type::Str),
        TokenKind::Void => Ok(Type::Void),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: Type,
    _bp: BindingPower,
) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Type::Array(Box::new(left)))
}

/// Pratt loop over the type tables, mirroring `parse_expr`.
pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
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
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let led_fn = match parser.get_type_led_lookup().get(&token_kind) {
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
