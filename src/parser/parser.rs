//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the current position within it, and the lookup
/// tables for statements, expressions, and types.
pub struct Parser {
    /// The list of tokens to parse; always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    type_binding_power_lookup: TypeBPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing. The stream is always
    /// EOF-terminated, so past-the-end reads clamp to the EOF token.
    pub fn current_token(&self) -> &Token {
        match self.tokens.get(self.pos) {
            Some(token) => token,
            None => &self.tokens[self.tokens.len() - 1],
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the token that was current.
    /// The position never moves past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token on a match. On a mismatch, returns the
    /// supplied error if any; otherwise an unexpected-token error, or the
    /// explicit end-of-input error when the stream ran out.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None if kind == TokenKind::EOF => Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    token.span.start.clone(),
                )),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns true while unconsumed tokens remain before EOF.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type binding power lookup table.
    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Returns a reference to the type LED lookup table.
    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type left denotation handler.
    pub fn type_led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        led_fn: TypeLEDHandler,
    ) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_binding_power_lookup
            .insert(kind, BindingPower::Primary);
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token, or the buffer start
    /// if the stream is empty.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => Position {
                line: 1,
                column: 1,
                file: Rc::clone(&self.file),
            },
        }
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses statements until EOF. The
/// grammar requires at least one statement, so an empty stream is a syntax
/// error. The first failure aborts the parse; no partial Program is
/// returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut program = vec![];

    while parser.has_tokens() {
        program.push(parse_stmt(&mut parser)?);
    }

    if program.is_empty() {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_position(),
        ));
    }

    Ok(program)
}
