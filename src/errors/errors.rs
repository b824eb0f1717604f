use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The two fatal error kinds the front end can raise. Either the scanner hit
/// a character no rule matches, or the parser hit a token stream no grammar
/// alternative matches. Neither is recoverable within a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnexpectedEndOfInput => ErrorCategory::Syntax,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a newline?",
                token.escape_debug()
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => ErrorTip::Suggestion(
                format!("Unexpected token: `{}`, {}", token.escape_debug(), message),
            ),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Input ended before the statement was complete",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
