//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position {
        line,
        column,
        file: Rc::new("test.lang".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '$' },
        position(1, 1),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "enum".to_string(),
        },
        position(3, 7),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_lexical_category() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '~' },
        position(1, 1),
    );

    assert_eq!(error.category(), ErrorCategory::Lexical);
}

#[test]
fn test_syntax_categories() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(1, 1),
    );
    let detailed = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "+=".to_string(),
            message: "expected identifier after type".to_string(),
        },
        position(1, 1),
    );
    let eof = Error::new(ErrorImpl::UnexpectedEndOfInput, position(1, 1));

    assert_eq!(unexpected.category(), ErrorCategory::Syntax);
    assert_eq!(detailed.category(), ErrorCategory::Syntax);
    assert_eq!(eof.category(), ErrorCategory::Syntax);
}

#[test]
fn test_illegal_character_has_no_tip() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '$' },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(1, 1),
    );

    let tip = format!("{}", error.get_tip());
    assert!(tip.contains('}'));
    assert!(tip.contains("newline"));
}

#[test]
fn test_detailed_tip_carries_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "1".to_string(),
            message: "prefix operators require an identifier operand".to_string(),
        },
        position(2, 5),
    );

    let tip = format!("{}", error.get_tip());
    assert!(tip.contains("prefix operators require an identifier operand"));
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "]".to_string(),
        },
        position(4, 12),
    );

    let rendered = format!("{}", error);
    assert!(rendered.contains("line 4"));
    assert!(rendered.contains("column 12"));
}

#[test]
fn test_end_of_input_display() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, position(1, 9));

    assert!(format!("{}", error).contains("unexpected end of input"));
}
