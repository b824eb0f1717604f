#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in a source buffer.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// The grammar requires every statement line to end in a newline, so a
/// buffer that does not end with one gets one appended before scanning.
pub fn ensure_newline_at_end(source: String) -> String {
    if source.ends_with('\n') {
        source
    } else {
        source + "\n"
    }
}

/// Runs the whole front end: trailing-newline normalization, scan, parse.
/// A pure function from a source buffer to a Program or the first error;
/// no state survives the call.
pub fn parse_program(source: String, file: Option<String>) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(ensure_newline_at_end(source), file)?;
    parse(tokens, file_name)
}

/// Renders an error against the source text it came from:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `+`, did you miss a newline?)
/// -> final.lang
///    |
/// 20 | a = +
///    | ----^
/// ```
pub fn display_error(error: &Error, source: &str) {
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);

    let line_text = match source.lines().nth(position.line as usize - 1) {
        Some(line_text) => line_text,
        None => return,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
