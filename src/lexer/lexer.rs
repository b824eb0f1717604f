use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref NEWLINE_RUNS: Regex = Regex::new("\n+").unwrap();
}

/// Collapses every run of newlines into a single newline followed by one
/// guard space, and strips leading blank space from the buffer start. Blank
/// lines therefore never reach the indentation rule, and every newline is
/// guaranteed to be followed by whitespace.
fn sanitize(source: &str) -> String {
    NEWLINE_RUNS
        .replace_all(source.trim_start(), "\n ")
        .into_owned()
}

/// Per-invocation scanner state. The indentation stack lives here, so it is
/// constructed fresh for every `tokenize` call and discarded with it;
/// independent parses never observe each other's block structure.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    line_start: usize,
    /// Widths of currently-open blocks. Bottom is always 0 and entries are
    /// strictly increasing bottom to top.
    indent_stack: Vec<u32>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            indent_stack: vec![0],
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn column(&self) -> u32 {
        (self.pos - self.line_start) as u32 + 1
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column(),
            file: Rc::clone(&self.file),
        }
    }

    pub fn span_here(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position {
                line: self.line,
                column: self.column() + len as u32,
                file: Rc::clone(&self.file),
            },
        }
    }

    fn after_newline(&self) -> bool {
        self.pos > 0 && self.source.as_bytes()[self.pos - 1] == b'\n'
    }
}

fn newline_handler(lexer: &mut Lexer, regex: &Regex) {
    let consumed = regex.find(lexer.remainder()).unwrap().end();

    let span = lexer.span_here(consumed);
    lexer.push(MK_TOKEN!(TokenKind::Newline, String::from("\n"), span));

    lexer.line += consumed as u32;
    lexer.advance_n(consumed);
    lexer.line_start = lexer.pos;
}

/// Whitespace runs do double duty. Immediately after a newline the run is an
/// indentation measure: its length minus the guard space is compared against
/// the indentation stack to decide between INDENT, DEDENT(s) and nothing.
/// Anywhere else the run is discarded.
fn whitespace_handler(lexer: &mut Lexer, regex: &Regex) {
    let consumed = regex.find(lexer.remainder()).unwrap().end();

    if !lexer.after_newline() {
        lexer.advance_n(consumed);
        return;
    }

    let width = consumed as u32 - 1;
    let top = *lexer.indent_stack.last().unwrap();

    if width > top {
        lexer.indent_stack.push(width);
        let span = lexer.span_here(consumed);
        lexer.push(MK_TOKEN!(TokenKind::Indent, width.to_string(), span));
    } else if width < top {
        while *lexer.indent_stack.last().unwrap() > width && lexer.indent_stack.len() > 1 {
            let popped = lexer.indent_stack.pop().unwrap();
            let span = lexer.span_here(consumed);
            lexer.push(MK_TOKEN!(TokenKind::Dedent, popped.to_string(), span));
        }
    }

    lexer.advance_n(consumed);
}

fn floating_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let span = lexer.span_here(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Floating, matched.clone(), span));
    lexer.advance_n(matched.len());
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let span = lexer.span_here(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, matched.clone(), span));
    lexer.advance_n(matched.len());
}

/// No escape processing: the stored content is the text between the quotes,
/// verbatim.
fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let content = String::from(&matched[1..matched.len() - 1]);

    let span = lexer.span_here(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, content, span));
    lexer.advance_n(matched.len());
}

fn boolean_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let span = lexer.span_here(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Boolean, matched.clone(), span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_here(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.clone(), span));
    lexer.advance_n(matched.len());
}

/// The scanner's rule table, in matching priority order. Structural rules
/// come first, literals before identifiers (floating before integer, boolean
/// before identifier), and fixed operators longest-specific-first so that
/// `**=` wins over `**` over `*=` over `*`.
fn patterns() -> Vec<RegexPattern> {
    vec![
        RegexPattern { regex: Regex::new("\n+").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("[ \t]+").unwrap(), handler: whitespace_handler },
        RegexPattern { regex: Regex::new("[0-9]+\\.[0-9]+").unwrap(), handler: floating_handler },
        RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("true|false").unwrap(), handler: boolean_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("\\*\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStarEquals, "**=") },
        RegexPattern { regex: Regex::new("\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**") },
        RegexPattern { regex: Regex::new("\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
        RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
        RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("=>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Exclamation, "!") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("@").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::At, "@") },
        RegexPattern { regex: Regex::new("\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ]
}

/// Scans a source buffer into an ordered, finite token sequence terminated
/// by an EOF token, or fails with a lexical error carrying the offending
/// character and its position. No partial token sequence is ever returned.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(sanitize(&source), file);
    let patterns = patterns();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let matches_here = pattern
                .regex
                .find(lex.remainder())
                .map(|m| m.start() == 0)
                .unwrap_or(false);

            if matches_here {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::IllegalCharacter { character: lex.at() },
                lex.position(),
            ));
        }
    }

    let span = lex.span_here(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
