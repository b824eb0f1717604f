use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("bool", TokenKind::Bool);
        map.insert("int", TokenKind::Int);
        map.insert("double", TokenKind::Double);
        map.insert("str", TokenKind::Str);
        map.insert("enum", TokenKind::Enum);
        map.insert("return", TokenKind::Return);
        map.insert("when", TokenKind::When);
        map.insert("otherwise", TokenKind::Otherwise);
        map.insert("pass", TokenKind::Pass);
        map.insert("class", TokenKind::Class);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Structural tokens, synthesized from whitespace layout
    Newline,
    Indent,
    Dedent,

    Integer,
    Floating,
    String,
    Boolean,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment,      // =
    PlusEquals,      // +=
    MinusEquals,     // -=
    StarEquals,      // *=
    SlashEquals,     // /=
    PercentEquals,   // %=
    StarStarEquals,  // **=

    Equals,          // ==
    NotEquals,       // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    Or,
    And,

    Dot,
    Comma,
    Colon,
    At,
    Exclamation,
    Question,
    Arrow,           // =>

    Plus,
    Dash,
    PlusPlus,
    MinusMinus,
    Slash,
    Star,
    Percent,
    StarStar,

    // Reserved words. When, Otherwise and Class are recognized here but have
    // no grammar production.
    Bool,
    Int,
    Double,
    Str,
    Enum,
    Return,
    When,
    Otherwise,
    Pass,
    Class,
    Void,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single token. `value` is the raw lexeme; for `Indent`/`Dedent` it holds
/// the decimal indentation width the token carries.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Floating,
            TokenKind::Boolean,
            TokenKind::Indent,
            TokenKind::Dedent,
        ]) {
            println!("{} ({})", self.kind, self.value.escape_debug());
        } else {
            println!("{} ()", self.kind);
        }
    }
}
