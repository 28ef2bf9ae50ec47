use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

/// Returns the keyword kind for `identifier`, or `Identifier` when it is not reserved.
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(identifier)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    Identifier,
    Integer,

    Assign, // =
    Plus,
    Minus,
    Asterisk,
    Slash,

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Equal,    // ==
    NotEqual, // !=
    GreaterThan,
    LessThan,
    Bang,

    // Reserved
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

/// Renders the kind, plus the literal for tokens whose text varies.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Integer, TokenKind::Illegal]) {
            write!(f, "{} ({})", self.kind, self.literal)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}

impl Token {
    /// Builds a token with no source location, for hand-assembled trees.
    pub fn new(kind: TokenKind, literal: &str) -> Self {
        Token {
            kind,
            literal: String::from(literal),
            span: Span::null(),
        }
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
