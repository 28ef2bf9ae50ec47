use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over one source string.
///
/// Each call to [`Lexer::next_token`] skips whitespace and produces exactly one
/// token. Once the input is exhausted every further call yields `EndOfInput`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
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
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// The name used in the positions of every token this lexer produces.
    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the current one, without consuming either.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    /// Consumes the maximal run matching `pattern` at the cursor.
    fn read_pattern(&mut self, pattern: &Regex) -> Option<String> {
        let matched = pattern.find(self.remainder())?.as_str().to_string();
        self.advance_n(matched.len());
        Some(matched)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;

        let token = if self.at_eof() {
            MK_TOKEN!(TokenKind::EndOfInput, String::new(), MK_SPAN!(start, start, self.file))
        } else if let Some(word) = self.read_pattern(&IDENTIFIER_PATTERN) {
            MK_TOKEN!(lookup_identifier(&word), word, MK_SPAN!(start, self.pos, self.file))
        } else if let Some(digits) = self.read_pattern(&INTEGER_PATTERN) {
            MK_TOKEN!(TokenKind::Integer, digits, MK_SPAN!(start, self.pos, self.file))
        } else {
            // Not at end of input, so there is a character under the cursor.
            let current = self.at().unwrap_or_default();
            let (kind, width) = match (current, self.peek()) {
                ('=', Some('=')) => (TokenKind::Equal, 2),
                ('!', Some('=')) => (TokenKind::NotEqual, 2),
                ('=', _) => (TokenKind::Assign, 1),
                ('!', _) => (TokenKind::Bang, 1),
                ('+', _) => (TokenKind::Plus, 1),
                ('-', _) => (TokenKind::Minus, 1),
                ('*', _) => (TokenKind::Asterisk, 1),
                ('/', _) => (TokenKind::Slash, 1),
                ('<', _) => (TokenKind::LessThan, 1),
                ('>', _) => (TokenKind::GreaterThan, 1),
                ('(', _) => (TokenKind::LParen, 1),
                (')', _) => (TokenKind::RParen, 1),
                ('{', _) => (TokenKind::LBrace, 1),
                ('}', _) => (TokenKind::RBrace, 1),
                (',', _) => (TokenKind::Comma, 1),
                (';', _) => (TokenKind::Semicolon, 1),
                _ => (TokenKind::Illegal, current.len_utf8()),
            };

            let literal = String::from(&self.remainder()[..width]);
            self.advance_n(width);
            MK_TOKEN!(kind, literal, MK_SPAN!(start, self.pos, self.file))
        };

        trace!("lexed {} {:?} at {}", token.kind, token.literal, start);
        token
    }
}

/// Scans all of `source`, returning every token up to and including `EndOfInput`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
