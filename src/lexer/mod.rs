//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens on demand for the parser. It handles:
//!
//! - Skipping whitespace between tokens
//! - Recognition of keywords, identifiers and integer literals
//! - One and two character operators and punctuation
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
