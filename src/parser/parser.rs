//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens from a [`Lexer`] with one token of lookahead
//! and uses a Pratt parser approach with NUD/LED handlers for expression
//! parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How `let` and `return` statements treat the expression after `=` / `return`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementValues {
    /// Skip to the terminating semicolon and leave the value empty.
    #[default]
    Skip,
    /// Parse the value as an expression.
    Parse,
}

/// Where parsing resumes after a statement had to be abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Resume right after the token the failed statement stopped on.
    #[default]
    Advance,
    /// Resume after the next semicolon (or at end of input).
    SkipToSemicolon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub statement_values: StatementValues,
    pub recovery: Recovery,
}

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer it reads from, the current and next token,
/// the errors recorded so far and the lookup tables for parsing statements
/// and expressions.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    next: Token,
    /// Errors recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Behaviour switches
    config: ParserConfig,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser with the default configuration.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer positioned at the start of its source
    /// * `config` - Behaviour switches for statement values and recovery
    ///
    /// # Returns
    ///
    /// A Parser whose current and next tokens are the first two tokens of
    /// the source, with all lookup tables registered.
    pub fn with_config(mut lexer: Lexer, config: ParserConfig) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            next,
            errors: vec![],
            config,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn next_token(&self) -> &Token {
        &self.next
    }

    /// Returns the kind of the lookahead token.
    pub fn next_token_kind(&self) -> TokenKind {
        self.next.kind
    }

    /// Moves the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.next, next);
    }

    /// Advances onto the next token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) after advancing, otherwise an UnexpectedToken error
    /// positioned at the lookahead token. The cursor does not move on error.
    pub fn expect_next(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.next.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    actual: self.next.kind,
                },
                self.next.span.start.clone(),
            ));
        }

        self.advance();
        Ok(())
    }

    /// Advances until the current token is a semicolon or the end of input.
    pub fn skip_to_semicolon(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::EndOfInput
        ) {
            self.advance();
        }
    }

    /// Binding power of the current token, `Lowest` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Binding power of the lookahead token, `Lowest` for non-operators.
    pub fn next_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.next.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Records an error and carries on.
    pub fn push_error(&mut self, error: Error) {
        debug!("recorded parse error: {}", error);
        self.errors.push(error);
    }

    /// Errors recorded so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded errors rendered as messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
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

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// Every statement that could be built is kept; problems are recorded in
    /// [`Parser::errors`] instead of stopping the parse. The cursor moves one
    /// token per iteration whether or not a statement was produced.
    pub fn parse_program(&mut self) -> Program {
        info!("parsing {}", self.lexer.file());

        let mut program = Program::default();

        while self.current.kind != TokenKind::EndOfInput {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }

            self.advance();
        }

        info!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }
}

/// Parses everything `lexer` produces.
///
/// This is the main entry point for parsing. It creates a parser instance
/// with the default configuration and parses all statements until the end
/// of input.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the recorded errors
/// - The root of the AST, complete or best-effort
pub fn parse(lexer: Lexer) -> (Parser, Program) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (parser, program)
}
