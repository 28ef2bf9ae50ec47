use std::fmt::{Debug, Display};

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Defines the behavior shared by every node of the AST.
pub trait Node: Debug {
    /// Returns the literal of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Renders the node back to source text, parenthesizing every operator
    /// application so the nesting is visible.
    fn to_code(&self) -> String;
}

/// Renders an optional child, using the empty string for a missing one.
pub(crate) fn optional_code<T: Node>(node: Option<&T>) -> String {
    node.map(Node::to_code).unwrap_or_default()
}

/// Statement
///
/// The closed set of statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn to_code(&self) -> String {
        match self {
            Statement::Let(stmt) => stmt.to_code(),
            Statement::Return(stmt) => stmt.to_code(),
            Statement::Expression(stmt) => stmt.to_code(),
        }
    }
}

/// Expression
///
/// The set of expression kinds. Children are boxed so every node owns its
/// subtree outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
        }
    }
    fn to_code(&self) -> String {
        match self {
            Expression::Identifier(expr) => expr.to_code(),
            Expression::Integer(expr) => expr.to_code(),
            Expression::Prefix(expr) => expr.to_code(),
            Expression::Infix(expr) => expr.to_code(),
        }
    }
}

/// Program
///
/// The root of the AST: top level statements in program order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Node::token_literal)
            .unwrap_or("")
    }
    fn to_code(&self) -> String {
        self.statements
            .iter()
            .map(Node::to_code)
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}
