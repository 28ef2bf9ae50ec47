use crate::lexer::tokens::Token;

use super::ast::{optional_code, Expression, Node};

// LITERALS

/// Identifier Expression
/// Represents a name in the AST, both as a value and as a `let` target.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Builds an identifier named after its token's literal.
    pub fn new(token: Token) -> Self {
        Identifier {
            value: token.literal.clone(),
            token,
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        self.value.clone()
    }
}

/// Integer Expression
/// Represents a decimal integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        self.value.to_string()
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to the expression on its right, e.g. `-x` or `!ok`.
/// `right` is empty when the operand failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        format!("({}{})", self.operator, optional_code(self.right.as_deref()))
    }
}

/// Infix Expression
/// A binary operator between two operands. The token is the operator itself.
/// `right` is empty when the right operand failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        format!(
            "({} {} {})",
            self.left.to_code(),
            self.operator,
            optional_code(self.right.as_deref())
        )
    }
}
