use crate::lexer::tokens::Token;

use super::{
    ast::{optional_code, Expression, Node},
    expressions::Identifier,
};

/// `let <name> = <value>;`
///
/// `value` stays empty while the parser skips statement values.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        format!(
            "{} {} = {};",
            self.token.literal,
            self.name.to_code(),
            optional_code(self.value.as_ref())
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        format!("{} {};", self.token.literal, optional_code(self.return_value.as_ref()))
    }
}

/// A bare expression used as a statement. The trailing semicolon is optional
/// in source and never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn to_code(&self) -> String {
        optional_code(self.expression.as_ref())
    }
}
