use log::debug;

use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::{Parser, Recovery, StatementValues};

/// Parses the statement starting at the current token.
///
/// Returns `None` when the statement had to be abandoned; the reason is
/// recorded on the parser.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let kind = parser.current_token_kind();
    debug!("parsing statement starting with {}", kind);

    let stmt_fn = parser.get_stmt_lookup().get(&kind).copied();
    let result = match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    };

    match result {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.push_error(error);

            if parser.config().recovery == Recovery::SkipToSemicolon {
                parser.skip_to_semicolon();
            }

            None
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_next(TokenKind::Identifier)?;
    let name = Identifier::new(parser.current_token().clone());

    parser.expect_next(TokenKind::Assign)?;
    let value = parse_stmt_value(parser);

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let return_value = if parser.next_token_kind() == TokenKind::Semicolon {
        parser.advance();
        None
    } else {
        parse_stmt_value(parser)
    };

    Ok(Statement::Return(ReturnStatement {
        token,
        return_value,
    }))
}

/// Handles the value of a `let` or `return`, starting on the token before it
/// and finishing on the terminating semicolon when there is one.
fn parse_stmt_value(parser: &mut Parser) -> Option<Expression> {
    if parser.config().statement_values == StatementValues::Skip {
        parser.skip_to_semicolon();
        return None;
    }

    parser.advance();

    match parse_expr(parser, BindingPower::Lowest) {
        Ok(value) => {
            if parser.next_token_kind() == TokenKind::Semicolon {
                parser.advance();
            }

            Some(value)
        }
        Err(error) => {
            parser.push_error(error);
            parser.skip_to_semicolon();
            None
        }
    }
}

/// Expression statements never fail as a whole: a broken expression leaves
/// the slot empty. The trailing semicolon is optional.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = match parse_expr(parser, BindingPower::Lowest) {
        Ok(expression) => Some(expression),
        Err(error) => {
            parser.push_error(error);
            None
        }
    };

    if parser.next_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}
