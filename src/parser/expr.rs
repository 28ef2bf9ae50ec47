use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop. Starts on the first token of the expression and leaves the
/// parser on its last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFunction { kind: token_kind },
                parser.current_token().span.start.clone(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than bp, it takes lhs as its left operand
    while parser.next_token_kind() != TokenKind::Semicolon && bp < parser.next_binding_power() {
        let led_fn = match parser.get_led_lookup().get(&parser.next_token_kind()) {
            Some(led_fn) => *led_fn,
            None => return Ok(left),
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_operand(parser, BindingPower::Prefix);

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

/// Parses the right operand at the operator's own binding power, which keeps
/// operators of one level left-associative.
pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_operand(parser, bp);

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right,
    }))
}

/// Parses the operand of an operator. A failure is recorded on the parser and
/// leaves the operand empty so the operator node itself survives.
fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Option<Box<Expression>> {
    match parse_expr(parser, bp) {
        Ok(operand) => Some(Box::new(operand)),
        Err(error) => {
            parser.push_error(error);
            None
        }
    }
}
