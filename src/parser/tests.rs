//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Let and return statements in both value modes
//! - Prefix and infix expressions
//! - Operator precedence and associativity
//! - Error collection and recovery

use crate::{
    ast::ast::{Expression, Node, Program, Statement},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::{parse, Parser, ParserConfig, Recovery, StatementValues};

fn parse_source(source: &str, config: ParserConfig) -> (Parser, Program) {
    let lexer = Lexer::new(source.to_string(), Some("test.monkey".to_string()));
    let mut parser = Parser::with_config(lexer, config);
    let program = parser.parse_program();

    (parser, program)
}

fn parse_clean(source: &str) -> Program {
    let (parser, program) = parse_source(source, ParserConfig::default());
    assert!(
        parser.errors().is_empty(),
        "unexpected errors for {:?}: {:?}",
        source,
        parser.error_messages()
    );

    program
}

fn parse_values() -> ParserConfig {
    ParserConfig {
        statement_values: StatementValues::Parse,
        ..ParserConfig::default()
    }
}

/// Unwraps a program made of one expression statement.
fn single_expression(program: &Program) -> &Expression {
    assert_eq!(program.statements.len(), 1, "{:?}", program);
    match &program.statements[0] {
        Statement::Expression(stmt) => stmt.expression.as_ref().expect("missing expression"),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_clean(
        "
        let x = 5;
        let y = 10;
        let xyz = 838383;
        ",
    );

    assert_eq!(program.statements.len(), 3);

    for (stmt, name) in program.iter().zip(["x", "y", "xyz"]) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Statement::Let(let_stmt) => {
                assert_eq!(let_stmt.name.value, name);
                assert_eq!(let_stmt.name.token_literal(), name);
                assert!(let_stmt.value.is_none());
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_clean("return 5; return 10; return 993322;");

    assert_eq!(program.statements.len(), 3);
    for stmt in program.iter() {
        assert_eq!(stmt.token_literal(), "return");
        assert!(matches!(stmt, Statement::Return(ret) if ret.return_value.is_none()));
    }
}

#[test]
fn test_skipped_values_are_not_checked() {
    let program = parse_clean("let x = 1 + ; return ) ;");

    assert_eq!(program.to_code(), "let x = ;\nreturn ;");
}

#[test]
fn test_let_without_semicolon() {
    let program = parse_clean("let x = 5");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_code(), "let x = ;");
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_clean("foobar;");

    match single_expression(&program) {
        Expression::Identifier(ident) => {
            assert_eq!(ident.value, "foobar");
            assert_eq!(ident.token_literal(), "foobar");
        }
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_literal() {
    let program = parse_clean("5;");

    match single_expression(&program) {
        Expression::Integer(literal) => {
            assert_eq!(literal.value, 5);
            assert_eq!(literal.token_literal(), "5");
        }
        other => panic!("expected integer literal, got {:?}", other),
    }
}

#[test]
fn test_parse_prefix_expressions() {
    for (source, operator, operand) in [("!5;", "!", 5), ("-15;", "-", 15)] {
        let program = parse_clean(source);

        match single_expression(&program) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert!(
                    matches!(prefix.right.as_deref(), Some(Expression::Integer(literal)) if literal.value == operand)
                );
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", "+"),
        ("5 - 5;", "-"),
        ("5 * 5;", "*"),
        ("5 / 5;", "/"),
        ("5 > 5;", ">"),
        ("5 < 5;", "<"),
        ("5 == 5;", "=="),
        ("5 != 5;", "!="),
    ];

    for (source, operator) in cases {
        let program = parse_clean(source);

        match single_expression(&program) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.token_literal(), operator);
                assert_eq!(infix.left.to_code(), "5");
                assert_eq!(
                    infix.right.as_ref().map(|right| right.to_code()),
                    Some(String::from("5"))
                );
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("a + b * c", "(a + (b * c))"),
        ("a + b - c", "((a + b) - c)"),
        ("1 + 2; -3 * 4", "(1 + 2)\n((-3) * 4)"),
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_clean(source).to_code(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_malformed_let_does_not_hide_later_statements() {
    let (parser, program) = parse_source("let = 5; return 10;", ParserConfig::default());

    assert!(!parser.errors().is_empty());
    assert_eq!(
        parser.error_messages()[0],
        "expected next token to be Identifier, got Assign instead"
    );
    assert!(matches!(
        program.statements.last(),
        Some(Statement::Return(_))
    ));
    // The program loop only steps past `let`, so `=` and `5` are read as expressions.
    assert_eq!(program.statements.len(), 3);
    assert_eq!(parser.errors().len(), 2);
}

#[test]
fn test_recovery_skips_to_semicolon() {
    let config = ParserConfig {
        recovery: Recovery::SkipToSemicolon,
        ..ParserConfig::default()
    };
    let (parser, program) = parse_source("let = 5; return 10;", config);

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_code(), "return ;");
}

#[test]
fn test_unexpected_token_position() {
    let (parser, program) = parse_source("let x 5;", ParserConfig::default());

    assert_eq!(parser.errors().len(), 1);
    let error = &parser.errors()[0];
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            actual: TokenKind::Integer,
        }
    );
    assert_eq!(error.get_position().0, 6);
    assert_eq!(error.get_position().1.as_str(), "test.monkey");
    assert_eq!(program.to_code(), "5");
}

#[test]
fn test_illegal_token_reports_missing_prefix() {
    let (parser, program) = parse_source("@", ParserConfig::default());

    assert_eq!(
        parser.error_messages(),
        vec![String::from("no prefix parse function for Illegal found")]
    );
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(
        &program.statements[0],
        Statement::Expression(stmt) if stmt.expression.is_none() && stmt.token_literal() == "@"
    ));
}

#[test]
fn test_integer_overflow_is_recorded() {
    let (parser, program) = parse_source("99999999999999999999;", ParserConfig::default());

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].get_error_name(), "IntegerParseError");
    assert_eq!(program.to_code(), "");
}

#[test]
fn test_dangling_operator_reports_missing_prefix() {
    let (parser, program) = parse_source("1 +;", ParserConfig::default());

    assert_eq!(
        parser.error_messages(),
        vec![String::from("no prefix parse function for Semicolon found")]
    );
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_code(), "(1 + )");
}

#[test]
fn test_missing_operand_keeps_operator_node() {
    let cases = [
        ("1 + ;", "(1 + )", "Semicolon"),
        ("-;", "(-)", "Semicolon"),
        ("!", "(!)", "EndOfInput"),
        ("a * (b", "(a * )\nb", "LParen"),
    ];

    for (source, expected, kind) in cases {
        let (parser, program) = parse_source(source, ParserConfig::default());

        assert_eq!(
            parser.error_messages(),
            vec![format!("no prefix parse function for {} found", kind)],
            "source: {:?}",
            source
        );
        assert_eq!(program.to_code(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_missing_infix_operand_is_empty() {
    let (parser, program) = parse_source("2 * -", ParserConfig::default());

    assert_eq!(parser.errors().len(), 1);
    match single_expression(&program) {
        Expression::Infix(infix) => {
            assert_eq!(infix.left.to_code(), "2");
            assert!(matches!(
                infix.right.as_deref(),
                Some(Expression::Prefix(prefix)) if prefix.right.is_none()
            ));
        }
        other => panic!("expected infix expression, got {:?}", other),
    }
    assert_eq!(program.to_code(), "(2 * (-))");
}

#[test]
fn test_expression_stops_at_non_operator() {
    let (parser, program) = parse_source("a + b )", ParserConfig::default());

    assert_eq!(program.statements[0].to_code(), "(a + b)");
    assert_eq!(
        parser.error_messages(),
        vec![String::from("no prefix parse function for RParen found")]
    );
}

#[test]
fn test_parse_statement_values() {
    let (parser, program) = parse_source("let x = 1 + 2 * 3; return -x; x", parse_values());

    assert!(parser.errors().is_empty(), "{:?}", parser.error_messages());
    assert_eq!(program.to_code(), "let x = (1 + (2 * 3));\nreturn (-x);\nx");

    match &program.statements[0] {
        Statement::Let(let_stmt) => {
            assert!(matches!(let_stmt.value, Some(Expression::Infix(_))));
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_return_value() {
    let (parser, program) = parse_source("return; return 1", parse_values());

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_code(), "return ;\nreturn 1;");
}

#[test]
fn test_broken_statement_value_is_recorded() {
    let (parser, program) = parse_source("let x = ; let y = 2;", parse_values());

    assert_eq!(
        parser.error_messages(),
        vec![String::from("no prefix parse function for Semicolon found")]
    );
    assert_eq!(program.to_code(), "let x = ;\nlet y = 2;");
}

#[test]
fn test_parser_reads_two_tokens_ahead() {
    let parser = Parser::new(Lexer::new("let x".to_string(), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(parser.next_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.next_token().literal, "x");
}

#[test]
fn test_expect_next_leaves_cursor_on_error() {
    let mut parser = Parser::new(Lexer::new("let 5".to_string(), None));

    assert!(parser.expect_next(TokenKind::Identifier).is_err());
    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert!(parser.expect_next(TokenKind::Integer).is_ok());
    assert_eq!(parser.current_token().literal, "5");
}

#[test]
fn test_parse_empty_program() {
    let (parser, program) = parse(Lexer::new(String::new(), None));

    assert!(parser.errors().is_empty());
    assert!(program.statements.is_empty());
}
