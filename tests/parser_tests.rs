// tests/parser_tests.rs

use gql_scalars::ast::{Kind, Literal, ObjectField};
use gql_scalars::lexer::{LexError, Lexer, Position};
use gql_scalars::parser::{MAX_DEPTH, ParseError, Parser, parse_literal};

fn parse(source: &str) -> Literal {
    parse_literal(source).unwrap()
}

// ============================================================================
// Leaf values
// ============================================================================

#[test]
fn test_leaf_kinds() {
    let test_cases = vec![
        ("123", Kind::Int),
        ("-1.5", Kind::Float),
        ("\"x\"", Kind::String),
        ("\"\"\"x\"\"\"", Kind::String),
        ("true", Kind::Boolean),
        ("false", Kind::Boolean),
        ("null", Kind::Null),
        ("RED", Kind::Enum),
        ("$id", Kind::Variable),
    ];

    for (source, kind) in test_cases {
        assert_eq!(parse(source).kind(), kind, "Failed for source: {}", source);
    }
}

#[test]
fn test_leaf_text_is_raw() {
    assert_eq!(parse("123").value(), Some("123"));
    assert_eq!(parse("1.50e3").value(), Some("1.50e3"));
    assert_eq!(parse("\"a b\"").value(), Some("a b"));
    assert_eq!(parse("RED").value(), Some("RED"));
    assert_eq!(parse("$id").value(), Some("id"));
    assert_eq!(parse("true").value(), None);
}

#[test]
fn test_block_string_flag() {
    assert_eq!(
        parse("\"\"\"x\"\"\""),
        Literal::String {
            value: "x".into(),
            block: true
        }
    );
    assert_eq!(parse("\"x\""), Literal::string("x"));
}

// ============================================================================
// Composite values
// ============================================================================

#[test]
fn test_list() {
    assert_eq!(
        parse("[1, \"two\", [true]]"),
        Literal::List(vec![
            Literal::Int("1".into()),
            Literal::string("two"),
            Literal::List(vec![Literal::Boolean(true)]),
        ])
    );
    assert_eq!(parse("[]"), Literal::List(vec![]));
}

#[test]
fn test_object_keeps_field_order() {
    assert_eq!(
        parse("{ b: 1, a: $v }"),
        Literal::Object(vec![
            ObjectField {
                name: "b".into(),
                value: Literal::Int("1".into()),
            },
            ObjectField {
                name: "a".into(),
                value: Literal::Variable("v".into()),
            },
        ])
    );
}

#[test]
fn test_is_const() {
    assert!(parse("[1, {a: B}]").is_const());
    assert!(!parse("[1, {a: $b}]").is_const());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_trailing_tokens_rejected() {
    match parse_literal("1 2") {
        Err(ParseError::UnexpectedToken {
            expected, position, ..
        }) => {
            assert_eq!(expected, "<EOF>");
            assert_eq!(position, Position { line: 1, column: 3 });
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_unclosed_list() {
    assert!(matches!(
        parse_literal("[1, 2"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_object_field_requires_colon() {
    assert!(matches!(
        parse_literal("{a 1}"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_empty_source() {
    assert!(matches!(
        parse_literal("   "),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_lex_errors_propagate() {
    assert!(matches!(
        parse_literal("\"open"),
        Err(ParseError::Lex(LexError::UnterminatedString(_)))
    ));
}

#[test]
fn test_const_value_rejects_variables() {
    let mut parser = Parser::new(Lexer::new("[1, $x]")).unwrap();
    match parser.parse_const_value() {
        Err(ParseError::UnexpectedVariable { name, position }) => {
            assert_eq!(name, "x");
            assert_eq!(position, Position { line: 1, column: 5 });
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_nesting_limit() {
    let nested = |open: &str, close: &str, depth: usize| {
        format!("{}{}", open.repeat(depth), close.repeat(depth))
    };

    assert!(parse_literal(&nested("[", "]", MAX_DEPTH)).is_ok());
    assert_eq!(
        parse_literal(&nested("[", "]", MAX_DEPTH + 1)),
        Err(ParseError::TooDeep {
            position: Position { line: 1, column: MAX_DEPTH + 1 }
        })
    );
    assert!(matches!(
        parse_literal(&nested("[", "]", 200_000)),
        Err(ParseError::TooDeep { .. })
    ));
    assert!(matches!(
        parse_literal(&nested("{a: ", "}", 200_000)),
        Err(ParseError::TooDeep { .. })
    ));
}

#[test]
fn test_nesting_limit_counts_open_values_only() {
    let deepest = format!("{}{}", "[".repeat(MAX_DEPTH - 1), "]".repeat(MAX_DEPTH - 1));
    assert!(parse_literal(&format!("[{} {}]", deepest, deepest)).is_ok());
    assert!(parse_literal(&format!("[{}]", "[1] ".repeat(1_000))).is_ok());
}

#[test]
fn test_error_display() {
    let err = parse_literal("]").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error: Expected a value, found \"]\" at 1:1");
}

#[test]
fn test_too_deep_display() {
    let source = format!("{}1{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
    let err = parse_literal(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Syntax error: Value nested deeper than {} levels at 1:{}", MAX_DEPTH, MAX_DEPTH + 1)
    );
}
