// Generic conversions of runtime values

use gql_scalars::number::{format_number, parse_numeric_string};
use gql_scalars::{Value, ValueObject};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
struct Label(&'static str);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ValueObject for Label {}

// ============================================================================
// Numeric conversion
// ============================================================================

#[test]
fn test_to_number() {
    assert_eq!(Value::Null.to_number(), 0.0);
    assert_eq!(Value::Boolean(true).to_number(), 1.0);
    assert_eq!(Value::Integer(-9).to_number(), -9.0);
    assert_eq!(Value::String("   ".into()).to_number(), 0.0);
    assert_eq!(Value::String("1e3".into()).to_number(), 1000.0);
    assert_eq!(Value::String("Infinity".into()).to_number(), f64::INFINITY);
    assert_eq!(Value::Array(vec![]).to_number(), 0.0);
    assert_eq!(Value::from(vec!["8"]).to_number(), 8.0);
    assert!(Value::from(vec![1, 2]).to_number().is_nan());
    assert!(Value::Object(HashMap::new()).to_number().is_nan());
    assert_eq!(Value::custom(Label("12")).to_number(), 12.0);
    assert!(Value::custom(Label("twelve")).to_number().is_nan());
}

#[test]
fn test_numeric_string_grammar() {
    assert_eq!(parse_numeric_string("0xff"), 255.0);
    assert_eq!(parse_numeric_string("-.5"), -0.5);
    assert_eq!(parse_numeric_string("\u{00A0}7\u{2028}"), 7.0);
    assert!(parse_numeric_string("infinity").is_nan());
    assert!(parse_numeric_string("1_000").is_nan());
    assert!(parse_numeric_string("+0b1").is_nan());
}

// ============================================================================
// String conversion
// ============================================================================

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Float(4.0).to_string(), "4");
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(
        Value::Array(vec![Value::Integer(1), Value::Null, Value::from(vec![2, 3])]).to_string(),
        "1,,2,3"
    );
    assert_eq!(Value::Object(HashMap::new()).to_string(), "[object Object]");
    assert_eq!(Value::custom(Label("x")).to_string(), "x");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(-1234.5678), "-1234.5678");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    assert_eq!(format_number(f64::NAN), "NaN");
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_object_like() {
    assert!(Value::Array(vec![]).is_object_like());
    assert!(Value::Object(HashMap::new()).is_object_like());
    assert!(Value::custom(Label("x")).is_object_like());
    assert!(!Value::String("x".into()).is_object_like());
    assert!(!Value::Null.is_object_like());
}

#[test]
fn test_custom_equality_is_identity() {
    let a = Value::custom(Label("x"));
    let b = Value::custom(Label("x"));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

// ============================================================================
// JSON conversion
// ============================================================================

#[test]
fn test_json_round_trip_preserves_number_kinds() {
    let json: serde_json::Value = serde_json::from_str(r#"{"a": 1, "b": 1.5, "c": [null, "x"]}"#).unwrap();
    let value = Value::from(json.clone());

    match &value {
        Value::Object(map) => {
            assert_eq!(map["a"], Value::Integer(1));
            assert_eq!(map["b"], Value::Float(1.5));
        }
        other => panic!("expected object, got {:?}", other),
    }
    assert_eq!(serde_json::Value::from(value), json);
}

#[test]
fn test_non_finite_floats_render_null() {
    assert_eq!(serde_json::Value::from(Value::Float(f64::NAN)), serde_json::Value::Null);
    assert_eq!(serde_json::Value::from(Value::Float(f64::INFINITY)), serde_json::Value::Null);
}

#[test]
fn test_custom_renders_as_string() {
    assert_eq!(
        serde_json::Value::from(Value::custom(Label("oid:1"))),
        serde_json::Value::String("oid:1".into())
    );
}
