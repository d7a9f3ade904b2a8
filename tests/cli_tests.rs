// Programmatic CLI entry points

use gql_scalars::cli::{
    execute_coerce, render_json, scalars_overview, CliError, CoerceMode, CoerceOptions, CoerceOutcome,
};
use gql_scalars::{CoercionError, Value};

fn run(scalar: &str, mode: CoerceMode, input: &str) -> Result<CoerceOutcome, CliError> {
    execute_coerce(&CoerceOptions {
        scalar: scalar.to_string(),
        mode,
        input: Some(input.to_string()),
    })
}

#[test]
fn test_serialize_json_input() {
    assert_eq!(
        run("Int", CoerceMode::Serialize, "42.0").unwrap(),
        CoerceOutcome::Coerced(Value::Integer(42))
    );
    assert_eq!(
        run("String", CoerceMode::Serialize, "true").unwrap(),
        CoerceOutcome::Coerced(Value::String("true".into()))
    );
}

#[test]
fn test_parse_value_rejection_surfaces_message() {
    match run("Int", CoerceMode::ParseValue, "2147483648") {
        Err(CliError::Coercion(e)) => {
            assert_eq!(e, CoercionError::NonInt32("2147483648".into()));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_literal_source() {
    assert_eq!(
        run("ID", CoerceMode::ParseLiteral, "007").unwrap_err().to_string(),
        "Parse error: Syntax error: Invalid number, unexpected digit after 0 but got '0' at 1:2"
    );
    assert_eq!(
        run("ID", CoerceMode::ParseLiteral, "\"007\"\n").unwrap(),
        CoerceOutcome::Coerced(Value::String("007".into()))
    );
    assert_eq!(
        run("Float", CoerceMode::ParseLiteral, "4").unwrap(),
        CoerceOutcome::Coerced(Value::Float(4.0))
    );
    assert_eq!(
        run("Int", CoerceMode::ParseLiteral, "99999999999").unwrap(),
        CoerceOutcome::NotApplicable
    );
}

#[test]
fn test_unknown_scalar() {
    assert!(matches!(
        run("Date", CoerceMode::Serialize, "1"),
        Err(CliError::UnknownScalar(name)) if name == "Date"
    ));
}

#[test]
fn test_missing_input() {
    let options = CoerceOptions {
        scalar: "Int".into(),
        ..Default::default()
    };
    assert!(matches!(execute_coerce(&options), Err(CliError::NoInput)));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        run("Int", CoerceMode::Serialize, "{oops"),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_render_json() {
    assert_eq!(render_json(Value::Float(2.5), false).unwrap(), "2.5");
    assert_eq!(render_json(Value::Float(f64::NAN), false).unwrap(), "null");
    assert_eq!(render_json(Value::from(vec![1]), true).unwrap(), "[\n  1\n]");
}

#[test]
fn test_scalars_overview_lists_in_order() {
    let overview = scalars_overview();
    let positions: Vec<usize> = ["String", "Int", "Float", "Boolean", "ID"]
        .iter()
        .map(|name| overview.find(&format!("\n  {}\n", name)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}
