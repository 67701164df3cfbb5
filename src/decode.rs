// Request decoders for Commander Core
//
// Three front-ends, one canonical Command: a structured JSON payload, a
// name with positional literal strings, and function-call text.

use crate::command::Command;
use crate::funcall::parse_function_call;
use crate::types::{CommanderError, Result};

/// Decode `{"Name": "...", "Args": [...]}`.
///
/// Anything but a JSON object is a parse error.
pub fn decode_command(payload: &str) -> Result<Command> {
    serde_json::from_str(payload).map_err(CommanderError::parse)
}

/// Decode a name plus raw argument literals.
///
/// Each raw string must already be a JSON literal (`"text"`, `12.5`,
/// `true`, `[1,2]`, ...). The strings are joined into an array literal and
/// decoded as a structured payload, so no inference happens here.
pub fn decode_strings<S: AsRef<str>>(name: &str, raw_args: &[S]) -> Result<Command> {
    let literals: Vec<&str> = raw_args.iter().map(AsRef::as_ref).collect();
    let name_literal = serde_json::to_string(name).map_err(CommanderError::parse)?;
    let payload = format!(r#"{{"Name":{},"Args":[{}]}}"#, name_literal, literals.join(","));
    decode_command(&payload)
}

/// Decode `name(arg, arg, ...)` text.
pub fn decode_function_call(text: &str) -> Result<Command> {
    let (name, raw_args) = parse_function_call(text)?;
    decode_strings(&name, raw_args.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_decode_structured() {
        let cmd = decode_command(r#"{"Name": "Command1", "Args": ["hello world!", 54]}"#).unwrap();
        assert_eq!(cmd.name, "Command1");
        assert_eq!(cmd.args, vec![Value::from("hello world!"), Value::Int(54)]);
    }

    #[test]
    fn test_decode_structured_errors() {
        assert!(matches!(decode_command("{"), Err(CommanderError::ParseError(_))));
        assert!(matches!(decode_command(r#"{"Args": []}"#), Err(CommanderError::ParseError(_))));
        assert!(matches!(
            decode_command(r#"{"Name": 5, "Args": []}"#),
            Err(CommanderError::ParseError(_))
        ));
    }

    #[test]
    fn test_decode_structured_requires_object() {
        for payload in [r#"["add", [3, 4]]"#, r#"["add"]"#, r#""add""#, "null", "7"] {
            assert!(
                matches!(decode_command(payload), Err(CommanderError::ParseError(_))),
                "{} should be rejected",
                payload
            );
        }
    }

    #[test]
    fn test_decode_strings() {
        let cmd = decode_strings("multFloat", &["10.0", "10.1"]).unwrap();
        assert_eq!(cmd, Command::new("multFloat", vec![Value::Float(10.0), Value::Float(10.1)]));
    }

    #[test]
    fn test_decode_strings_requires_literals() {
        let err = decode_strings("concat", &["ab", "cd"]).unwrap_err();
        assert!(matches!(err, CommanderError::ParseError(_)));
    }

    #[test]
    fn test_decode_strings_single_empty_argument() {
        // "multInt " split on spaces gives one empty argument
        let cmd = decode_strings("multInt", &[""]).unwrap();
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_decode_strings_trailing_empty_argument() {
        // ["3", ""] joins to `[3,]`
        let err = decode_strings("add", &["3", ""]).unwrap_err();
        assert!(matches!(err, CommanderError::ParseError(_)));
    }

    #[test]
    fn test_decode_strings_escapes_name() {
        let cmd = decode_strings("say\"hi", &["1"]).unwrap();
        assert_eq!(cmd.name, "say\"hi");
    }

    #[test]
    fn test_decode_function_call() {
        let cmd = decode_function_call(r#"concat("ab","cd")"#).unwrap();
        assert_eq!(cmd, Command::new("concat", vec![Value::from("ab"), Value::from("cd")]));
    }

    #[test]
    fn test_decode_function_call_empty_argument_rejected() {
        assert!(matches!(decode_function_call("f(1,,2)"), Err(CommanderError::ParseError(_))));
    }

    #[test]
    fn test_structured_round_trip() {
        let original = Command::new(
            "place",
            vec![
                Value::from("hand"),
                Value::Float(2.5),
                Value::Int(3),
                Value::Float(3.0),
                Value::Bool(false),
                Value::Null,
                Value::List(vec![Value::Float(1.0), Value::from("x")]),
                Value::Map([("hp".to_string(), Value::Int(10))].into_iter().collect()),
            ],
        );
        let decoded = decode_command(&original.to_json().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }
}
