// Builtin commands for Commander Core
//
// The default command set served by the WASM CommandCenter and the native
// driver. Every entry goes through the typed registration path.

use std::collections::BTreeMap;

use crate::config::CenterConfig;
use crate::registry::{Registry, RegistryBuilder};
use crate::types::{CommanderError, Result};
use crate::value::Value;

/// Names of every builtin command.
pub const BUILTINS: &[&str] = &[
    "add",
    "addFloat",
    "alwaysTrue",
    "command1",
    "command2",
    "concat",
    "divInt",
    "echo",
    "gimmeTrue",
    "len",
    "mulFloat",
    "multFloat",
    "multInt",
    "sayHello",
];

fn add(a: i64, b: i64) -> std::result::Result<i64, &'static str> {
    a.checked_add(b).ok_or("integer overflow")
}

fn mult_int(a: i64, b: i64) -> std::result::Result<i64, &'static str> {
    a.checked_mul(b).ok_or("integer overflow")
}

fn div_int(a: i64, b: i64) -> std::result::Result<i64, &'static str> {
    if b == 0 {
        return Err("division by zero");
    }
    a.checked_div(b).ok_or("integer overflow")
}

fn command1(s: String, f: f64) -> String {
    format!("command 1 was executed, params passed: {} {}", s, f)
}

fn command2(s: String, i: i64) -> String {
    format!("woot {} {}", s, i)
}

fn say_hello(_name: String) -> (String, f64) {
    ("hello".to_string(), 3.14)
}

/// Callers only pass names listed in [`BUILTINS`].
fn register_builtin(builder: RegistryBuilder, name: &str) -> RegistryBuilder {
    match name {
        "add" => builder.register(name, add),
        "addFloat" => builder.register(name, |a: f64, b: f64| a + b),
        "alwaysTrue" => builder.register(name, |_f: f64| true),
        "command1" => builder.register(name, command1),
        "command2" => builder.register(name, command2),
        "concat" => builder.register(name, |a: String, b: String| a + &b),
        "divInt" => builder.register(name, div_int),
        "echo" => builder.register(name, |m: BTreeMap<String, Value>| m),
        "gimmeTrue" => builder.register(name, || true),
        "len" => builder.register(name, |items: Vec<Value>| items.len() as i64),
        "mulFloat" | "multFloat" => builder.register(name, |a: f64, b: f64| a * b),
        "multInt" => builder.register(name, mult_int),
        "sayHello" => builder.register(name, say_hello),
        _ => builder,
    }
}

/// Every builtin command.
pub fn registry() -> Registry {
    BUILTINS
        .iter()
        .fold(Registry::builder(), |builder, name| register_builtin(builder, name))
        .build()
}

/// The builtins selected by `config`, plus its aliases.
pub fn registry_with(config: &CenterConfig) -> Result<Registry> {
    let selected: Vec<&str> = match &config.commands {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => BUILTINS.to_vec(),
    };

    let mut builder = Registry::builder();
    for name in selected {
        if !BUILTINS.contains(&name) {
            return Err(CommanderError::Config(format!("unknown builtin command: {}", name)));
        }
        builder = register_builtin(builder, name);
    }

    for (public, target) in &config.aliases {
        if !builder.contains(target) {
            return Err(CommanderError::Config(format!(
                "alias {} points at unavailable command {}",
                public, target
            )));
        }
        builder = builder.alias(public.clone(), target);
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use crate::types::TypeTag;

    #[test]
    fn test_all_builtins_registered() {
        let registry = registry();
        assert_eq!(registry.len(), BUILTINS.len());
        for name in BUILTINS {
            assert!(registry.contains(name), "missing builtin {}", name);
        }
    }

    #[test]
    fn test_function_string_examples() {
        let registry = registry();
        assert_eq!(
            registry.call_function_text("addFloat(31, 11)"),
            Response::ok(vec![Value::Float(42.0)])
        );
        assert_eq!(
            registry.call_function_text("mulFloat(6, 7)"),
            Response::ok(vec![Value::Float(42.0)])
        );
    }

    #[test]
    fn test_string_examples() {
        // (input, expected outputs or None for an error)
        let cases: Vec<(&str, Option<Vec<Value>>)> = vec![
            ("multInt 10 12", Some(vec![Value::Int(120)])),
            ("multInt 10 1", Some(vec![Value::Int(10)])),
            ("multInt 10 1.1", None),
            ("multInt 10", None),
            ("multInt 1.1 1.1", None),
            ("multInt ", None),
            ("multFloat 10 10", Some(vec![Value::Float(100.0)])),
        ];

        let registry = registry();
        for (input, expected) in cases {
            let mut parts = input.split(' ');
            let name = parts.next().unwrap();
            let args: Vec<&str> = parts.collect();
            let response = registry.call_strings(name, args.as_slice());
            match expected {
                Some(outputs) => assert_eq!(response, Response::ok(outputs), "input {:?}", input),
                None => assert!(!response.is_ok(), "input {:?} should fail", input),
            }
        }
    }

    #[test]
    fn test_json_examples() {
        let registry = registry();
        assert!(registry.call_json(r#"{"Name": "command1", "Args": ["hello world!", 54]}"#).is_ok());
        assert!(!registry.call_json(r#"{"Name": "command1", "Args": [123, 123]}"#).is_ok());
        assert_eq!(
            registry.call_json(r#"{"Name":"sayHello", "Params":["ohai"]}"#).to_json().unwrap(),
            r#"{"Result":["hello",3.14],"Error":null}"#
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let registry = registry();
        let response = registry.invoke("divInt", vec![Value::Int(1), Value::Int(0)]);
        assert_eq!(response.error(), Some("OperationError: divInt; division by zero"));

        let response = registry.invoke("add", vec![Value::Int(i64::MAX), Value::Int(1)]);
        assert_eq!(response.error(), Some("OperationError: add; integer overflow"));
    }

    #[test]
    fn test_collection_builtins() {
        let registry = registry();
        assert_eq!(
            registry.call_function_text("len([1,2,3])"),
            Response::ok(vec![Value::Int(3)])
        );
        assert_eq!(registry.lookup("echo").unwrap().params(), &[TypeTag::Map]);
    }

    #[test]
    fn test_registry_with_selection_and_aliases() {
        let config = CenterConfig::from_json(r#"{"commands": ["add"], "aliases": {"plus": "add"}}"#)
            .unwrap();
        let registry = registry_with(&config).unwrap();
        assert_eq!(registry.names(), vec!["add", "plus"]);
        assert_eq!(registry.call_function_text("plus(2,3)"), Response::ok(vec![Value::Int(5)]));
    }

    #[test]
    fn test_registry_with_rejects_unknown_names() {
        let config = CenterConfig { commands: Some(vec!["fly".into()]), ..Default::default() };
        assert!(matches!(registry_with(&config), Err(CommanderError::Config(_))));

        let mut config = CenterConfig { commands: Some(vec!["add".into()]), ..Default::default() };
        config.aliases.insert("times".into(), "multInt".into());
        assert!(matches!(registry_with(&config), Err(CommanderError::Config(_))));
    }
}
