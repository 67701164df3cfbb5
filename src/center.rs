// WASM command center for Commander Core

use wasm_bindgen::prelude::*;

use crate::builtins;
use crate::command::Command;
use crate::config::CenterConfig;
use crate::registry::Registry;
use crate::response::Response;
use crate::types::{CommanderError, Result};

/// JavaScript entry point over a fixed command registry.
///
/// Every call method returns the response envelope as a JSON string, so
/// failures of the call itself are reported inside the envelope rather
/// than thrown. Only rendering the envelope can throw.
#[wasm_bindgen]
pub struct CommandCenter {
    registry: Registry,
}

#[wasm_bindgen]
impl CommandCenter {
    /// Create a command center over the builtin commands
    ///
    /// `config_json` selects and aliases builtins, see `CenterConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<CommandCenter> {
        let config = match config_json {
            Some(json) => CenterConfig::from_json(&json)?,
            None => CenterConfig::default(),
        };
        Ok(CommandCenter { registry: builtins::registry_with(&config)? })
    }

    /// Call with a structured payload: `{"Name": "add", "Args": [1, 2]}`
    #[wasm_bindgen(js_name = callJson)]
    pub fn call_json(&self, payload: &str) -> Result<String> {
        self.registry.call_json(payload).to_json()
    }

    /// Call with a name and an array of literal strings: `("add", ["1", "2"])`
    #[wasm_bindgen(js_name = callStrings)]
    pub fn call_strings(&self, name: &str, args: JsValue) -> Result<String> {
        let response = match serde_wasm_bindgen::from_value::<Vec<String>>(args) {
            Ok(raw_args) => self.registry.call_strings(name, raw_args.as_slice()),
            Err(e) => Response::err(&CommanderError::parse(e)),
        };
        response.to_json()
    }

    /// Call with function-call text: `add(1, 2)`
    #[wasm_bindgen(js_name = callFunction)]
    pub fn call_function(&self, text: &str) -> Result<String> {
        self.registry.call_function_text(text).to_json()
    }

    /// Call a JSON array of structured payloads, returning an array of envelopes
    #[wasm_bindgen(js_name = callBatch)]
    pub fn call_batch(&self, commands_json: &str) -> Result<String> {
        let commands: Vec<Command> =
            serde_json::from_str(commands_json).map_err(CommanderError::parse)?;
        let responses = self.registry.invoke_batch(&commands);
        serde_json::to_string(&responses).map_err(CommanderError::parse)
    }

    /// Registered command names as a JSON array
    #[wasm_bindgen(js_name = commands)]
    pub fn commands(&self) -> Result<String> {
        serde_json::to_string(&self.registry.names()).map_err(CommanderError::parse)
    }

    /// Command signatures as a JSON array
    #[wasm_bindgen(js_name = signatures)]
    pub fn signatures(&self) -> Result<String> {
        serde_json::to_string(&self.registry.signatures()).map_err(CommanderError::parse)
    }
}

impl CommandCenter {
    /// Wrap a registry built elsewhere
    pub fn from_registry(registry: Registry) -> CommandCenter {
        CommandCenter { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_creation() {
        let center = CommandCenter::new(None).unwrap();
        assert_eq!(center.registry().len(), builtins::BUILTINS.len());
    }

    #[test]
    fn test_center_with_config() {
        let center = CommandCenter::new(Some(r#"{"commands": ["concat"]}"#.to_string())).unwrap();
        assert_eq!(center.commands().unwrap(), r#"["concat"]"#);
        assert_eq!(center.signatures().unwrap(), r#"["concat(string, string) -> (string)"]"#);
    }

    #[test]
    fn test_center_rejects_bad_config() {
        assert!(CommandCenter::new(Some("[]".to_string())).is_err());
        assert!(CommandCenter::new(Some(r#"[["add"], {"plus": "add"}]"#.to_string())).is_err());
    }

    #[test]
    fn test_call_json_and_function() {
        let center = CommandCenter::new(None).unwrap();
        assert_eq!(
            center.call_json(r#"{"Name": "add", "Args": [3, 4]}"#).unwrap(),
            r#"{"Result":[7],"Error":null}"#
        );
        assert_eq!(
            center.call_function("add(3.5, 4)").unwrap(),
            r#"{"Result":null,"Error":"ParameterTypeError: add; Got: (float, int); Expected: (int, int);"}"#
        );
    }

    #[test]
    fn test_call_json_rejects_positional_payload() {
        let center = CommandCenter::new(None).unwrap();
        let out = center.call_json(r#"["add", [3, 4]]"#).unwrap();
        assert!(out.starts_with(r#"{"Result":null,"Error":"#), "{}", out);
    }

    #[test]
    fn test_call_batch() {
        let center = CommandCenter::new(None).unwrap();
        let out = center
            .call_batch(r#"[{"Name": "gimmeTrue", "Args": []}, {"Name": "nope"}]"#)
            .unwrap();
        assert_eq!(
            out,
            r#"[{"Result":[true],"Error":null},{"Result":null,"Error":"Command nope Not Found."}]"#
        );
        assert!(center.call_batch("{").is_err());
        assert!(center.call_batch(r#"[["gimmeTrue", []]]"#).is_err());
    }
}
