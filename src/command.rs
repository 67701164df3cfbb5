// Canonical command request for Commander Core

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::types::{CommanderError, Result};
use crate::utils::deserialize_object;
use crate::value::Value;

/// A decoded `(name, args)` request.
///
/// Serializes to the structured request envelope
/// `{"Name": "...", "Args": [...]}`. Only that object form deserializes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Args")]
    pub args: Vec<Value>,
}

#[derive(Deserialize)]
struct CommandFields {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Args", alias = "Params", default)]
    args: Vec<Value>,
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields: CommandFields =
            deserialize_object(deserializer, "a command object with Name and Args")?;
        Ok(Command { name: fields.name, args: fields.args })
    }
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Command { name: name.into(), args }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CommanderError::parse)
    }
}

/// `name(arg, arg)`, with every argument written as a JSON literal.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}
