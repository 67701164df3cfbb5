// Type definitions for Commander Core

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Result type for Commander operations
pub type Result<T> = std::result::Result<T, CommanderError>;

/// Type tag of a [`crate::Value`], and of a registered parameter or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::List => "list",
            TypeTag::Map => "map",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a type list as `(int, float)`.
pub fn format_types(types: &[TypeTag]) -> String {
    let inner: Vec<&str> = types.iter().map(TypeTag::as_str).collect();
    format!("({})", inner.join(", "))
}

/// Error types for Commander operations
#[derive(Debug, thiserror::Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommanderError {
    #[error("{0}")]
    ParseError(String),

    #[error("Command {name} Not Found.")]
    CommandNotFound { name: String },

    #[error("Command {name} is not callable.")]
    NotCallable { name: String },

    #[error("ArityError: {name}; Got: {got}; Expected: {};", format_types(.want))]
    ArityMismatch {
        name: String,
        got: usize,
        want: Vec<TypeTag>,
    },

    #[error("ParameterTypeError: {name}; Got: {}; Expected: {};", format_types(.got), format_types(.want))]
    TypeMismatch {
        name: String,
        got: Vec<TypeTag>,
        want: Vec<TypeTag>,
    },

    #[error("OperationError: {name}; {message}")]
    OperationFailed { name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommanderError {
    pub(crate) fn parse(err: impl fmt::Display) -> Self {
        CommanderError::ParseError(err.to_string())
    }
}

// Convert Rust errors to JsValue for WASM boundary
impl From<CommanderError> for JsValue {
    fn from(err: CommanderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
