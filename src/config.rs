// Command center configuration for Commander Core

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{CommanderError, Result};
use crate::utils::deserialize_object;

/// Which builtin commands to expose, and under which extra names.
///
/// ```json
/// { "commands": ["add", "concat"], "aliases": { "plus": "add" } }
/// ```
///
/// A missing `commands` list exposes every builtin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CenterConfig {
    pub commands: Option<Vec<String>>,
    pub aliases: BTreeMap<String, String>,
}

impl CenterConfig {
    /// Parse a config object; any other JSON value is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        let config: CenterConfig = deserialize_object(&mut de, "a config object")
            .and_then(|config| de.end().map(|()| config))
            .map_err(|e| CommanderError::Config(e.to_string()))?;
        Ok(config)
    }
}
