// Response envelope for Commander Core

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{CommanderError, Result};
use crate::utils::deserialize_object;
use crate::value::Value;

/// Outcome of one invocation: `{"Result": [...], "Error": null}` or
/// `{"Result": null, "Error": "..."}`.
///
/// Exactly one side is set. A command with no outputs succeeds with an
/// empty result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Envelope")]
pub struct Response {
    result: Option<Vec<Value>>,
    error: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "Result")]
    result: Option<Vec<Value>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl Response {
    pub fn ok(outputs: Vec<Value>) -> Self {
        Response { result: Some(outputs), error: None }
    }

    pub fn err(error: &CommanderError) -> Self {
        Response { result: None, error: Some(error.to_string()) }
    }

    pub fn from_outcome(outcome: Result<Vec<Value>>) -> Self {
        match outcome {
            Ok(outputs) => Response::ok(outputs),
            Err(e) => Response::err(&e),
        }
    }

    pub fn result(&self) -> Option<&[Value]> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CommanderError::parse)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CommanderError::parse)
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let envelope: Envelope =
            deserialize_object(deserializer, "a response object with Result and Error")?;
        Response::try_from(envelope).map_err(D::Error::custom)
    }
}

impl TryFrom<Envelope> for Response {
    type Error = String;

    fn try_from(envelope: Envelope) -> std::result::Result<Self, Self::Error> {
        match (envelope.result, envelope.error) {
            (Some(result), None) => Ok(Response::ok(result)),
            (None, Some(error)) => Ok(Response { result: None, error: Some(error) }),
            (Some(_), Some(_)) => Err("response carries both a result and an error".to_string()),
            (None, None) => Err("response carries neither a result nor an error".to_string()),
        }
    }
}

impl From<Response> for Envelope {
    fn from(response: Response) -> Self {
        Envelope { result: response.result, error: response.error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let response = Response::ok(vec![Value::from("hello"), Value::Float(3.14)]);
        assert_eq!(response.to_json().unwrap(), r#"{"Result":["hello",3.14],"Error":null}"#);
    }

    #[test]
    fn test_void_success_envelope() {
        assert_eq!(Response::ok(Vec::new()).to_json().unwrap(), r#"{"Result":[],"Error":null}"#);
    }

    #[test]
    fn test_error_envelope() {
        let response = Response::err(&CommanderError::CommandNotFound { name: "missing".into() });
        assert!(!response.is_ok());
        assert!(response.result().is_none());
        assert_eq!(response.to_json().unwrap(), r#"{"Result":null,"Error":"Command missing Not Found."}"#);
    }

    #[test]
    fn test_deserialize_rejects_invalid_envelopes() {
        assert!(serde_json::from_str::<Response>(r#"{"Result":[1],"Error":"x"}"#).is_err());
        assert!(serde_json::from_str::<Response>(r#"{"Result":null,"Error":null}"#).is_err());

        let parsed: Response = serde_json::from_str(r#"{"Result":[7],"Error":null}"#).unwrap();
        assert_eq!(parsed.result(), Some(&[Value::Int(7)][..]));
    }

    #[test]
    fn test_deserialize_rejects_positional_envelope() {
        assert!(serde_json::from_str::<Response>(r#"[[7], null]"#).is_err());
        assert!(serde_json::from_str::<Response>(r#"[null, "boom"]"#).is_err());
    }

    #[test]
    fn test_pretty_envelope_parses_back() {
        let response = Response::ok(vec![Value::Int(1), Value::Float(0.5)]);
        let pretty = response.to_json_pretty().unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<Response>(&pretty).unwrap(), response);
    }
}
