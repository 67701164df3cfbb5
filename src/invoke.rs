// Command invocation for Commander Core

use tracing::debug;

use crate::command::Command;
use crate::decode::{decode_command, decode_function_call, decode_strings};
use crate::parallel::parallel_map;
use crate::registry::{Descriptor, Registry};
use crate::response::Response;
use crate::types::{CommanderError, Result, TypeTag};
use crate::value::Value;

impl Registry {
    /// Validate `args` against the named command and run it.
    ///
    /// Returns every output of the command, in order.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Vec<Value>> {
        debug!(command = name, args = args.len(), "invoking command");

        let outcome = self.call_unlogged(name, args);
        if let Err(err) = &outcome {
            debug!(command = name, error = %err, "command rejected");
        }
        outcome
    }

    /// [`Registry::call`] wrapped into a [`Response`].
    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Response {
        Response::from_outcome(self.call(name, args))
    }

    pub fn call_command(&self, command: Command) -> Response {
        self.invoke(&command.name, command.args)
    }

    /// Decode a structured JSON payload and invoke it.
    pub fn call_json(&self, payload: &str) -> Response {
        match decode_command(payload) {
            Ok(command) => self.call_command(command),
            Err(err) => Response::err(&err),
        }
    }

    /// Decode positional literal strings and invoke them.
    pub fn call_strings<S: AsRef<str>>(&self, name: &str, raw_args: &[S]) -> Response {
        match decode_strings(name, raw_args) {
            Ok(command) => self.call_command(command),
            Err(err) => Response::err(&err),
        }
    }

    /// Parse `name(arg, ...)` text and invoke it.
    pub fn call_function_text(&self, text: &str) -> Response {
        match decode_function_call(text) {
            Ok(command) => self.call_command(command),
            Err(err) => Response::err(&err),
        }
    }

    /// Invoke independent commands, in parallel where threads exist.
    ///
    /// Responses come back in the order of `commands`.
    pub fn invoke_batch(&self, commands: &[Command]) -> Vec<Response> {
        parallel_map(commands, |command| self.invoke(&command.name, command.args.clone()))
    }

    fn call_unlogged(&self, name: &str, args: Vec<Value>) -> Result<Vec<Value>> {
        let descriptor = self
            .lookup(name)
            .ok_or_else(|| CommanderError::CommandNotFound { name: name.to_string() })?;

        let adapter = descriptor
            .adapter()
            .ok_or_else(|| CommanderError::NotCallable { name: name.to_string() })?;

        let args = check_arguments(descriptor, args)?;

        adapter(args).map_err(|message| CommanderError::OperationFailed {
            name: name.to_string(),
            message,
        })
    }
}

/// Match `args` against the descriptor's parameter types.
///
/// An integral `Float` is accepted for an `Int` parameter and an `Int` for a
/// `Float` parameter, both converted. Any other difference rejects the whole call, reporting both full type
/// lists.
pub fn check_arguments(descriptor: &Descriptor, args: Vec<Value>) -> Result<Vec<Value>> {
    let want = descriptor.params();

    if args.len() != want.len() {
        return Err(CommanderError::ArityMismatch {
            name: descriptor.name().to_string(),
            got: args.len(),
            want: want.to_vec(),
        });
    }

    let got: Vec<TypeTag> = args.iter().map(Value::type_tag).collect();
    let mut checked = Vec::with_capacity(args.len());

    for (arg, &param) in args.into_iter().zip(want) {
        match coerce(arg, param) {
            Some(value) => checked.push(value),
            None => {
                return Err(CommanderError::TypeMismatch {
                    name: descriptor.name().to_string(),
                    got,
                    want: want.to_vec(),
                })
            }
        }
    }

    Ok(checked)
}

fn coerce(arg: Value, param: TypeTag) -> Option<Value> {
    if arg.type_tag() == param {
        return Some(arg);
    }
    match (param, &arg) {
        (TypeTag::Int, Value::Float(_)) => arg.integral().map(Value::Int),
        (TypeTag::Float, Value::Int(n)) => Some(Value::Float(*n as f64)),
        _ => None,
    }
}
