// Commander Core - Rust/WASM Implementation
// Copyright 2025 The Carpocratian Church of Commonality and Equality, Inc.
// Licensed under the Apache License, Version 2.0

//! # Commander Core (Rust/WASM)
//!
//! A registry of named commands that clients call by name with a list of
//! dynamically-typed arguments. Arguments are checked against each
//! command's signature at call time.
//!
//! ## Architecture
//!
//! - **Value**: closed tagged union used for all arguments and results
//! - **Registry**: write-once name → descriptor table
//! - **Invoker**: arity and type checks, int/float coercion, dispatch
//! - **Decoders**: structured JSON, positional literal strings, and
//!   `name(arg, ...)` function-call text
//! - **Response**: `{"Result": [...], "Error": null}` envelope
//!
//! ```
//! use commander_core::{Registry, Response, Value};
//!
//! let registry = Registry::builder()
//!     .register("concat", |a: String, b: String| a + &b)
//!     .build();
//!
//! let response = registry.call_function_text(r#"concat("ab", "cd")"#);
//! assert_eq!(response, Response::ok(vec![Value::from("abcd")]));
//! ```

use wasm_bindgen::prelude::*;

// Module declarations
mod builtins;
mod center;
mod command;
mod config;
mod decode;
mod funcall;
mod invoke;
mod parallel;
mod registry;
mod response;
mod types;
mod utils;
mod value;

// Re-exports
pub use builtins::{registry as builtin_registry, registry_with as builtin_registry_with, BUILTINS};
pub use center::CommandCenter;
pub use command::Command;
pub use config::CenterConfig;
pub use decode::{decode_command, decode_function_call, decode_strings};
pub use funcall::parse_function_call;
pub use invoke::check_arguments;
pub use parallel::parallel_map;
pub use registry::{Adapter, Descriptor, FromValue, IntoOutputs, IntoValue, Operation, Registry, RegistryBuilder};
pub use response::Response;
pub use types::{CommanderError, Result, TypeTag};
pub use value::Value;

// WASM initialization
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
