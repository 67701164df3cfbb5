// WASM boundary tests for Commander Core
//
// Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use commander_core::CommandCenter;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_call_strings_from_js_array() {
    let center = CommandCenter::new(None).unwrap();
    let args = serde_wasm_bindgen::to_value(&vec!["10", "12"]).unwrap();
    assert_eq!(center.call_strings("multInt", args).unwrap(), r#"{"Result":[120],"Error":null}"#);
}

#[wasm_bindgen_test]
fn test_call_strings_rejects_non_array() {
    let center = CommandCenter::new(None).unwrap();
    let response = center.call_strings("multInt", JsValue::from_f64(3.0)).unwrap();
    assert!(response.starts_with(r#"{"Result":null,"Error":"#));
}

#[wasm_bindgen_test]
fn test_call_function() {
    let center = CommandCenter::new(None).unwrap();
    assert_eq!(center.call_function("gimmeTrue()").unwrap(), r#"{"Result":[true],"Error":null}"#);
}
