//! WASM bindings for tagtidy.
//!
//! Exposes `prettify()`, `minify()` and `validate()` to JavaScript via
//! wasm-bindgen, under their own names.

use wasm_bindgen::prelude::*;

/// Reformat HTML with one tag segment per line.
///
/// Uses a tab per level when `use_tabs` is true, otherwise `indent_size`
/// spaces.
#[wasm_bindgen]
pub fn prettify(source: &str, indent_size: usize, use_tabs: bool) -> String {
    tagtidy_format::prettify(source, indent_size, use_tabs)
}

/// Strip comments (optionally) and insignificant whitespace.
#[wasm_bindgen]
pub fn minify(source: &str, remove_comments: bool) -> String {
    tagtidy_format::minify(source, remove_comments)
}

/// Check tag structure.
///
/// Returns a JS object `{ valid: boolean, errors: string[] }`.
#[wasm_bindgen]
pub fn validate(source: &str) -> Result<JsValue, JsError> {
    let report = tagtidy_format::validate(source);
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
