mod utils;

use wasm_bindgen::prelude::*;

const UNESCAPE_ERROR_PREFIX: &str = "ERROR: Invalid string to unescape. Please check the format. ";

#[wasm_bindgen]
pub fn initialise() {
    utils::set_panic_hook();
}

/// Escapes `input` into the body of a JSON string literal. Never fails.
#[wasm_bindgen]
pub fn escape_text(input: &str) -> String {
    jsonesc_core::escape(input)
}

/// Unescapes a JSON string literal body back into plain text. On invalid
/// input the returned string is a diagnostic message rather than a value;
/// the page renders it directly in the output field.
#[wasm_bindgen]
pub fn unescape_text(input: &str) -> String {
    match jsonesc_core::unescape(input) {
        Ok(res) => res,
        Err(msg) => format!("{UNESCAPE_ERROR_PREFIX}{msg}"),
    }
}
