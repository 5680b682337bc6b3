//! Startup console banner with the shortcut legend.

use wasm_bindgen::JsValue;
use web_sys::console;

/// print the styled welcome message and shortcut legend to the dev
/// console. pure side effect, nothing to fail.
pub fn print_welcome() {
    console::log_2(
        &JsValue::from_str("%c🚀 Aelys HTTP Server"),
        &JsValue::from_str("font-size: 20px; font-weight: bold; color: #2563eb;"),
    );
    console::log_2(
        &JsValue::from_str("%cKeyboard shortcuts:"),
        &JsValue::from_str("font-weight: bold; margin-top: 10px;"),
    );

    for (i, path) in crate::api::ENDPOINTS.iter().enumerate() {
        console::log_1(&JsValue::from_str(&format!(
            "  Ctrl/Cmd + {}: Test {}",
            i + 1,
            path
        )));
    }
    console::log_1(&JsValue::from_str(&format!(
        "  Ctrl/Cmd + 4: Test {}",
        crate::api::ECHO_ENDPOINT
    )));
}
