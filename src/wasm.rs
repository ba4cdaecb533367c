//! WASM bindings for the goat-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::error::LayoutError;
use crate::layout::{self, LayoutConfig, LAYOUT_NAMES};
use crate::output::{self, ExploreOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

// Imported JS functions panic off wasm, so native builds (tests) go to stderr.
#[cfg(target_arch = "wasm32")]
fn log_error(msg: &str) {
    console_error(msg);
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(msg: &str) {
    eprintln!("{}", msg);
}

/// Generate `count` tile positions with the default branching layout.
/// Returns a JSON array of `{x, y}`; negative counts yield `[]`.
#[wasm_bindgen]
pub fn generate_positions(count: i32) -> String {
    let count = match usize::try_from(count) {
        Ok(c) => c,
        Err(_) => {
            log_error(&format!("Error generating positions: {}", LayoutError::NegativeCount(count.into())));
            return "[]".to_string();
        }
    };

    let cells = layout::generate_positions(count);
    serde_json::to_string(&cells).unwrap_or_else(|_| "[]".to_string())
}

/// Lay out the explore page. `items_json` is an array of `{id, label?, href?}`;
/// an empty `layout` selects "branching".
#[wasm_bindgen]
pub fn layout_explore_grid(items_json: &str, layout: &str) -> String {
    let layout_name = if layout.is_empty() { "branching" } else { layout };

    let result = output::parse_items(items_json)
        .and_then(|items| output::layout_explore(&items, layout_name, &LayoutConfig::default()));

    let out = match result {
        Ok(out) => out,
        Err(e) => {
            log_error(&format!("Error laying out explore grid: {}", e));
            ExploreOutput::from_error(&e)
        }
    };
    serde_json::to_string(&out).unwrap_or_else(|e| error_json(&e.to_string()))
}

/// `{"error": {"message": ...}}` with the message escaped.
fn error_json(message: &str) -> String {
    serde_json::json!({ "error": { "message": message } }).to_string()
}

/// Supported layout names as a JSON array of strings.
#[wasm_bindgen]
pub fn layout_names() -> String {
    serde_json::to_string(LAYOUT_NAMES).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_positions_json() {
        assert_eq!(generate_positions(0), "[]");
        assert_eq!(generate_positions(3), r#"[{"x":0,"y":0},{"x":1,"y":0},{"x":2,"y":0}]"#);
    }

    #[test]
    fn test_generate_positions_negative() {
        assert_eq!(generate_positions(-4), "[]");
    }

    #[test]
    fn test_layout_explore_grid_default_layout() {
        let json = layout_explore_grid(r#"[{"id":"a"},{"id":"b"}]"#, "");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["cols"], 2);
        assert_eq!(v["rows"], 1);
        assert_eq!(v["tiles"][1]["id"], "b");
        assert!(v.get("error").is_none());
    }

    #[test]
    fn test_layout_explore_grid_errors() {
        let v: serde_json::Value = serde_json::from_str(&layout_explore_grid("nope", "branching")).unwrap();
        assert!(v["error"]["message"].as_str().unwrap().starts_with("invalid item list"));

        let v: serde_json::Value = serde_json::from_str(&layout_explore_grid("[]", "spiral")).unwrap();
        assert_eq!(v["error"]["message"], "unknown layout 'spiral'");
    }

    #[test]
    fn test_error_json_escapes_message() {
        let json = error_json(r#"bad "quoted" \ input"#);
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["error"]["message"], r#"bad "quoted" \ input"#);
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(layout_names(), r#"["branching","breadth","grid"]"#);
    }
}
