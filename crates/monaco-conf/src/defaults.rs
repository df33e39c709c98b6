//! Built-in defaults for the Monaco editor integration
//!
//! These form the lowest layer of the configuration merge: process-wide
//! [`EditorSettings`](crate::EditorSettings) overrides sit on top of them,
//! and per-widget overrides sit on top of both.

use crate::Dimension;
use serde_json::{Map, Value, json};

/// Default syntax-highlighting language
pub const LANGUAGE: &str = "python";

/// Default editor theme
pub const THEME: &str = "vs-dark";

/// Default editor height in pixels
pub const HEIGHT: i64 = 400;

/// Default editor width (CSS)
pub const WIDTH: &str = "100%";

/// Monaco release loaded when settings do not pin one
pub const CDN_VERSION: &str = "0.53.0";

/// CDN URL template; `{version}` is substituted at resolve time
pub const CDN_URL: &str = "https://cdn.jsdelivr.net/npm/monaco-editor@{version}/min/vs";

/// Stock editor themes, for call sites that prefer names over bare strings.
pub mod themes {
    /// Light theme
    pub const VS: &str = "vs";
    /// Dark theme
    pub const VS_DARK: &str = "vs-dark";
    /// High-contrast dark theme
    pub const HC_BLACK: &str = "hc-black";
    /// High-contrast light theme
    pub const HC_LIGHT: &str = "hc-light";
}

/// Default height as a [`Dimension`].
pub fn height() -> Dimension {
    Dimension::Pixels(HEIGHT)
}

/// Default width as a [`Dimension`].
pub fn width() -> Dimension {
    Dimension::Css(WIDTH.to_string())
}

/// The built-in editor options handed to the client-side component.
///
/// Returns a fresh map on every call; resolution merges settings and
/// per-widget overrides on top without touching shared state.
pub fn editor_options() -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("automaticLayout".to_string(), json!(true));
    options.insert("minimap".to_string(), json!({ "enabled": true }));
    options.insert("scrollBeyondLastLine".to_string(), json!(false));
    options.insert("fontSize".to_string(), json!(14));
    options.insert("tabSize".to_string(), json!(4));
    options.insert("wordWrap".to_string(), json!("off"));
    options.insert("lineNumbers".to_string(), json!("on"));
    options.insert("renderWhitespace".to_string(), json!("none"));
    options.insert("folding".to_string(), json!(true));
    options.insert("links".to_string(), json!(true));
    options.insert("colorDecorators".to_string(), json!(true));
    options
}
