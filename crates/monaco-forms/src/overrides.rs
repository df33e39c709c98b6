//! Declaration-time knobs shared by the widget and the field declaration

use monaco_conf::Dimension;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Optional per-declaration overrides for the resolved editor configuration.
///
/// This is the knob set a field declaration accepts and forwards to its
/// widget. Anything left `None` falls back to the process-wide settings or
/// the built-in defaults; `readonly` defaults to editable.
///
/// Serialization is compact: unset knobs and a false `readonly` are skipped
/// entirely, so a serialized declaration records only what differs from the
/// defaults. Unknown keys are rejected on the way back in, making a
/// mistyped knob in stored declaration data fail loudly instead of being
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorOverrides {
    /// Syntax-highlighting language (e.g. "python", "javascript", "sql")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Editor theme (e.g. "vs", "vs-dark", "hc-black")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Editor height, pixels or CSS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Editor width, pixels or CSS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    /// Render the editor read-only
    #[serde(skip_serializing_if = "is_false")]
    pub readonly: bool,

    /// Editor options deep-merged over the defaults and settings layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_options: Option<Map<String, Value>>,
}

impl EditorOverrides {
    /// True when every knob is unset and the declaration adds nothing.
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.theme.is_none()
            && self.height.is_none()
            && self.width.is_none()
            && !self.readonly
            && self.editor_options.is_none()
    }
}
