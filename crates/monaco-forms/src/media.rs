//! Client-side asset declaration for the widget

use serde::Serialize;

/// CSS and JS assets a widget asks the hosting form layer to collect.
///
/// The Monaco widget keeps both lists empty: the editor script is loaded by
/// the widget template straight from the CDN path in its render context, so
/// there is nothing for form-media collection to pick up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetMedia {
    /// Stylesheet URLs
    pub css: Vec<String>,
    /// Script URLs
    pub js: Vec<String>,
}

impl WidgetMedia {
    /// True when the widget declares no assets at all.
    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty()
    }
}
