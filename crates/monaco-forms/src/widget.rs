//! The Monaco editor form widget and its render context
//!
//! The widget resolves its effective configuration once, at construction,
//! and turns a stored value into the context a template needs to mount the
//! client-side editor component.

use crate::{EditorOverrides, WidgetMedia};
use monaco_conf::{ConfigResolver, Dimension};
use serde::Serialize;
use serde_json::{Map, Value};

/// A form widget that renders a Monaco editor in place of a plain textarea.
///
/// Construction resolves the configuration layers in order: built-in
/// defaults, then process-wide settings, then the supplied overrides. The
/// widget holds concrete values for its whole lifetime, so rendering the
/// same widget twice yields the same context.
///
/// # Example
///
/// ```
/// use monaco_forms::{EditorOverrides, MonacoEditorWidget};
/// use monaco_conf::{ConfigResolver, EditorSettings};
///
/// let overrides = EditorOverrides {
///     language: Some("sql".to_string()),
///     readonly: true,
///     ..Default::default()
/// };
/// let resolver = ConfigResolver::new(EditorSettings::default());
/// let widget = MonacoEditorWidget::with_resolver(overrides, &resolver);
///
/// assert_eq!(widget.language(), "sql");
/// assert!(widget.readonly());
/// assert_eq!(widget.theme(), "vs-dark");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonacoEditorWidget {
    language: String,
    theme: String,
    height: Dimension,
    width: Dimension,
    readonly: bool,
    editor_options: Map<String, Value>,
    cdn_path: String,
}

impl MonacoEditorWidget {
    /// Build a widget against the process-wide settings.
    pub fn new(overrides: EditorOverrides) -> Self {
        Self::with_resolver(overrides, &ConfigResolver::from_process())
    }

    /// Build a widget against an explicit resolver.
    ///
    /// Useful for tests and for applications that wire settings explicitly
    /// instead of installing them process-wide.
    pub fn with_resolver(overrides: EditorOverrides, resolver: &ConfigResolver) -> Self {
        let resolved = resolver.resolve();
        // cdn_path reads the whole config; take it before the knobs move out.
        let cdn_path = resolved.cdn_path();
        let editor_options = resolver.merged_options(overrides.editor_options.as_ref());

        let widget = Self {
            language: overrides.language.unwrap_or(resolved.language),
            theme: overrides.theme.unwrap_or(resolved.theme),
            height: overrides.height.unwrap_or(resolved.height),
            width: overrides.width.unwrap_or(resolved.width),
            readonly: overrides.readonly,
            editor_options,
            cdn_path,
        };
        tracing::debug!(
            language = %widget.language,
            theme = %widget.theme,
            "Built Monaco editor widget"
        );
        widget
    }

    /// Effective syntax-highlighting language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Effective editor theme.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Effective editor height.
    pub fn height(&self) -> &Dimension {
        &self.height
    }

    /// Effective editor width.
    pub fn width(&self) -> &Dimension {
        &self.width
    }

    /// Whether the editor renders read-only.
    pub fn readonly(&self) -> bool {
        self.readonly
    }

    /// The fully merged editor options map.
    pub fn editor_options(&self) -> &Map<String, Value> {
        &self.editor_options
    }

    /// Build the render context for a stored value.
    ///
    /// `None` renders an empty editor; callers do not need to distinguish
    /// a missing value from an empty string.
    ///
    /// The `monaco_config` object carries the language, theme, value and
    /// read-only flag alongside the merged editor options, spread at the
    /// top level. An option key that collides with one of the base keys
    /// overrides it.
    pub fn context(&self, value: Option<&str>) -> WidgetContext {
        let mut config = Map::new();
        config.insert(
            "language".to_string(),
            Value::String(self.language.clone()),
        );
        config.insert("theme".to_string(), Value::String(self.theme.clone()));
        config.insert(
            "value".to_string(),
            Value::String(value.unwrap_or("").to_string()),
        );
        config.insert("readOnly".to_string(), Value::Bool(self.readonly));
        for (key, option) in &self.editor_options {
            config.insert(key.clone(), option.clone());
        }

        WidgetContext {
            monaco_config: Value::Object(config),
            monaco_cdn_path: self.cdn_path.clone(),
            editor_height: self.height.to_css(),
            editor_width: self.width.to_css(),
        }
    }

    /// Asset declaration for form-media collection.
    ///
    /// Always empty: the editor script is loaded by the template from
    /// [`WidgetContext::monaco_cdn_path`], never bundled here.
    pub fn media(&self) -> WidgetMedia {
        WidgetMedia::default()
    }
}

impl Default for MonacoEditorWidget {
    /// A widget with no overrides: everything comes from the process-wide
    /// settings and the built-in defaults.
    fn default() -> Self {
        Self::new(EditorOverrides::default())
    }
}

/// Render context handed to the template that mounts the editor.
///
/// Every field is template-ready: `monaco_config` serializes to the JSON
/// the client-side component consumes, the dimensions are CSS strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetContext {
    /// Client-side editor configuration: language, theme, value and
    /// readOnly plus the merged editor options at the top level
    pub monaco_config: Value,

    /// Absolute URL the editor script is loaded from
    pub monaco_cdn_path: String,

    /// CSS height for the editor container
    pub editor_height: String,

    /// CSS width for the editor container
    pub editor_width: String,
}

impl WidgetContext {
    /// Compact JSON rendition of [`Self::monaco_config`] for embedding in
    /// markup attributes or inline script tags.
    pub fn monaco_config_json(&self) -> String {
        self.monaco_config.to_string()
    }
}
