//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` combines the configuration layers in a defined
//! order, with later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`crate::defaults`])
//! 2. Process-wide [`EditorSettings`] overrides
//! 3. Per-declaration overrides supplied by a widget or field
//!
//! Scalar knobs resolve by first-present lookup; the nested editor options
//! map resolves by recursive deep merge.

use crate::{Dimension, EditorSettings, defaults, merge, settings};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The final resolved configuration after merging defaults and settings
///
/// This is the output of the resolution process: every knob holds a
/// concrete value, ready for a widget to consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Effective syntax-highlighting language
    pub language: String,

    /// Effective editor theme
    pub theme: String,

    /// Effective editor height
    pub height: Dimension,

    /// Effective editor width
    pub width: Dimension,

    /// Monaco release loaded from the CDN
    pub cdn_version: String,

    /// CDN URL template with the `{version}` placeholder intact
    pub cdn_url: String,

    /// Editor options: built-in defaults deep-merged with settings overrides
    pub editor_options: Map<String, Value>,
}

impl ResolvedConfig {
    /// The absolute CDN URL for the resolved Monaco release.
    ///
    /// Substitutes `{version}` in the URL template. A template without the
    /// placeholder is returned unchanged, which lets settings point at a
    /// fixed internal mirror.
    pub fn cdn_path(&self) -> String {
        self.cdn_url.replace("{version}", &self.cdn_version)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ConfigResolver::new(EditorSettings::default()).resolve()
    }
}

/// Resolves effective configuration from settings and built-in defaults
///
/// Resolution is recomputed on every call and nothing is cached, so a
/// resolver is cheap to build and safe to share across threads.
pub struct ConfigResolver {
    settings: EditorSettings,
}

impl ConfigResolver {
    /// Create a resolver over an explicit settings layer.
    pub fn new(settings: EditorSettings) -> Self {
        Self { settings }
    }

    /// Create a resolver over the process-wide settings.
    ///
    /// When the application never installed settings, the layer is empty
    /// and resolution yields the built-in defaults.
    pub fn from_process() -> Self {
        Self::new(settings::current())
    }

    /// The settings layer this resolver consults.
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Resolve every knob: the settings value when present, otherwise the
    /// built-in default.
    pub fn resolve(&self) -> ResolvedConfig {
        let settings = &self.settings;

        ResolvedConfig {
            language: settings
                .language
                .clone()
                .unwrap_or_else(|| defaults::LANGUAGE.to_string()),
            theme: settings
                .theme
                .clone()
                .unwrap_or_else(|| defaults::THEME.to_string()),
            height: settings.height.clone().unwrap_or_else(defaults::height),
            width: settings.width.clone().unwrap_or_else(defaults::width),
            cdn_version: settings
                .monaco_cdn_version
                .clone()
                .unwrap_or_else(|| defaults::CDN_VERSION.to_string()),
            cdn_url: settings
                .monaco_cdn_url
                .clone()
                .unwrap_or_else(|| defaults::CDN_URL.to_string()),
            editor_options: self.base_options(),
        }
    }

    /// The editor options map with declaration-level overrides applied.
    ///
    /// Merges three layers in order: built-in option defaults, the settings
    /// `editor_options` table, then `overrides`. Passing `None` yields the
    /// first two layers alone.
    pub fn merged_options(&self, overrides: Option<&Map<String, Value>>) -> Map<String, Value> {
        let mut options = self.base_options();
        if let Some(overrides) = overrides {
            merge::deep_merge(&mut options, overrides);
        }
        options
    }

    /// Built-in option defaults with the settings layer merged on top.
    fn base_options(&self) -> Map<String, Value> {
        let mut options = defaults::editor_options();
        if let Some(overrides) = &self.settings.editor_options {
            tracing::debug!(
                keys = overrides.len(),
                "Applying settings-level editor option overrides"
            );
            merge::deep_merge(&mut options, overrides);
        }
        options
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::from_process()
    }
}
