//! Process-wide editor settings
//!
//! An application overrides the built-in defaults by installing an
//! [`EditorSettings`] value once at startup. Every knob is optional;
//! anything left `None` falls back to the built-in default at resolve time.
//!
//! ```
//! use monaco_conf::EditorSettings;
//!
//! let settings = EditorSettings::from_toml_str(
//!     r#"
//! language = "javascript"
//! theme = "vs"
//!
//! [editor_options]
//! fontSize = 16
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.language.as_deref(), Some("javascript"));
//! ```

use crate::{Dimension, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Process-wide overrides for the built-in editor defaults.
///
/// Mirrors the recognized settings keys one-to-one. Unrecognized keys in a
/// settings source are ignored rather than rejected, so a settings file can
/// carry sections for other subsystems alongside these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Syntax-highlighting language applied when a declaration does not choose one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Editor theme (see [`crate::defaults::themes`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Editor height, pixels or CSS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Editor width, pixels or CSS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    /// Monaco release to load from the CDN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monaco_cdn_version: Option<String>,

    /// CDN URL template with a `{version}` placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monaco_cdn_url: Option<String>,

    /// Editor options deep-merged over the built-in option defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_options: Option<Map<String, Value>>,
}

impl EditorSettings {
    /// Parse settings from TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse {
            format: "TOML".into(),
            message: e.to_string(),
        })
    }

    /// Parse settings from JSON content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Parse {
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Parse settings from YAML content.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse {
            format: "YAML".into(),
            message: e.to_string(),
        })
    }

    /// Load settings from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading editor settings");

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

static PROCESS_SETTINGS: OnceLock<EditorSettings> = OnceLock::new();

/// Install `settings` as the process-wide layer.
///
/// May be called at most once per process, before any widget or field
/// resolves its configuration. A second call returns
/// [`Error::AlreadyInstalled`] and leaves the first installation in place.
pub fn install(settings: EditorSettings) -> Result<()> {
    PROCESS_SETTINGS
        .set(settings)
        .map_err(|_| Error::AlreadyInstalled)?;
    tracing::debug!("Installed process-wide editor settings");
    Ok(())
}

/// The currently installed settings.
///
/// Returns the empty default when the application never installed any, so
/// resolution always has a settings layer to consult.
pub fn current() -> EditorSettings {
    PROCESS_SETTINGS.get().cloned().unwrap_or_default()
}

/// Whether [`install`] has been called in this process.
pub fn is_installed() -> bool {
    PROCESS_SETTINGS.get().is_some()
}
