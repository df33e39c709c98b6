//! Settings fixtures: canonical override sets and on-disk settings files.

use monaco_conf::{Dimension, EditorSettings};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The canonical settings override set used across test suites.
///
/// Overrides the language, theme, height and two editor options; leaves the
/// width and the CDN knobs on their built-in defaults.
pub fn sample_settings() -> EditorSettings {
    EditorSettings {
        language: Some("javascript".to_string()),
        theme: Some("vs".to_string()),
        height: Some(Dimension::Pixels(500)),
        editor_options: Some(options(json!({
            "fontSize": 16,
            "minimap": { "enabled": false }
        }))),
        ..Default::default()
    }
}

/// The TOML rendition of [`sample_settings`].
pub const SAMPLE_SETTINGS_TOML: &str = r#"
language = "javascript"
theme = "vs"
height = 500

[editor_options]
fontSize = 16

[editor_options.minimap]
enabled = false
"#;

/// Unwrap a `json!` literal into the option-map type the crates pass around.
///
/// # Panics
///
/// Panics when the literal is not a JSON object.
pub fn options(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object fixture, got {other}"),
    }
}

/// A settings file written into its own temporary directory.
///
/// The directory lives exactly as long as the fixture, so tests never leak
/// files or collide on shared paths.
///
/// # Example
///
/// ```
/// use monaco_conf::EditorSettings;
/// use monaco_test_utils::settings::{SAMPLE_SETTINGS_TOML, SettingsFile};
///
/// let file = SettingsFile::write("monaco.toml", SAMPLE_SETTINGS_TOML);
/// let settings = EditorSettings::load(file.path()).unwrap();
/// assert_eq!(settings.theme.as_deref(), Some("vs"));
/// ```
pub struct SettingsFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl SettingsFile {
    /// Write `content` to `name` inside a fresh temporary directory.
    pub fn write(name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().expect("SettingsFile: failed to create temp dir");
        let path = temp_dir.path().join(name);
        fs::write(&path, content).expect("SettingsFile: failed to write settings file");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Path of the written settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
