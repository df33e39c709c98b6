//! End-to-end integration test for the editor pipeline
//!
//! Exercises the complete flow: settings file on disk -> resolver ->
//! field declaration -> widget -> template render context, plus the
//! migration round trip a field declaration goes through.

use monaco_conf::{ConfigResolver, Dimension, EditorSettings};
use monaco_forms::{EditorOverrides, MonacoField};
use monaco_test_utils::settings::{SettingsFile, options};
use pretty_assertions::assert_eq;
use serde_json::json;

fn project_settings_file() -> SettingsFile {
    SettingsFile::write(
        "monaco.toml",
        r#"
theme = "vs"
monaco_cdn_version = "0.52.2"

[editor_options]
fontSize = 16
wordWrap = "on"

[editor_options.minimap]
enabled = false
"#,
    )
}

#[test]
fn test_settings_file_flows_through_to_the_render_context() {
    let file = project_settings_file();
    let settings = EditorSettings::load(file.path()).unwrap();
    let resolver = ConfigResolver::new(settings);

    let field = MonacoField::new(EditorOverrides {
        language: Some("sql".to_string()),
        height: Some(Dimension::Pixels(300)),
        editor_options: Some(options(json!({ "minimap": { "side": "left" } }))),
        ..Default::default()
    });

    let context = field.widget_with(&resolver).context(Some("SELECT 1;"));
    let config = context.monaco_config.as_object().unwrap();

    // Field declaration knobs.
    assert_eq!(config["language"], json!("sql"));
    assert_eq!(config["value"], json!("SELECT 1;"));
    assert_eq!(context.editor_height, "300px");

    // Settings file knobs.
    assert_eq!(config["theme"], json!("vs"));
    assert_eq!(config["fontSize"], json!(16));
    assert_eq!(config["wordWrap"], json!("on"));
    assert_eq!(
        context.monaco_cdn_path,
        "https://cdn.jsdelivr.net/npm/monaco-editor@0.52.2/min/vs"
    );

    // All three layers meet inside the minimap table.
    assert_eq!(config["minimap"], json!({ "enabled": false, "side": "left" }));

    // Built-in defaults fill everything left unset.
    assert_eq!(config["tabSize"], json!(4));
    assert_eq!(context.editor_width, "100%");
}

#[test]
fn test_widget_with_no_parameters_renders_a_complete_context() {
    let resolver = ConfigResolver::new(EditorSettings::default());
    let field = MonacoField::default();

    let context = field.widget_with(&resolver).context(None);
    let config = context.monaco_config.as_object().unwrap();

    for key in ["language", "theme", "value", "readOnly"] {
        assert!(config.contains_key(key), "missing config key: {key}");
    }
    assert!(!context.monaco_cdn_path.is_empty());
    assert!(!context.editor_height.is_empty());
    assert!(!context.editor_width.is_empty());
}

#[test]
fn test_declaration_survives_a_serialized_migration_round_trip() {
    let field = MonacoField::new(EditorOverrides {
        language: Some("javascript".to_string()),
        readonly: true,
        editor_options: Some(options(json!({ "fontSize": 12 }))),
        ..Default::default()
    });

    // Simulate migration storage: serialize the kwargs to text and back.
    let stored = serde_json::to_string(&field.deconstruct()).unwrap();
    let loaded: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&stored).unwrap();
    let rebuilt = MonacoField::from_deconstructed(&loaded).unwrap();

    assert_eq!(rebuilt, field);

    // The rebuilt declaration produces an identically configured widget.
    let resolver = ConfigResolver::new(EditorSettings::default());
    assert_eq!(
        rebuilt.widget_with(&resolver).context(None),
        field.widget_with(&resolver).context(None)
    );
}
