//! Tests for the process-wide settings installation flow
//!
//! The installed settings are process-global state, so this binary holds a
//! single test that walks the whole lifecycle in order. Splitting it into
//! separate `#[test]` functions would make the outcome depend on the order
//! the harness runs them in.

use monaco_conf::{ConfigResolver, Error, settings};
use monaco_forms::{MonacoEditorWidget, MonacoField};
use monaco_test_utils::settings::sample_settings;
use serde_json::json;

#[test]
fn test_install_once_then_every_consumer_sees_the_settings() {
    // Nothing installed yet: consumers fall back to the empty default.
    assert!(!settings::is_installed());
    assert_eq!(settings::current(), Default::default());

    settings::install(sample_settings()).unwrap();

    assert!(settings::is_installed());
    assert_eq!(settings::current(), sample_settings());

    // A widget built through the process-wide path picks the settings up.
    let context = MonacoField::default().widget().context(None);
    assert_eq!(context.monaco_config["language"], json!("javascript"));
    assert_eq!(context.monaco_config["theme"], json!("vs"));
    assert_eq!(context.monaco_config["fontSize"], json!(16));
    assert_eq!(context.editor_height, "500px");

    // The Default constructors route through the process-wide path too.
    assert_eq!(ConfigResolver::default().resolve().language, "javascript");
    let default_widget = MonacoEditorWidget::default();
    assert_eq!(default_widget.theme(), "vs");
    assert_eq!(default_widget.context(None), context);

    // A second installation is rejected and the first stays in place.
    let error = settings::install(Default::default()).unwrap_err();
    assert!(matches!(error, Error::AlreadyInstalled));
    assert_eq!(settings::current(), sample_settings());
}
