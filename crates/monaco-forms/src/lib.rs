//! Monaco editor form integration: widget and model-field declaration
//!
//! This crate provides the form-facing surface of the integration:
//!
//! - **[`MonacoField`]**: a text-column declaration that renders with the
//!   editor widget and serializes itself for migration tooling
//! - **[`MonacoEditorWidget`]**: the widget, resolved against layered
//!   configuration at construction
//! - **[`WidgetContext`]**: the template-ready render context
//!
//! # Architecture
//!
//! `monaco-forms` sits above `monaco-conf` and below the hosting web
//! framework:
//!
//! ```text
//!   host model / form layer
//!            |
//!      monaco-forms
//!            |
//!      monaco-conf
//! ```
//!
//! # Example
//!
//! ```
//! use monaco_conf::{ConfigResolver, EditorSettings};
//! use monaco_forms::{EditorOverrides, MonacoField};
//!
//! let field = MonacoField::new(EditorOverrides {
//!     language: Some("sql".to_string()),
//!     ..Default::default()
//! });
//!
//! let resolver = ConfigResolver::new(EditorSettings::default());
//! let context = field.widget_with(&resolver).context(Some("SELECT 1;"));
//!
//! assert_eq!(context.monaco_config["language"], "sql");
//! assert_eq!(context.monaco_config["value"], "SELECT 1;");
//! ```

pub mod error;
pub mod field;
pub mod media;
pub mod overrides;
pub mod widget;

pub use error::{Error, Result};
pub use field::MonacoField;
pub use media::WidgetMedia;
pub use overrides::EditorOverrides;
pub use widget::{MonacoEditorWidget, WidgetContext};
