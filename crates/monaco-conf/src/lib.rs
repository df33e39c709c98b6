//! Layered configuration resolution for the Monaco editor form integration
//!
//! This crate is the bottom layer of the integration: it owns the built-in
//! defaults, the process-wide settings object, and the layered merge that
//! produces the effective editor configuration consumed by `monaco-forms`.
//!
//! # Layering
//!
//! ```text
//! built-in defaults  <-  process-wide EditorSettings  <-  per-declaration overrides
//! ```
//!
//! Scalar knobs (language, theme, sizes, CDN coordinates) resolve by
//! first-present lookup. The nested `editor_options` map resolves by
//! recursive deep merge ([`merge::deep_merge`]), so a settings file can
//! flip `minimap.enabled` without restating the rest of the minimap table.
//!
//! # Example
//!
//! ```
//! use monaco_conf::{ConfigResolver, EditorSettings};
//!
//! let settings = EditorSettings {
//!     language: Some("javascript".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigResolver::new(settings).resolve();
//! assert_eq!(config.language, "javascript");
//! assert_eq!(config.theme, "vs-dark");
//! ```

pub mod defaults;
pub mod error;
pub mod merge;
pub mod resolver;
pub mod settings;
pub mod size;

pub use error::{Error, Result};
pub use resolver::{ConfigResolver, ResolvedConfig};
pub use settings::EditorSettings;
pub use size::Dimension;
