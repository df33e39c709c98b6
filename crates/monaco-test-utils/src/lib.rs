//! Shared test utilities for the monaco-forms workspace.
//!
//! This crate provides standardised settings fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only —
//! never published.
//!
//! # Modules
//!
//! - [`settings`] — canonical [`EditorSettings`](monaco_conf::EditorSettings)
//!   override sets and on-disk settings files

pub mod settings;
