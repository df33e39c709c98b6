//! Error types for monaco-forms

/// Result type for monaco-forms operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling field declarations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid field declaration: {message}")]
    InvalidDeclaration { message: String },
}
