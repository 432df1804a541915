//! Error types for the model generator

use thiserror::Error;

/// Result type for model generator operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Model generator errors
///
/// Element-scoped variants (`InvalidIdentifier`, `UnsupportedElementType`,
/// `DuplicateProperty`) are recovered by the compiler and reported as
/// diagnostics. `MissingSnippet` and `AllowedTypeNotFound` mean the fetched
/// schemas are inconsistent and abort the run.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Can't create a valid identifier from '{text}'")]
    InvalidIdentifier { text: String },

    #[error("Unsupported content element type: {kind}")]
    UnsupportedElementType { kind: String },

    #[error("Property '{codename}' is already present in class '{class_name}'")]
    DuplicateProperty { codename: String, class_name: String },

    #[error("Property codename constant '{codename}' is already present in class '{class_name}'")]
    DuplicatePropertyCodenameConstant { codename: String, class_name: String },

    #[error("Snippet '{codename}' was not found")]
    MissingSnippet { codename: String },

    #[error("Allowed content type {reference} of element '{element}' was not found")]
    AllowedTypeNotFound { reference: String, element: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
