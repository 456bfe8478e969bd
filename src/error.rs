//! Error types and handling for Inlay
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Three error categories exist: configuration errors (bad options, unreadable
//! config) abort before any filesystem mutation; unknown component names are
//! collected during an install and surfaced together after every resolvable
//! component has been processed; filesystem errors during copy are fatal and
//! propagate immediately without rolling back files already copied.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Inlay operations
#[derive(Error, Diagnostic, Debug)]
pub enum InlayError {
    // Catalog errors
    #[error("Unknown components: {names}")]
    #[diagnostic(
        code(inlay::catalog::unknown_components),
        help("Run 'inlay list' to see every installable component")
    )]
    UnknownComponents { names: String },

    #[error("Component source root not found: {path}")]
    #[diagnostic(
        code(inlay::catalog::root_not_found),
        help("Pass --root or set INLAY_ROOT to the library's src/ directory")
    )]
    SourceRootNotFound { path: String },

    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(inlay::catalog::scan_failed))]
    CatalogScanFailed { path: String, reason: String },

    // Config errors
    #[error("Failed to read config '{path}': {reason}")]
    #[diagnostic(code(inlay::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse config '{path}': {reason}")]
    #[diagnostic(
        code(inlay::config::parse_failed),
        help("inlay.yaml must be a mapping with an optional 'destination' key")
    )]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(inlay::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(inlay::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy '{from}' to '{to}': {reason}")]
    #[diagnostic(
        code(inlay::fs::copy_failed),
        help("Files copied before the failure are left in place")
    )]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(inlay::fs::io_error))]
    IoError { message: String },

    // Interactive prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(inlay::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<inquire::InquireError> for InlayError {
    fn from(err: inquire::InquireError) -> Self {
        InlayError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias for Inlay operations
pub type Result<T> = std::result::Result<T, InlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_components_display() {
        let err = InlayError::UnknownComponents {
            names: "tooltip, carousel".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown components: tooltip, carousel");
    }

    #[test]
    fn test_copy_failed_display() {
        let err = InlayError::CopyFailed {
            from: "src/ui-badge/ui-badge.ts".to_string(),
            to: "dest/ui-badge/ui-badge.ts".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("src/ui-badge/ui-badge.ts"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_inquire_error_conversion() {
        let err: InlayError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, InlayError::PromptFailed { .. }));
    }
}
