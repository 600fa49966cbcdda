//! Extraction errors.

use thiserror::Error;

/// Failures surfaced by the JSON-accepting extractors.
///
/// Anything not listed here degrades to a best-effort result instead: an
/// unreadable version spec or a missing resolved entry costs a version
/// annotation, not the whole extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Raw text input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed lockfile has no usable resolved package tree.
    #[error("invalid lockfile: missing or empty \"packages\" map")]
    InvalidLockfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ExtractError::from(err);
        assert!(matches!(err, ExtractError::Parse(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_invalid_lockfile_message() {
        let msg = ExtractError::InvalidLockfile.to_string();
        assert!(msg.contains("packages"));
    }
}
