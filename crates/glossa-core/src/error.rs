//! Error types for glossa.

use thiserror::Error;

/// Result type alias using glossa's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for glossa operations.
///
/// Adapter-level errors propagate unchanged through the delegation chain
/// (NER → CoNLL → JSONL), so callers see the original kind regardless of
/// which entry point they used.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed row or record shape (e.g. unparseable structured text)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Header/row arity mismatch in a tabular adapter
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// Backing-store read failed; propagated to the caller, never retried
    #[error("Store lookup failed: {0}")]
    StoreLookup(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidRecord(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_record() {
        let err = Error::InvalidRecord("text field missing".to_string());
        assert_eq!(err.to_string(), "Invalid record: text field missing");
    }

    #[test]
    fn test_error_display_malformed_table() {
        let err = Error::MalformedTable("line 3: expected 2 fields, got 5".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed table: line 3: expected 2 fields, got 5"
        );
    }

    #[test]
    fn test_error_display_store_lookup() {
        let err = Error::StoreLookup("connection reset".to_string());
        assert_eq!(err.to_string(), "Store lookup failed: connection reset");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::InvalidRecord(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected InvalidRecord error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
