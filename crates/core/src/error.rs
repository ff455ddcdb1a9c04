//! Error types.

use thiserror::Error;

/// Result alias used throughout the cutlist crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard precondition failures.
///
/// Problems with individual pieces or blocks that only show up while packing
/// (too large for the sheet, malformed block grouping) are not errors; they are
/// reported through [`crate::RunResult`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A piece record is structurally invalid.
    #[error("invalid piece: {0}")]
    InvalidPiece(String),

    /// The sheet configuration is structurally invalid.
    #[error("invalid sheet configuration: {0}")]
    InvalidConfig(String),

    /// A host request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPiece("width of 'P1' must be positive".into());
        assert_eq!(err.to_string(), "invalid piece: width of 'P1' must be positive");

        let err = Error::InvalidConfig("scan step must be positive".into());
        assert!(err.to_string().starts_with("invalid sheet configuration"));
    }
}
