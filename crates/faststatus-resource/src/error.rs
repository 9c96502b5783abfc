use thiserror::Error;

/// Errors produced by resource model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("status {0} out of range (valid values are 0, 1, and 2)")]
    OutOfRange(u8),

    #[error("invalid hexadecimal identifier: {0:?}")]
    ParseError(String),
}
