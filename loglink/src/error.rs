//! Errors raised by loggers and logger factories.

/// Result type for fallible logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Errors returned by [`LoggerFactory`](crate::LoggerFactory) and its
/// implementations.
///
/// Errors are raised before any state is touched: a failed call has no
/// partial effect.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoggerError {
    /// A required argument was empty or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
