//! Error types for text analysis

use thiserror::Error;

/// Errors produced by the analysis library
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A ratio was requested whose divisor is zero
    #[error("{metric} is undefined: the text contains no {divisor}")]
    DivisionUndefined {
        /// The metric that was requested
        metric: &'static str,
        /// The count that turned out to be zero
        divisor: &'static str,
    },

    /// Markup cleanup hit an unterminated tag
    #[error("malformed markup: unterminated tag at byte {position}")]
    MalformedMarkup {
        /// Byte offset of the opening `<`
        position: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid search pattern
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Language profile or analyzer configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::string::FromUtf8Error> for AnalysisError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AnalysisError::Encoding(err.to_string())
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
