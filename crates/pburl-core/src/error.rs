//! Error types for the URL codec.
//!
//! `UrlError` is the caller-facing error: its `Display` text is the exact
//! message callers match on. `PatternError` is the specific reason a
//! transformation pattern failed to parse; it is collapsed into
//! `UrlError::InvalidUrl` at the public boundary but kept as the `source()`.

use thiserror::Error;

pub(crate) const MSG_INVALID_URL: &str = "Invalid pixelbin url. Please make sure the url is correct.";
pub(crate) const MSG_PROCESSING_URL: &str = "Error Processing url. Please check the url is correct";
pub(crate) const MSG_INVALID_DPR: &str = "DPR value should be numeric and should be between 0.1 to 5.0";
pub(crate) const MSG_INVALID_F_AUTO: &str = "F_auto value should be boolean";

/// Result alias used across the codec.
pub type Result<T> = std::result::Result<T, UrlError>;

/// Caller-facing codec failure. No partial results are ever returned alongside one.
#[derive(Debug, Error)]
pub enum UrlError {
    /// No layout shape matched, or the transformation pattern could not be parsed.
    #[error("{message}")]
    InvalidUrl {
        message: String,
        #[source]
        cause: Option<PatternError>,
    },

    /// A required descriptor field is missing or a transformation param is malformed.
    #[error("{0}")]
    IllegalArgument(String),

    /// A query option value is outside its allowed set or range.
    #[error("{0}")]
    IllegalQueryParameter(String),
}

impl UrlError {
    /// Layout mismatch: the URL path does not fit any recognized shape.
    pub(crate) fn invalid_layout() -> Self {
        UrlError::InvalidUrl {
            message: MSG_INVALID_URL.to_string(),
            cause: None,
        }
    }

    pub(crate) fn illegal_argument(message: impl Into<String>) -> Self {
        UrlError::IllegalArgument(message.into())
    }

    pub(crate) fn illegal_query(message: &str) -> Self {
        UrlError::IllegalQueryParameter(message.to_string())
    }

    /// The underlying pattern failure, if this error came from the transformation codec.
    pub fn pattern_cause(&self) -> Option<&PatternError> {
        match self {
            UrlError::InvalidUrl { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }
}

/// Specific structural failure inside a single transformation token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Neither `.` nor (for presets) `:` separates plugin from operation.
    #[error("missing plugin/operation separator in '{token}'")]
    MissingSeparator { token: String },

    /// A non-preset operation was written without parentheses.
    #[error("missing parentheses in '{token}'")]
    MissingParentheses { token: String },

    /// A `)` appears without a preceding `(`.
    #[error("unbalanced parentheses in '{token}'")]
    UnbalancedParentheses { token: String },

    /// Plugin or operation name is empty.
    #[error("empty plugin or operation name in '{token}'")]
    EmptySegment { token: String },
}

impl From<PatternError> for UrlError {
    fn from(err: PatternError) -> Self {
        UrlError::InvalidUrl {
            message: MSG_PROCESSING_URL.to_string(),
            cause: Some(err),
        }
    }
}
