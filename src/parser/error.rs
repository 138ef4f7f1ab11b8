use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::model::MissingField;

/// The response body could not be decoded as a whole.
///
/// Raised for invalid JSON and for a top-level shape that does not match the
/// endpoint. No element-level errors are reported when this happens.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse response from {uri}")]
pub struct ParseFailed {
    pub uri: Url,
    #[source]
    pub cause: serde_json::Error,
}

/// Why one array element could not be turned into a domain record.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error(transparent)]
    MissingField(#[from] MissingField),

    #[error("malformed element: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid timestamp in `{field}`: {cause}")]
    Timestamp {
        field: &'static str,
        #[source]
        cause: chrono::ParseError,
    },

    #[error("invalid link in `{field}`: {cause}")]
    Link {
        field: &'static str,
        #[source]
        cause: url::ParseError,
    },
}

/// Which kind of element was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Binary,
    Release,
    Version,
}

impl ErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorContext::Binary => "binary",
            ErrorContext::Release => "release",
            ErrorContext::Version => "version",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report of one element dropped from an otherwise successful parse.
#[derive(Debug, Clone)]
pub struct ElementError {
    pub context: ErrorContext,
    pub message: String,
    pub cause: Arc<MappingError>,
    /// The URI whose response contained the element.
    pub uri: Url,
}

impl ElementError {
    pub(crate) fn new(context: ErrorContext, cause: MappingError, uri: Url) -> Self {
        Self {
            context,
            message: cause.to_string(),
            cause: Arc::new(cause),
            uri,
        }
    }
}

/// The cause is compared through its message only.
impl PartialEq for ElementError {
    fn eq(&self, other: &Self) -> bool {
        self.context == other.context && self.message == other.message && self.uri == other.uri
    }
}

impl Eq for ElementError {}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.context, self.message, self.uri)
    }
}

impl std::error::Error for ElementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}
