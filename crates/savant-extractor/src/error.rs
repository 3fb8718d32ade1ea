//! Error types for payload extraction

use thiserror::Error;

/// Errors that can occur while normalizing a generated payload.
///
/// Variants that fail before a parse attempt carry the cleaned text as a
/// bounded salvaged prefix for caller diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The payload was absent or contained only whitespace
    #[error("empty payload")]
    EmptyPayload,

    /// No `{` or `[` found anywhere in the cleaned payload
    #[error("no JSON start found in payload")]
    NoJsonStart {
        /// Bounded prefix of the cleaned payload
        salvaged: String,
    },

    /// The payload still does not begin with `{` or `[` after cleanup
    #[error("payload still malformed after cleanup")]
    StillInvalid {
        /// Bounded prefix of the cleaned payload
        salvaged: String,
    },

    /// The cleaned payload failed to parse as JSON
    #[error("JSON parse error: {message}")]
    Parse {
        /// Parser error message
        message: String,
        /// Bounded prefix of the text that failed to parse
        snippet: String,
    },

    /// The parsed JSON does not match the expected shape
    #[error("payload does not match the {shape} shape: {detail}")]
    SchemaMismatch {
        /// Name of the expected shape
        shape: &'static str,
        /// What was missing or mistyped
        detail: String,
    },
}

impl ExtractError {
    /// The salvaged or offending text carried by this error, if any.
    pub fn salvaged(&self) -> Option<&str> {
        match self {
            ExtractError::NoJsonStart { salvaged } | ExtractError::StillInvalid { salvaged } => {
                Some(salvaged)
            }
            ExtractError::Parse { snippet, .. } => Some(snippet),
            _ => None,
        }
    }
}
