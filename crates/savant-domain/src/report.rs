//! Free-form analysis reports

use crate::traits::GroundingReference;

/// A prose analysis plus the web sources it was grounded on.
///
/// Used for price analyses, where the service runs a web search and the
/// caller renders both the text and the source list.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundedReport {
    /// The analysis text (Markdown)
    pub text: String,

    /// Sources used, may be empty
    pub sources: Vec<GroundingReference>,
}
