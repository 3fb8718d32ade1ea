//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (savant-llm,
//! savant-store).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hint for the response body the generation service should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Request a JSON body
    Json,
    /// Request plain text
    Text,
}

/// Optional tools the generation service may use for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolHints {
    /// Allow grounding the answer with a web search
    pub web_search: bool,
}

/// A single generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The full prompt text
    pub prompt: String,

    /// Desired response format
    pub format: ResponseFormat,

    /// Tool hints
    pub tools: ToolHints,
}

impl GenerationRequest {
    /// Build a JSON-format request without tools.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::Json,
            tools: ToolHints::default(),
        }
    }

    /// Build a plain-text request without tools.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::Text,
            tools: ToolHints::default(),
        }
    }

    /// Enable the web-search tool for this request.
    pub fn with_web_search(mut self) -> Self {
        self.tools.web_search = true;
        self
    }
}

/// A source reference attached to a grounded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingReference {
    /// Source URI
    pub uri: String,

    /// Source title, may be empty
    pub title: String,
}

/// The raw result of a generation call.
///
/// `text` is the untrusted payload handed to the extractor; it may be absent
/// when the service produced no usable candidate.
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// Raw response text, before any structural interpretation
    pub text: Option<String>,

    /// Web sources the response was grounded on, if any
    pub grounding: Vec<GroundingReference>,
}

impl GenerationResponse {
    /// Build a plain response from text only.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            grounding: Vec::new(),
        }
    }
}

/// A language generation service.
///
/// One blocking call per user action; timeout and retry policy belong to the
/// implementation.
pub trait GenerationService {
    /// Error type for generation operations
    type Error: fmt::Display;

    /// Generate a response for the given request.
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, Self::Error>;
}

/// Persistent key/value storage for the library collection.
///
/// Loaded exactly once at startup and written after every mutation.
pub trait LibraryStore {
    /// Error type for store operations
    type Error: fmt::Display;

    /// Load the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}
