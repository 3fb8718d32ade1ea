//! Savant Generation Providers
//!
//! Implementations of the `GenerationService` trait from `savant-domain`.
//!
//! # Providers
//!
//! - `MockService`: deterministic mock for testing
//! - `GeminiService`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use savant_domain::traits::{GenerationRequest, GenerationService};
//! use savant_llm::MockService;
//!
//! let service = MockService::new("Hello from the model");
//! let response = service.generate(&GenerationRequest::text("any prompt")).unwrap();
//! assert_eq!(response.text.as_deref(), Some("Hello from the model"));
//! ```

#![warn(missing_docs)]

pub mod gemini;

use savant_domain::traits::{
    GenerationRequest, GenerationResponse, GenerationService, GroundingReference,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiService};

/// Errors that can occur during generation operations.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key available at startup
    #[error("no API key configured: set {0}")]
    MissingApiKey(&'static str),

    /// Network or API communication error
    #[error("communication error: {0}")]
    Communication(String),

    /// The service answered with something unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("generation error: {0}")]
    Other(String),
}

/// A canned reply for the mock service.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(String),
}

/// Mock generation service for deterministic testing.
///
/// Returns pre-configured responses without any network calls. Replies can
/// be keyed by a substring of the prompt, which suits the long prompts the
/// assistant builds.
///
/// # Examples
///
/// ```
/// use savant_domain::traits::{GenerationRequest, GenerationService};
/// use savant_llm::MockService;
///
/// let mut service = MockService::new("default");
/// service.respond_when("recipe", "{\"name\":\"Soup\"}");
/// let response = service.generate(&GenerationRequest::json("give me a recipe")).unwrap();
/// assert_eq!(response.text.as_deref(), Some("{\"name\":\"Soup\"}"));
/// assert_eq!(service.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockService {
    default_response: String,
    replies: Arc<Mutex<Vec<(String, MockReply)>>>,
    grounding: Vec<GroundingReference>,
    call_count: Arc<Mutex<usize>>,
}

impl MockService {
    /// Create a mock with a fixed response for all prompts.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            replies: Arc::new(Mutex::new(Vec::new())),
            grounding: Vec::new(),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Reply with `response` for prompts containing `needle`.
    ///
    /// Earlier registrations win when several needles match.
    pub fn respond_when(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push((needle.into(), MockReply::Text(response.into())));
    }

    /// Fail with `message` for prompts containing `needle`.
    pub fn fail_when(&mut self, needle: impl Into<String>, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push((needle.into(), MockReply::Fail(message.into())));
    }

    /// Attach grounding references to every response.
    pub fn with_grounding(mut self, grounding: Vec<GroundingReference>) -> Self {
        self.grounding = grounding;
        self
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count.
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationService for MockService {
    type Error = GenerationError;

    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let replies = self.replies.lock().unwrap();
        for (needle, reply) in replies.iter() {
            if request.prompt.contains(needle) {
                return match reply {
                    MockReply::Text(text) => Ok(GenerationResponse {
                        text: Some(text.clone()),
                        grounding: self.grounding.clone(),
                    }),
                    MockReply::Fail(message) => {
                        Err(GenerationError::Other(message.clone()))
                    }
                };
            }
        }

        Ok(GenerationResponse {
            text: Some(self.default_response.clone()),
            grounding: self.grounding.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_default_response() {
        let service = MockService::new("Test response");
        let response = service.generate(&GenerationRequest::text("anything")).unwrap();
        assert_eq!(response.text.as_deref(), Some("Test response"));
    }

    #[test]
    fn mock_matches_needles_in_order() {
        let mut service = MockService::default();
        service.respond_when("recipe", "first");
        service.respond_when("recipe for soup", "second");

        let response = service
            .generate(&GenerationRequest::json("a recipe for soup please"))
            .unwrap();
        assert_eq!(response.text.as_deref(), Some("first"));
    }

    #[test]
    fn mock_counts_calls() {
        let service = MockService::new("x");
        assert_eq!(service.call_count(), 0);
        service.generate(&GenerationRequest::text("a")).unwrap();
        service.generate(&GenerationRequest::text("b")).unwrap();
        assert_eq!(service.call_count(), 2);
        service.reset_call_count();
        assert_eq!(service.call_count(), 0);
    }

    #[test]
    fn mock_injects_errors() {
        let mut service = MockService::default();
        service.fail_when("bad", "boom");
        let result = service.generate(&GenerationRequest::text("a bad prompt"));
        assert!(matches!(result, Err(GenerationError::Other(_))));
    }

    #[test]
    fn mock_clone_shares_call_count() {
        let service = MockService::new("x");
        let clone = service.clone();
        service.generate(&GenerationRequest::text("a")).unwrap();
        assert_eq!(clone.call_count(), 1);
    }

    #[test]
    fn mock_carries_grounding() {
        let service = MockService::new("x").with_grounding(vec![GroundingReference {
            uri: "https://example.com".to_string(),
            title: "Example".to_string(),
        }]);
        let response = service.generate(&GenerationRequest::text("a")).unwrap();
        assert_eq!(response.grounding.len(), 1);
    }
}
