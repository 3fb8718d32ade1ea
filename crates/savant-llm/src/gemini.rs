//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API. This is the provider
//! the assistant uses in production for plan generation, book search, and
//! translation.
//!
//! # Features
//!
//! - Async HTTP communication with the `generateContent` endpoint
//! - JSON response mode for structured prompts
//! - Optional web search grounding with source attribution
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use savant_llm::{GeminiConfig, GeminiService};
//!
//! let config = GeminiConfig::new("my-api-key");
//! let service = GeminiService::new(config);
//!
//! // Note: the inner generate method is async; the GenerationService trait
//! // provides a blocking wrapper.
//! ```

use crate::GenerationError;
use savant_domain::traits::{
    GenerationRequest, GenerationResponse, GenerationService, GroundingReference, ResponseFormat,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for all assistant features
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for generation requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Base API endpoint
    pub endpoint: String,
}

impl GeminiConfig {
    /// Create a configuration with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Read the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingApiKey` when the variable is unset
    /// or empty. Callers should treat this as fatal at startup.
    pub fn from_env() -> Result<Self, GenerationError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(GenerationError::MissingApiKey(API_KEY_ENV)),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API endpoint (useful for test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Google Generative Language API provider
///
/// Communicates with the `generateContent` endpoint, passing the model's
/// safety settings and, when requested, the web search tool.
pub struct GeminiService {
    config: GeminiConfig,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Harm categories blocked at medium severity and above.
const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

impl GeminiService {
    /// Create a new Gemini provider from a configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            config,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider with the API key taken from the environment.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingApiKey` when no key is configured.
    pub fn from_env() -> Result<Self, GenerationError> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn build_request(request: &GenerationRequest) -> GeminiRequest {
        let generation_config = match request.format {
            // JSON mode cannot be combined with the search tool
            ResponseFormat::Json if !request.tools.web_search => Some(GenerationConfig {
                response_mime_type: "application/json",
            }),
            _ => None,
        };

        let tools = if request.tools.web_search {
            vec![Tool {
                google_search: serde_json::Map::new(),
            }]
        } else {
            Vec::new()
        };

        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
            tools,
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_MEDIUM_AND_ABOVE",
                })
                .collect(),
        }
    }

    fn parse_response(body: GeminiResponse) -> GenerationResponse {
        let Some(candidate) = body.candidates.into_iter().next() else {
            return GenerationResponse {
                text: None,
                grounding: Vec::new(),
            };
        };

        let text = candidate.content.map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        });

        let grounding = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .filter(|web| !web.uri.is_empty())
                    .map(|web| GroundingReference {
                        uri: web.uri,
                        title: web.title,
                    })
                    .collect()
            })
            .unwrap_or_default();

        GenerationResponse { text, grounding }
    }

    /// Generate a response from the model.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API is unreachable
    /// - The model is not available
    /// - The rate limit is exceeded
    /// - The response body cannot be parsed
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let request_body = Self::build_request(request);

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.config.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<GeminiResponse>().await {
                            Ok(body) => Ok(Self::parse_response(body)),
                            Err(e) => Err(GenerationError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(GenerationError::ModelNotAvailable(
                            self.config.model.clone(),
                        ));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(GenerationError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(GenerationError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(GenerationError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| GenerationError::Communication("Max retries exceeded".to_string())))
    }
}

impl GenerationService for GeminiService {
    type Error = GenerationError;

    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, Self::Error> {
        // Blocking wrapper for async function
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| GenerationError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(async { self.generate(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_gemini_config_builders() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-pro")
            .with_endpoint("http://localhost:9999");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.endpoint, "http://localhost:9999");
    }

    #[test]
    fn test_gemini_service_with_max_retries() {
        let service = GeminiService::new(GeminiConfig::new("key")).with_max_retries(5);
        assert_eq!(service.max_retries, 5);
    }

    #[test]
    fn test_json_request_sets_mime_type() {
        let request = GenerationRequest::json("give me json");
        let body = GeminiService::build_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(json.get("tools").is_none());
        assert_eq!(json["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "give me json");
    }

    #[test]
    fn test_search_request_sets_tool_and_drops_mime_type() {
        let request = GenerationRequest::text("latest prices").with_web_search();
        let body = GeminiService::build_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert!(json.get("generationConfig").is_none());
        assert!(json["tools"][0]["googleSearch"].is_object());
    }

    #[test]
    fn test_parse_response_joins_parts() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        let response = GeminiService::parse_response(body);
        assert_eq!(response.text.as_deref(), Some("Hello world"));
        assert!(response.grounding.is_empty());
    }

    #[test]
    fn test_parse_response_collects_grounding() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "answer"}]},
                    "groundingMetadata": {
                        "groundingChunks": [
                            {"web": {"uri": "https://example.com", "title": "Example"}},
                            {"web": {"uri": "", "title": "no uri"}},
                            {}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();
        let response = GeminiService::parse_response(body);
        assert_eq!(response.grounding.len(), 1);
        assert_eq!(response.grounding[0].uri, "https://example.com");
        assert_eq!(response.grounding[0].title, "Example");
    }

    #[test]
    fn test_parse_response_empty_candidates() {
        let body: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        let response = GeminiService::parse_response(body);
        assert!(response.text.is_none());
    }

    // Integration test (requires a real API key)
    #[tokio::test]
    #[ignore] // Only run when GEMINI_API_KEY is set
    async fn test_gemini_generate_integration() {
        let service = GeminiService::from_env().unwrap();
        let result = service
            .generate(&GenerationRequest::text("Say 'hello' and nothing else"))
            .await;
        assert!(result.is_ok());
    }
}
