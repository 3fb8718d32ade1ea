//! Configuration for the Assistant

use serde::{Deserialize, Serialize};

/// Configuration for the Assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Characters per reading page
    pub page_window: usize,

    /// Target length for generated book excerpts (words)
    pub excerpt_target_words: usize,

    /// Minimum number of book search results to request
    pub search_results_min: usize,

    /// Maximum number of book search results to request
    pub search_results_max: usize,
}

impl AssistantConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_window == 0 {
            return Err("page_window must be greater than 0".to_string());
        }
        if self.excerpt_target_words == 0 {
            return Err("excerpt_target_words must be greater than 0".to_string());
        }
        if self.search_results_min == 0 {
            return Err("search_results_min must be greater than 0".to_string());
        }
        if self.search_results_max < self.search_results_min {
            return Err("search_results_max cannot be less than search_results_min".to_string());
        }
        Ok(())
    }

    /// Compact preset: short pages and excerpts for small screens
    pub fn compact() -> Self {
        Self {
            page_window: 150,
            excerpt_target_words: 600,
            search_results_min: 3,
            search_results_max: 5,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AssistantConfig {
    /// Default configuration mirroring the reader's standard page size
    fn default() -> Self {
        Self {
            page_window: savant_session::DEFAULT_PAGE_WINDOW,
            excerpt_target_words: 1_500,
            search_results_min: 3,
            search_results_max: 7,
        }
    }
}
