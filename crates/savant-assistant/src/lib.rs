//! Savant Assistant
//!
//! The top-level facade of the workspace: a synchronous API over a
//! generation service, the response extractor, and the session layer.
//!
//! # Overview
//!
//! Every feature follows the same pipeline:
//!
//! 1. Build a prompt that names the exact JSON keys expected back
//! 2. Call the configured [`GenerationService`](savant_domain::traits::GenerationService)
//! 3. Extract and shape-validate the reply with `savant-extractor`
//! 4. Reconcile the value into session state with `savant-session`
//!
//! # Examples
//!
//! ```
//! use savant_assistant::Assistant;
//! use savant_llm::MockService;
//! use savant_store::MemoryStore;
//!
//! let service = MockService::new(r#"{"name":"Lentil Soup","ingredients":["lentils"],"steps":["simmer"]}"#);
//! let assistant = Assistant::new(service, MemoryStore::new()).unwrap();
//! let recipe = assistant.fetch_recipe("Lentil Soup", None).unwrap();
//! assert_eq!(recipe.name, "Lentil Soup");
//! ```

#![warn(missing_docs)]

mod assistant;
mod config;
mod error;
pub mod prompt;

pub use assistant::Assistant;
pub use config::AssistantConfig;
pub use error::AssistantError;
