//! Savant Domain Layer
//!
//! This crate contains the domain model shared by all other layers: the
//! structured shapes that generated payloads are normalized into, the
//! addressing scheme for in-place plan edits, and the trait interfaces
//! behind which infrastructure lives.
//!
//! ## Key Concepts
//!
//! - **Shape**: the expected structured form of a successfully parsed
//!   payload (a plan, a recipe, a market analysis, ...)
//! - **Slot**: an address identifying one element inside a two-level nested
//!   list structure (meal category + index, or exercise day + index)
//! - **LibraryEntry**: a saved book with a cached excerpt, a derived page
//!   count and a clamped page cursor
//!
//! ## Architecture
//!
//! - Shapes are plain serde records; no shape is self-referential
//! - Trait definitions for all external interactions (generation service,
//!   persistent store); implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod language;
pub mod library;
pub mod plan;
pub mod report;
pub mod slot;
pub mod studio;
pub mod traits;

// Re-exports for convenience
pub use language::Language;
pub use library::{BookSearchResult, LibraryEntry};
pub use plan::{
    ActivityLevel, DailyDiet, DetoxSuggestion, Exercise, ExerciseDay, Gender, GeneratedPlan, Meal,
    MealCategory, Recipe, UserProfile,
};
pub use report::GroundedReport;
pub use slot::{PlanItem, Slot};
pub use studio::{
    BlueprintRequest, MarketResearch, NicheAnalysis, VideoBlueprint, VideoKind,
};
pub use traits::{
    GenerationRequest, GenerationResponse, GroundingReference, ResponseFormat, ToolHints,
};
