//! Expected shapes and their field checks
//!
//! Deserialization already enforces structure; `missing_fields` adds the
//! semantic checks serde cannot express, such as a name that deserialized
//! fine but is blank. An alternative meal without a name or an exercise
//! without a duration is useless to the reconciler, so those are rejected
//! here rather than at every call site.

use savant_domain::{
    BookSearchResult, Exercise, GeneratedPlan, MarketResearch, Meal, NicheAnalysis, Recipe,
    VideoBlueprint,
};
use serde::de::DeserializeOwned;

/// A structured form that generated payloads can be normalized into.
pub trait Shape: DeserializeOwned {
    /// Shape name used in diagnostics.
    const NAME: &'static str;

    /// Fields that are present but unusable (e.g. blank). Empty means valid.
    fn missing_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl Shape for Meal {
    const NAME: &'static str = "Meal";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        missing
    }
}

impl Shape for Exercise {
    const NAME: &'static str = "Exercise";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.duration.trim().is_empty() {
            missing.push("duration");
        }
        missing
    }
}

impl Shape for Recipe {
    const NAME: &'static str = "Recipe";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.ingredients.is_empty() {
            missing.push("ingredients");
        }
        if self.steps.is_empty() {
            missing.push("steps");
        }
        missing
    }
}

impl Shape for GeneratedPlan {
    const NAME: &'static str = "GeneratedPlan";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let diet = &self.diet_plan;
        if diet.breakfast.is_empty() && diet.lunch.is_empty() && diet.dinner.is_empty() {
            missing.push("dietPlan");
        }
        if self.exercise_plan.is_empty() {
            missing.push("exercisePlan");
        }
        missing
    }
}

impl Shape for NicheAnalysis {
    const NAME: &'static str = "NicheAnalysis";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.niche_summary.trim().is_empty() {
            missing.push("nicheSummary");
        }
        missing
    }
}

impl Shape for MarketResearch {
    const NAME: &'static str = "MarketResearch";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.analyzed_niche.trim().is_empty() {
            missing.push("analyzedNiche");
        }
        missing
    }
}

impl Shape for VideoBlueprint {
    const NAME: &'static str = "VideoBlueprint";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title_suggestions.is_empty() {
            missing.push("titleSuggestions");
        }
        // Either a storyboard (short form) or script segments (long form)
        // must be present for the blueprint to be actionable.
        if self.storyboard.is_empty() && self.script_segments.is_empty() {
            missing.push("storyboard/scriptSegments");
        }
        missing
    }
}

impl Shape for Vec<BookSearchResult> {
    const NAME: &'static str = "BookSearchResult[]";
}
