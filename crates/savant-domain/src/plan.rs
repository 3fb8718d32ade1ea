//! Diet and fitness plan shapes
//!
//! These mirror the JSON layout the generation prompts request, so every
//! field name is camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The profile a plan is generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,

    /// Current weight in kilograms
    pub current_weight_kg: f64,

    /// Target weight in kilograms
    pub target_weight_kg: f64,

    /// Height in centimeters
    pub height_cm: u32,

    /// Self-reported gender
    pub gender: Gender,

    /// Weekly activity level
    pub activity_level: ActivityLevel,

    /// Months allotted to reach the target
    pub goal_months: u32,

    /// Foods the user dislikes or is allergic to (comma separated)
    pub disliked_foods: String,

    /// Exercises the user refuses to do (comma separated)
    pub disliked_exercises: String,

    /// Free-form description of the desired physique
    pub desired_physique: String,

    /// Additional dietary preferences or restrictions
    pub dietary_restrictions: String,
}

/// Self-reported gender options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / prefer not to say
    Other,
}

/// Weekly activity level options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Desk work, little to no exercise
    Sedentary,
    /// Exercise 1-2 days per week
    Light,
    /// Exercise 3-5 days per week
    Moderate,
    /// Exercise 6-7 days per week
    Active,
    /// Physical labor or two sessions per day
    VeryActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "lightly active",
            ActivityLevel::Moderate => "moderately active",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// A single meal entry in the diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name
    pub name: String,

    /// Short description of the meal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Approximate calorie count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

/// One day's meals grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDiet {
    /// Breakfast options
    pub breakfast: Vec<Meal>,

    /// Lunch options
    pub lunch: Vec<Meal>,

    /// Dinner options
    pub dinner: Vec<Meal>,

    /// Optional snack options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snacks: Option<Vec<Meal>>,
}

impl DailyDiet {
    /// Borrow the meal list for a category, if present.
    pub fn meals(&self, category: MealCategory) -> Option<&[Meal]> {
        match category {
            MealCategory::Breakfast => Some(&self.breakfast),
            MealCategory::Lunch => Some(&self.lunch),
            MealCategory::Dinner => Some(&self.dinner),
            MealCategory::Snacks => self.snacks.as_deref(),
        }
    }

    /// Mutably borrow the meal list for a category, if present.
    pub fn meals_mut(&mut self, category: MealCategory) -> Option<&mut Vec<Meal>> {
        match category {
            MealCategory::Breakfast => Some(&mut self.breakfast),
            MealCategory::Lunch => Some(&mut self.lunch),
            MealCategory::Dinner => Some(&mut self.dinner),
            MealCategory::Snacks => self.snacks.as_mut(),
        }
    }
}

/// Meal categories of a daily diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snacks
    Snacks,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snacks => "snacks",
        };
        write!(f, "{}", label)
    }
}

/// A single exercise activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,

    /// Duration, e.g. "30 minutes"
    pub duration: String,

    /// Sets and repetitions, e.g. "3x12"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets_reps: Option<String>,

    /// Coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of the exercise plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDay {
    /// Day label, e.g. "Monday"
    pub day: String,

    /// Ordered activities for the day
    pub activities: Vec<Exercise>,
}

/// A detox or healthy-drink suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetoxSuggestion {
    /// Drink name
    pub name: String,

    /// What it is and why
    pub description: String,

    /// Preparation instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// A complete generated diet and fitness plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Plan identifier supplied by the generator (may be empty)
    #[serde(default)]
    pub plan_id: String,

    /// Daily meals grouped by category
    pub diet_plan: DailyDiet,

    /// Exercise activities per day of the week
    pub exercise_plan: Vec<ExerciseDay>,

    /// Detox and healthy-drink suggestions
    #[serde(default)]
    pub detox_suggestions: Vec<DetoxSuggestion>,

    /// Motivational quote
    #[serde(default)]
    pub motivation_quote: String,

    /// Assessment of the requested timeframe
    #[serde(default)]
    pub timeframe_assessment: String,

    /// Approximate total daily calories the plan targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total_daily_calories: Option<String>,
}

impl GeneratedPlan {
    /// Assign a fresh UUIDv7 plan id when the generator left it empty.
    ///
    /// The id is what users quote later for a health analysis, so every plan
    /// must carry one even when the model forgot.
    pub fn ensure_plan_id(&mut self) {
        if self.plan_id.trim().is_empty() {
            self.plan_id = uuid::Uuid::now_v7().to_string();
        }
    }
}

/// A recipe for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Dish name
    pub name: String,

    /// Ingredient list
    pub ingredients: Vec<String>,

    /// Preparation steps in order
    pub steps: Vec<String>,

    /// Total cooking time, e.g. "25 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,

    /// Servings, e.g. "2 portions"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
}
