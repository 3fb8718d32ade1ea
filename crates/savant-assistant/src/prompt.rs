//! Prompt builders for every assistant feature
//!
//! Each builder produces a self-contained English prompt that names the
//! exact JSON keys the response must carry, so the extractor's shape
//! validation lines up with what the model was asked for. Builders are pure
//! string functions; nothing here talks to a service.

use savant_domain::{BlueprintRequest, BookSearchResult, Exercise, Meal, UserProfile, VideoKind};

/// Prompt for a complete diet, exercise, and detox plan.
pub fn plan_prompt(profile: &UserProfile) -> String {
    format!(
        "You are an expert dietitian and personal trainer. Create a personalized \
         weekly plan for this person:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Current weight: {current} kg, target weight: {target} kg\n\
         - Height: {height} cm\n\
         - Activity level: {activity}\n\
         - Goal timeframe: {months} months\n\
         - Disliked foods: {disliked_foods}\n\
         - Disliked exercises: {disliked_exercises}\n\
         - Desired physique: {physique}\n\
         - Dietary restrictions: {restrictions}\n\n\
         Respond with a single JSON object and nothing else, using exactly these \
         keys: \"dietPlan\" (object with \"breakfast\", \"lunch\", \"dinner\", and \
         optional \"snacks\", each an array of meals with \"name\", \"description\", \
         \"calories\"), \"exercisePlan\" (array of objects with \"day\" and \
         \"activities\", each activity with \"name\", \"duration\", \"setsReps\", \
         \"notes\"), \"detoxSuggestions\" (array with \"name\", \"description\", \
         \"preparation\"), \"motivationQuote\", \"timeframeAssessment\", and \
         \"estimatedTotalDailyCalories\". Assess honestly whether the target \
         weight is realistic in the given timeframe.",
        age = profile.age,
        gender = profile.gender,
        current = profile.current_weight_kg,
        target = profile.target_weight_kg,
        height = profile.height_cm,
        activity = profile.activity_level,
        months = profile.goal_months,
        disliked_foods = non_empty(&profile.disliked_foods),
        disliked_exercises = non_empty(&profile.disliked_exercises),
        physique = non_empty(&profile.desired_physique),
        restrictions = non_empty(&profile.dietary_restrictions),
    )
}

/// Prompt for a detailed recipe of one named meal.
pub fn recipe_prompt(meal_name: &str, description: Option<&str>) -> String {
    let context = description
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(" The meal is described as: {}.", d))
        .unwrap_or_default();
    format!(
        "Provide a detailed recipe for \"{meal_name}\".{context} Respond with a \
         single JSON object and nothing else, using exactly these keys: \"name\", \
         \"ingredients\" (array of strings with quantities), \"steps\" (array of \
         strings in order), \"cookingTime\", and \"servings\"."
    )
}

/// Prompt for a single replacement meal that differs from the current one.
pub fn alternative_meal_prompt(current: &Meal, profile: &UserProfile) -> String {
    format!(
        "Suggest one alternative meal to replace \"{name}\" ({calories} kcal) for a \
         person with these constraints: disliked foods: {disliked}, dietary \
         restrictions: {restrictions}. The alternative must have similar calories \
         and must not be \"{name}\" again. Respond with a single JSON object and \
         nothing else, using exactly these keys: \"name\", \"description\", and \
         \"calories\" (number).",
        name = current.name,
        calories = current
            .calories
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        disliked = non_empty(&profile.disliked_foods),
        restrictions = non_empty(&profile.dietary_restrictions),
    )
}

/// Prompt for a single replacement exercise that differs from the current one.
pub fn alternative_exercise_prompt(current: &Exercise, profile: &UserProfile) -> String {
    format!(
        "Suggest one alternative exercise to replace \"{name}\" (duration: \
         {duration}) for a person with activity level {activity} who dislikes: \
         {disliked}. The alternative must target a similar intensity and must not \
         be \"{name}\" again. Respond with a single JSON object and nothing else, \
         using exactly these keys: \"name\", \"duration\", \"setsReps\", and \
         \"notes\".",
        name = current.name,
        duration = current.duration,
        activity = profile.activity_level,
        disliked = non_empty(&profile.disliked_exercises),
    )
}

/// Prompt for a free-text health analysis.
///
/// Sections are added only for the inputs the user actually provided; the
/// caller guarantees at least one of them is present. The disclaimer framing
/// stays in the prompt so the model repeats it in the answer.
pub fn health_analysis_prompt(plan_id: Option<&str>, conditions: Option<&str>) -> String {
    let mut prompt = String::from(
        "PLEASE NOTE: this analysis is not medical advice and is for general \
         awareness only. Anyone with a health concern must consult a doctor or \
         dietitian before starting a new diet or exercise program. Answer in \
         Markdown with headings and lists, acting as a health advisor, and \
         analyze the following:\n",
    );
    if let Some(plan_id) = plan_id {
        prompt.push_str(&format!(
            "\n## General Assessment for Diet Plan ID: {plan_id}\nEvaluate the \
             likely effects of a diet plan with this ID. State that you do not \
             know its specific contents and reason only from general assumptions \
             (energy levels, nutritional variety, sustainability)."
        ));
    }
    if let Some(conditions) = conditions {
        prompt.push_str(&format!(
            "\n\n## General Recommendations for Health Conditions: \"{conditions}\"\n\
             Give general nutrition and lifestyle recommendations for a person \
             with these conditions, highlighting food groups to prefer or avoid."
        ));
    }
    if plan_id.is_some() && conditions.is_some() {
        prompt.push_str(
            "\n\n## Synthesis\nCombine the assumptions about the plan with the \
             stated conditions into a balanced summary of risks and benefits.",
        );
    }
    prompt.push_str(
        "\n\n---\n**IMPORTANT:** this is AI-generated general information, not \
         personal medical advice. Always consult a qualified professional before \
         making health decisions.",
    );
    prompt
}

/// Prompt for a grounded price analysis of a product or service.
pub fn price_analysis_prompt(query: &str, region: &str) -> String {
    format!(
        "Produce a detailed price analysis for \"{query}\" in \"{region}\". \
         Cover: 1. the general market price range (across models or tiers where \
         relevant); 2. where the best deals tend to be found; 3. the main factors \
         driving the price (supply and demand, brand, features, seasonality, \
         regional taxes); 4. using web search, a summary of recent news or market \
         developments for this product in {region} from the last one to three \
         months. Answer as plain analysis text; sources found via search are \
         reported separately and the source list may be empty."
    )
}

/// Prompt for a book search returning structured results.
pub fn book_search_prompt(query: &str, min_results: usize, max_results: usize) -> String {
    format!(
        "Search for books matching \"{query}\". Return between {min_results} and \
         {max_results} results. Respond with a single JSON array and nothing else. \
         Each element must use exactly these keys: \"id\" (a stable unique string), \
         \"title\", \"author\", \"description\" (one or two sentences), \
         \"coverImageUrl\" (direct image URL or null), and \"freeSourceUrl\" (a \
         legal free reading source such as Project Gutenberg, or null)."
    )
}

/// Prompt for a long reading excerpt of a saved book.
pub fn excerpt_prompt(book: &BookSearchResult, target_words: usize) -> String {
    format!(
        "Write a faithful reading excerpt of approximately {target_words} words \
         from the beginning of \"{title}\" by {author}. If the text is in the \
         public domain, quote the opening pages verbatim; otherwise write a \
         detailed summary of the opening in the book's own narrative style. Plain \
         text only, no JSON, no headings, no commentary.",
        title = book.title,
        author = book.author,
    )
}

/// Prompt for translating one reading page.
pub fn translation_prompt(text: &str, language_name: &str) -> String {
    format!(
        "Translate the following text into {language_name}. Keep the meaning and \
         tone intact. Output only the translation, nothing else.\n\n{text}"
    )
}

/// Prompt for a grounded niche analysis.
pub fn niche_prompt(query: &str) -> String {
    format!(
        "You are a content strategy expert. Using current web data, analyze the \
         content niche \"{query}\". Respond with a single JSON object and nothing \
         else, using exactly these keys: \"nicheSummary\", \"popularSubTopics\" \
         (array of strings), \"targetAudienceInsights\", \"contentOpportunities\" \
         (array of strings), and \"keywords\" (array of strings)."
    )
}

/// Prompt for grounded market research of a niche.
pub fn market_research_prompt(niche: &str) -> String {
    format!(
        "Using current web data, research how the niche \"{niche}\" performs \
         across video platforms. Respond with a single JSON object and nothing \
         else, using exactly these keys: \"analyzedNiche\", \"highlyViewedVideos\" \
         (array with \"title\", \"platform\", \"views\", \"link\", \"notes\"), \
         \"platformAnalysis\" (array with \"platformName\", \"contentVolume\" and \
         \"audienceEngagement\" as one of \"low\", \"medium\", \"high\", and \
         \"notes\"), \"generalObservations\", and \"dataSourcesUsed\" (array of \
         strings)."
    )
}

/// Prompt for a complete video production blueprint.
pub fn blueprint_prompt(request: &BlueprintRequest) -> String {
    let (format_name, structure) = match request.kind {
        VideoKind::Reels => (
            "a short vertical video (15-60 seconds)",
            "\"storyboard\" (array of scenes with \"sceneNumber\", \
             \"durationSeconds\", \"visualDescription\", \"onScreenText\", \
             \"voiceoverScript\", \"soundSuggestion\", and \"brollSuggestions\")",
        ),
        VideoKind::Long => (
            "a long-form video (5-15 minutes)",
            "\"scriptSegments\" (array of segments with \"segmentTitle\", \
             \"durationMinutes\", \"visualIdeas\", \"voiceoverScript\", and \
             \"brollSuggestions\") and \"fullVoiceoverScript\"",
        ),
    };
    let focus = request
        .specific_focus
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| format!(" Specific focus: {}.", f))
        .unwrap_or_default();
    let context = request
        .niche_context
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!(" Niche context from prior analysis: {}.", c))
        .unwrap_or_default();
    format!(
        "You are a video production expert. Create a complete production blueprint \
         for {format_name} about \"{topic}\" with a {tone} tone.{focus}{context} \
         Every \"brollSuggestions\" element must have a \"description\" and \
         \"searchLinks\" (array of objects with \"siteName\" and \"url\" pointing \
         to pre-filled searches on Pexels or Pixabay). Respond with a single JSON \
         object and nothing else, using exactly these keys: \"generatedForNiche\", \
         \"videoType\" (\"reels\" or \"long\"), \"videoTone\", \
         \"titleSuggestions\" (array of strings), \"descriptionDraft\", \
         \"tagsKeywords\" (array of strings), {structure}, \"thumbnailConcepts\" \
         (array with \"conceptNumber\", \"description\", \"suggestedElements\"), \
         and \"aiToolSuggestions\" (object with \"thumbnailPrompts\", \
         \"voiceoverNotes\", \"visualPromptsForScenes\").",
        topic = request.topic,
        tone = request.tone,
    )
}

fn non_empty(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "none"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savant_domain::{ActivityLevel, Gender};

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 35,
            current_weight_kg: 90.0,
            target_weight_kg: 80.0,
            height_cm: 180,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal_months: 6,
            disliked_foods: "celery".to_string(),
            disliked_exercises: String::new(),
            desired_physique: "lean".to_string(),
            dietary_restrictions: String::new(),
        }
    }

    #[test]
    fn plan_prompt_names_all_top_level_keys() {
        let prompt = plan_prompt(&sample_profile());
        for key in [
            "dietPlan",
            "exercisePlan",
            "detoxSuggestions",
            "motivationQuote",
            "timeframeAssessment",
            "estimatedTotalDailyCalories",
        ] {
            assert!(prompt.contains(key), "missing key {key}");
        }
        assert!(prompt.contains("celery"));
    }

    #[test]
    fn empty_profile_fields_render_as_none() {
        let prompt = plan_prompt(&sample_profile());
        assert!(prompt.contains("Disliked exercises: none"));
    }

    #[test]
    fn recipe_prompt_includes_description_when_present() {
        let with = recipe_prompt("Lentil Soup", Some("A hearty soup"));
        assert!(with.contains("A hearty soup"));
        let without = recipe_prompt("Lentil Soup", None);
        assert!(!without.contains("described as"));
        assert!(without.contains("cookingTime"));
    }

    #[test]
    fn alternative_meal_prompt_forbids_repeat() {
        let meal = Meal {
            name: "Oatmeal".to_string(),
            description: None,
            calories: Some(350),
        };
        let prompt = alternative_meal_prompt(&meal, &sample_profile());
        assert!(prompt.contains("must not be \"Oatmeal\""));
        assert!(prompt.contains("350"));
    }

    #[test]
    fn blueprint_prompt_switches_structure_by_kind() {
        let mut request = BlueprintRequest {
            topic: "sourdough baking".to_string(),
            kind: VideoKind::Reels,
            tone: "playful".to_string(),
            specific_focus: None,
            niche_context: None,
        };
        let reels = blueprint_prompt(&request);
        assert!(reels.contains("storyboard"));
        assert!(!reels.contains("scriptSegments"));

        request.kind = VideoKind::Long;
        let long = blueprint_prompt(&request);
        assert!(long.contains("scriptSegments"));
        assert!(long.contains("fullVoiceoverScript"));
    }

    #[test]
    fn health_prompt_sections_follow_the_inputs() {
        let both = health_analysis_prompt(Some("plan-1"), Some("hypertension"));
        assert!(both.contains("Diet Plan ID: plan-1"));
        assert!(both.contains("hypertension"));
        assert!(both.contains("Synthesis"));

        let only_conditions = health_analysis_prompt(None, Some("hypertension"));
        assert!(!only_conditions.contains("Diet Plan ID"));
        assert!(!only_conditions.contains("Synthesis"));
    }

    #[test]
    fn book_search_prompt_carries_result_bounds() {
        let prompt = book_search_prompt("stoicism", 3, 7);
        assert!(prompt.contains("between 3 and 7"));
        assert!(prompt.contains("freeSourceUrl"));
    }
}
