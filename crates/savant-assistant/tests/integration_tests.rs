//! Integration tests for the assistant facade
//!
//! Run the full prompt -> generate -> extract -> reconcile pipeline against
//! the mock service and the in-memory store.

use savant_assistant::{Assistant, AssistantError};
use savant_domain::{
    ActivityLevel, BookSearchResult, Gender, MealCategory, Slot, UserProfile,
};
use savant_llm::MockService;
use savant_session::TranslationStatus;
use savant_store::MemoryStore;

fn profile() -> UserProfile {
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

fn book(id: &str, title: &str) -> BookSearchResult {
    BookSearchResult {
        id: id.to_string(),
        title: title.to_string(),
        author: "Jane Austen".to_string(),
        description: None,
        cover_image_url: None,
        free_source_url: None,
    }
}

const PLAN_JSON: &str = r#"{
    "dietPlan": {
        "breakfast": [{"name": "Oatmeal", "calories": 350}],
        "lunch": [{"name": "Chicken Salad", "calories": 500}],
        "dinner": [{"name": "Grilled Fish", "calories": 550}]
    },
    "exercisePlan": [
        {"day": "Monday", "activities": [{"name": "Running", "duration": "30 min"}]}
    ],
    "detoxSuggestions": [],
    "motivationQuote": "Keep going",
    "timeframeAssessment": "Realistic"
}"#;

#[test]
fn generates_plan_from_fenced_response() {
    let fenced = format!("Here is your plan:\n```json\n{}\n```", PLAN_JSON);
    let service = MockService::new(fenced);
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let plan = assistant.generate_plan(&profile()).unwrap();
    assert!(!plan.plan_id.is_empty());
    assert_eq!(plan.diet_plan.breakfast[0].name, "Oatmeal");
    assert_eq!(plan.exercise_plan[0].day, "Monday");
}

#[test]
fn rejects_plan_with_missing_sections() {
    let service = MockService::new(r#"{"motivationQuote": "only this"}"#);
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let result = assistant.generate_plan(&profile());
    assert!(matches!(result, Err(AssistantError::Extract(_))));
}

#[test]
fn alternative_replaces_exactly_one_meal() {
    let mut service = MockService::new(PLAN_JSON);
    service.respond_when(
        "alternative meal",
        r#"{"name": "Buckwheat Porridge", "description": "Nutty", "calories": 340}"#,
    );
    let mut assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let plan = assistant.generate_plan(&profile()).unwrap();
    let slot = Slot::Meal {
        category: MealCategory::Breakfast,
        index: 0,
    };
    let updated = assistant
        .replace_with_alternative(&profile(), &plan, slot)
        .unwrap();

    assert_eq!(updated.diet_plan.breakfast[0].name, "Buckwheat Porridge");
    // Siblings and the original plan are untouched
    assert_eq!(updated.diet_plan.lunch, plan.diet_plan.lunch);
    assert_eq!(updated.diet_plan.dinner, plan.diet_plan.dinner);
    assert_eq!(plan.diet_plan.breakfast[0].name, "Oatmeal");
}

#[test]
fn alternative_failure_releases_the_slot() {
    let mut service = MockService::new(PLAN_JSON);
    service.fail_when("alternative exercise", "model unavailable");
    let mut assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let plan = assistant.generate_plan(&profile()).unwrap();
    let slot = Slot::Exercise {
        day: "Monday".to_string(),
        index: 0,
    };

    let first = assistant.replace_with_alternative(&profile(), &plan, slot.clone());
    assert!(matches!(first, Err(AssistantError::Generation(_))));

    // The failed request must not leave the slot marked busy
    let second = assistant.replace_with_alternative(&profile(), &plan, slot);
    assert!(!matches!(second, Err(AssistantError::RequestInFlight { .. })));
}

#[test]
fn alternative_for_unknown_slot_fails_without_a_service_call() {
    let service = MockService::new(PLAN_JSON);
    let mut assistant = Assistant::new(service.clone(), MemoryStore::new()).unwrap();

    let plan = assistant.generate_plan(&profile()).unwrap();
    let slot = Slot::Exercise {
        day: "Sunday".to_string(),
        index: 0,
    };
    let result = assistant.replace_with_alternative(&profile(), &plan, slot);

    assert!(matches!(result, Err(AssistantError::Session(_))));
    // Only the plan generation hit the service
    assert_eq!(service.call_count(), 1);
}

#[test]
fn price_analysis_carries_grounding_sources() {
    use savant_domain::traits::GroundingReference;

    let service = MockService::new("Prices range from 1800 to 2200 EUR.").with_grounding(vec![
        GroundingReference {
            uri: "https://example.com/prices".to_string(),
            title: "Market prices".to_string(),
        },
    ]);
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let report = assistant.analyze_prices("RTX 4090 graphics card", "Germany").unwrap();
    assert!(report.text.contains("1800"));
    assert_eq!(report.sources.len(), 1);
}

#[test]
fn price_analysis_rejects_blank_queries() {
    let assistant = Assistant::new(MockService::default(), MemoryStore::new()).unwrap();
    let result = assistant.analyze_prices("  ", "Germany");
    assert!(matches!(result, Err(AssistantError::InvalidInput(_))));
}

#[test]
fn health_analysis_needs_at_least_one_input() {
    let service = MockService::new("## Assessment\nLooks balanced overall.");
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let empty = assistant.analyze_health(None, Some("  "));
    assert!(matches!(empty, Err(AssistantError::InvalidInput(_))));

    let analysis = assistant
        .analyze_health(Some("plan-123"), Some("type 2 diabetes"))
        .unwrap();
    assert!(analysis.contains("balanced"));
}

#[test]
fn open_book_caches_the_excerpt() {
    let mut service = MockService::new("unused default");
    service.respond_when("reading excerpt", "It is a truth universally acknowledged...");
    let mut assistant = Assistant::new(service.clone(), MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Pride and Prejudice")).unwrap();
    let first = assistant.open_book("b1").unwrap();
    assert!(!first.is_placeholder());
    assert_eq!(service.call_count(), 1);

    // Second open reuses the cache without another generation call
    let second = assistant.open_book("b1").unwrap();
    assert_eq!(second.page_count(), first.page_count());
    assert_eq!(service.call_count(), 1);
}

#[test]
fn empty_excerpt_is_not_cached() {
    let mut service = MockService::new("unused default");
    service.respond_when("reading excerpt", "   ");
    let mut assistant = Assistant::new(service.clone(), MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Pride and Prejudice")).unwrap();
    let paged = assistant.open_book("b1").unwrap();
    assert!(paged.is_placeholder());

    // The next open retries generation instead of serving the placeholder
    assistant.open_book("b1").unwrap();
    assert_eq!(service.call_count(), 2);
}

#[test]
fn library_survives_rehydration() {
    let store = MemoryStore::new();
    let service = MockService::new("unused");

    let mut assistant = Assistant::new(service.clone(), store.clone()).unwrap();
    assistant.save_book(book("b1", "Emma")).unwrap();
    assistant.save_book(book("b2", "Persuasion")).unwrap();
    // Duplicate save is a no-op
    assert!(!assistant.save_book(book("b1", "Emma")).unwrap());
    drop(assistant);

    let reopened = Assistant::new(service, store).unwrap();
    assert_eq!(reopened.library().len(), 2);
    assert!(reopened.library().get("b1").is_some());
}

#[test]
fn set_page_saturates_at_both_ends() {
    let mut service = MockService::new("unused default");
    // 650 characters, 300 per page, so 3 pages
    service.respond_when("reading excerpt", "x".repeat(650));
    let mut assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Emma")).unwrap();
    assistant.open_book("b1").unwrap();

    assert_eq!(assistant.set_page("b1", 99).unwrap(), 2);
    assert_eq!(assistant.set_page("b1", -5).unwrap(), 0);
    assert_eq!(assistant.set_page("b1", 1).unwrap(), 1);
}

#[test]
fn translate_twice_makes_one_service_call() {
    let mut service = MockService::new("unused default");
    service.respond_when("reading excerpt", "It was a cold day.");
    service.respond_when("Translate the following", "Es war ein kalter Tag.");
    let mut assistant = Assistant::new(service.clone(), MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Emma")).unwrap();
    let mut paged = assistant.open_book("b1").unwrap();

    let first = assistant.translate_page("b1", &mut paged, "de").unwrap();
    assert_eq!(first, TranslationStatus::Translated);
    assert!(paged.page(0).unwrap().contains("Es war ein kalter Tag."));
    assert!(paged.page(0).unwrap().contains("German"));
    let calls_after_first = service.call_count();

    let second = assistant.translate_page("b1", &mut paged, "de").unwrap();
    assert_eq!(second, TranslationStatus::AlreadyTranslated);
    assert_eq!(service.call_count(), calls_after_first);
}

#[test]
fn retranslation_works_from_the_original_text() {
    let mut service = MockService::new("unused default");
    service.respond_when("reading excerpt", "It was a cold day.");
    service.respond_when("into German", "Es war ein kalter Tag.");
    service.respond_when("into French", "C'etait une journee froide.");
    let mut assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Emma")).unwrap();
    let mut paged = assistant.open_book("b1").unwrap();

    assistant.translate_page("b1", &mut paged, "de").unwrap();
    assistant.translate_page("b1", &mut paged, "fr").unwrap();

    let page = paged.page(0).unwrap();
    assert!(page.contains("journee froide"));
    assert!(page.contains("French"));
    assert!(!page.contains("kalter Tag"));
}

#[test]
fn translate_rejects_unknown_language_codes() {
    let mut service = MockService::new("unused default");
    service.respond_when("reading excerpt", "Some text.");
    let mut assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    assistant.save_book(book("b1", "Emma")).unwrap();
    let mut paged = assistant.open_book("b1").unwrap();

    let result = assistant.translate_page("b1", &mut paged, "xx");
    assert!(matches!(
        result,
        Err(AssistantError::UnknownLanguage { .. })
    ));
}

#[test]
fn search_books_extracts_an_array() {
    let service = MockService::new(
        r#"```json
[{"id": "b1", "title": "Emma", "author": "Jane Austen"}]
``` trailing note"#,
    );
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let results = assistant.search_books("austen").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Emma");
}

#[test]
fn search_books_rejects_blank_queries() {
    let assistant = Assistant::new(MockService::default(), MemoryStore::new()).unwrap();
    let result = assistant.search_books("   ");
    assert!(matches!(result, Err(AssistantError::InvalidInput(_))));
}

#[test]
fn niche_analysis_survives_prose_wrapped_json() {
    let service = MockService::new(
        r#"Based on current search data, here is the analysis:
{"nicheSummary": "Growing niche", "popularSubTopics": ["a"], "targetAudienceInsights": "young adults", "contentOpportunities": [], "keywords": ["k"]}
I hope this helps!"#,
    );
    let assistant = Assistant::new(service, MemoryStore::new()).unwrap();

    let analysis = assistant.analyze_niche("sourdough").unwrap();
    assert_eq!(analysis.niche_summary, "Growing niche");
    assert_eq!(analysis.popular_sub_topics, vec!["a"]);
}
