//! The high-level assistant facade
//!
//! Ties a generation service, the extractor, and the session layer together
//! behind one synchronous API. Every feature follows the same shape: build a
//! prompt, call the service, extract a validated value, reconcile it into
//! session state.

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::prompt;
use savant_domain::traits::{GenerationRequest, GenerationService, LibraryStore};
use savant_domain::{
    BlueprintRequest, BookSearchResult, Exercise, GeneratedPlan, GroundedReport, Language,
    MarketResearch, Meal, NicheAnalysis, PlanItem, Recipe, Slot, UserProfile, VideoBlueprint,
};
use savant_session::{
    is_translated_to, original_text, replace_at_slot, InFlightTracker, Library, PagedText,
    SessionError, TranslationStatus,
};
use tracing::{debug, info, warn};

/// The assistant facade.
///
/// Generic over the generation service and the library's backing store, so
/// tests can run against mocks while production wires in Gemini and SQLite.
pub struct Assistant<G: GenerationService, S: LibraryStore> {
    service: G,
    config: AssistantConfig,
    inflight: InFlightTracker,
    library: Library<S>,
}

impl<G: GenerationService, S: LibraryStore> Assistant<G, S> {
    /// Create an assistant with the default configuration.
    ///
    /// Hydrates the saved-book library from the store.
    pub fn new(service: G, store: S) -> Result<Self, AssistantError> {
        Self::with_config(service, store, AssistantConfig::default())
    }

    /// Create an assistant with an explicit configuration.
    pub fn with_config(
        service: G,
        store: S,
        config: AssistantConfig,
    ) -> Result<Self, AssistantError> {
        config.validate().map_err(AssistantError::InvalidInput)?;
        let library = Library::hydrate(store)?;
        Ok(Self {
            service,
            config,
            inflight: InFlightTracker::new(),
            library,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn call(&self, request: GenerationRequest) -> Result<Option<String>, AssistantError> {
        let response = self
            .service
            .generate(&request)
            .map_err(|e| AssistantError::Generation(e.to_string()))?;
        Ok(response.text)
    }

    // --- Plan features ---

    /// Generate a complete plan for a user profile.
    ///
    /// The plan always comes back with a non-empty `plan_id`, whether the
    /// model supplied one or not.
    pub fn generate_plan(&self, profile: &UserProfile) -> Result<GeneratedPlan, AssistantError> {
        let text = self.call(GenerationRequest::json(prompt::plan_prompt(profile)))?;
        let mut plan: GeneratedPlan = savant_extractor::extract(text.as_deref())?;
        plan.ensure_plan_id();
        info!(plan_id = %plan.plan_id, "generated plan");
        Ok(plan)
    }

    /// Fetch a detailed recipe for a named meal.
    pub fn fetch_recipe(
        &self,
        meal_name: &str,
        description: Option<&str>,
    ) -> Result<Recipe, AssistantError> {
        let text = self.call(GenerationRequest::json(prompt::recipe_prompt(
            meal_name,
            description,
        )))?;
        Ok(savant_extractor::extract(text.as_deref())?)
    }

    /// Replace the item at `slot` with a model-suggested alternative.
    ///
    /// At most one request per slot may be outstanding; a second call for
    /// the same slot while the first is unresolved fails fast. The returned
    /// plan is a new value; the caller's plan is untouched on any error.
    pub fn replace_with_alternative(
        &mut self,
        profile: &UserProfile,
        plan: &GeneratedPlan,
        slot: Slot,
    ) -> Result<GeneratedPlan, AssistantError> {
        if !self.inflight.begin(slot.clone()) {
            warn!(%slot, "rejected concurrent alternative request");
            return Err(AssistantError::RequestInFlight {
                slot: slot.to_string(),
            });
        }
        let result = self.fetch_alternative(profile, plan, &slot);
        self.inflight.finish(&slot);
        result
    }

    fn fetch_alternative(
        &self,
        profile: &UserProfile,
        plan: &GeneratedPlan,
        slot: &Slot,
    ) -> Result<GeneratedPlan, AssistantError> {
        let item = match slot {
            Slot::Meal { category, index } => {
                let current = current_meal(plan, *category, *index, slot)?;
                let text = self.call(GenerationRequest::json(prompt::alternative_meal_prompt(
                    current, profile,
                )))?;
                let meal: Meal = savant_extractor::extract(text.as_deref())?;
                PlanItem::Meal(meal)
            }
            Slot::Exercise { day, index } => {
                let current = current_exercise(plan, day, *index, slot)?;
                let text = self.call(GenerationRequest::json(
                    prompt::alternative_exercise_prompt(current, profile),
                ))?;
                let exercise: Exercise = savant_extractor::extract(text.as_deref())?;
                PlanItem::Exercise(exercise)
            }
        };
        debug!(%slot, "replacing plan item");
        Ok(replace_at_slot(plan, slot, item)?)
    }

    /// Free-text health analysis of a plan id and/or a list of conditions.
    ///
    /// At least one of the two inputs must be non-blank.
    pub fn analyze_health(
        &self,
        plan_id: Option<&str>,
        conditions: Option<&str>,
    ) -> Result<String, AssistantError> {
        let plan_id = plan_id.map(str::trim).filter(|s| !s.is_empty());
        let conditions = conditions.map(str::trim).filter(|s| !s.is_empty());
        if plan_id.is_none() && conditions.is_none() {
            return Err(AssistantError::InvalidInput(
                "provide a plan id or health conditions to analyze".to_string(),
            ));
        }
        let text = self.call(GenerationRequest::text(prompt::health_analysis_prompt(
            plan_id, conditions,
        )))?;
        text.filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AssistantError::Generation("empty analysis response".to_string()))
    }

    /// Web-grounded price analysis for a product or service in a region.
    pub fn analyze_prices(
        &self,
        query: &str,
        region: &str,
    ) -> Result<GroundedReport, AssistantError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::InvalidInput(
                "price analysis query is empty".to_string(),
            ));
        }
        let request =
            GenerationRequest::text(prompt::price_analysis_prompt(query, region)).with_web_search();
        let response = self
            .service
            .generate(&request)
            .map_err(|e| AssistantError::Generation(e.to_string()))?;
        let text = response
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AssistantError::Generation("empty price response".to_string()))?;
        Ok(GroundedReport {
            text,
            sources: response.grounding,
        })
    }

    // --- Library features ---

    /// Search for books matching a query.
    pub fn search_books(&self, query: &str) -> Result<Vec<BookSearchResult>, AssistantError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::InvalidInput(
                "search query is empty".to_string(),
            ));
        }
        let request = GenerationRequest::json(prompt::book_search_prompt(
            query,
            self.config.search_results_min,
            self.config.search_results_max,
        ))
        .with_web_search();
        let text = self.call(request)?;
        Ok(savant_extractor::extract(text.as_deref())?)
    }

    /// Save a search result to the library (first-write-wins).
    ///
    /// Returns `true` when the book was newly added.
    pub fn save_book(&mut self, book: BookSearchResult) -> Result<bool, AssistantError> {
        Ok(self.library.save_book(book)?)
    }

    /// Remove a book from the library.
    pub fn remove_book(&mut self, id: &str) -> Result<bool, AssistantError> {
        Ok(self.library.remove(id)?)
    }

    /// The saved-book collection, most recently read first.
    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    /// Open a saved book for reading, generating its excerpt on first open.
    ///
    /// Subsequent opens reuse the cached excerpt without a generation call.
    /// An empty generation result yields a one-page placeholder that is not
    /// cached, so the next open retries.
    pub fn open_book(&mut self, id: &str) -> Result<PagedText, AssistantError> {
        let entry = self
            .library
            .get(id)
            .ok_or_else(|| SessionError::UnknownBook { id: id.to_string() })?;

        if let Some(excerpt) = entry.excerpt.clone() {
            debug!(book = id, "reusing cached excerpt");
            self.library.touch(id)?;
            return Ok(PagedText::paginate(&excerpt, self.config.page_window));
        }

        let request = GenerationRequest::text(prompt::excerpt_prompt(
            &entry.book,
            self.config.excerpt_target_words,
        ));
        let text = self.call(request)?.unwrap_or_default();
        let text = text.trim();
        let paged = PagedText::paginate(text, self.config.page_window);

        if paged.is_placeholder() {
            warn!(book = id, "excerpt generation came back empty");
            self.library.touch(id)?;
        } else {
            self.library
                .set_excerpt(id, text.to_string(), paged.page_count())?;
            self.library.touch(id)?;
        }
        Ok(paged)
    }

    /// Move a book's page cursor, saturating at both ends.
    ///
    /// Returns the cursor actually stored.
    pub fn set_page(&mut self, id: &str, requested: i64) -> Result<usize, AssistantError> {
        Ok(self.library.set_cursor(id, requested)?)
    }

    /// Translate the book's current page into the language given by code.
    ///
    /// A page already carrying the target language's marker is left alone
    /// without a generation call. Retranslating to a different language
    /// always works from the page's original text.
    pub fn translate_page(
        &mut self,
        id: &str,
        paged: &mut PagedText,
        language_code: &str,
    ) -> Result<TranslationStatus, AssistantError> {
        let language = Language::by_code(language_code).ok_or_else(|| {
            AssistantError::UnknownLanguage {
                code: language_code.to_string(),
            }
        })?;
        let cursor = self
            .library
            .get(id)
            .ok_or_else(|| SessionError::UnknownBook { id: id.to_string() })?
            .cursor;
        let page = paged.page(cursor).ok_or(SessionError::IndexOutOfRange {
            index: cursor,
            len: paged.page_count(),
        })?;

        if is_translated_to(page, language.name) {
            debug!(book = id, language = language.name, "page already translated");
            return Ok(TranslationStatus::AlreadyTranslated);
        }

        let source = original_text(page).to_string();
        let text = self
            .call(GenerationRequest::text(prompt::translation_prompt(
                &source,
                language.name,
            )))?
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AssistantError::Generation("empty translation response".to_string()))?;

        paged.apply_translation(cursor, text.trim(), language.name)?;
        Ok(TranslationStatus::Translated)
    }

    // --- Studio features ---

    /// Web-grounded analysis of a content niche.
    pub fn analyze_niche(&self, query: &str) -> Result<NicheAnalysis, AssistantError> {
        let request = GenerationRequest::json(prompt::niche_prompt(query)).with_web_search();
        let text = self.call(request)?;
        Ok(savant_extractor::extract(text.as_deref())?)
    }

    /// Web-grounded market research for a niche.
    pub fn research_market(&self, niche: &str) -> Result<MarketResearch, AssistantError> {
        let request =
            GenerationRequest::json(prompt::market_research_prompt(niche)).with_web_search();
        let text = self.call(request)?;
        Ok(savant_extractor::extract(text.as_deref())?)
    }

    /// Generate a complete video production blueprint.
    pub fn plan_video(&self, request: &BlueprintRequest) -> Result<VideoBlueprint, AssistantError> {
        if request.topic.trim().is_empty() {
            return Err(AssistantError::InvalidInput(
                "blueprint topic is empty".to_string(),
            ));
        }
        let text = self.call(GenerationRequest::json(prompt::blueprint_prompt(request)))?;
        Ok(savant_extractor::extract(text.as_deref())?)
    }
}

fn current_meal<'a>(
    plan: &'a GeneratedPlan,
    category: savant_domain::MealCategory,
    index: usize,
    slot: &Slot,
) -> Result<&'a Meal, SessionError> {
    let meals = plan
        .diet_plan
        .meals(category)
        .ok_or_else(|| SessionError::SlotNotFound {
            slot: slot.to_string(),
        })?;
    meals.get(index).ok_or(SessionError::IndexOutOfRange {
        index,
        len: meals.len(),
    })
}

fn current_exercise<'a>(
    plan: &'a GeneratedPlan,
    day: &str,
    index: usize,
    slot: &Slot,
) -> Result<&'a Exercise, SessionError> {
    let activities = plan
        .exercise_plan
        .iter()
        .find(|d| d.day == day)
        .map(|d| d.activities.as_slice())
        .ok_or_else(|| SessionError::SlotNotFound {
            slot: slot.to_string(),
        })?;
    activities.get(index).ok_or(SessionError::IndexOutOfRange {
        index,
        len: activities.len(),
    })
}
