//! Video strategist shapes: niche analysis, market research, blueprints

use serde::{Deserialize, Serialize};

/// Analysis of a content niche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheAnalysis {
    /// Summary of the niche and its potential
    pub niche_summary: String,

    /// Popular sub-topics within the niche
    #[serde(default)]
    pub popular_sub_topics: Vec<String>,

    /// Demographics, interests and search intent of the audience
    #[serde(default)]
    pub target_audience_insights: String,

    /// Content angles likely to stand out
    #[serde(default)]
    pub content_opportunities: Vec<String>,

    /// SEO keywords for the niche
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl NicheAnalysis {
    /// The sub-topic to preselect as a video topic, falling back to the
    /// given query when the generator returned none.
    pub fn default_topic<'a>(&'a self, query: &'a str) -> &'a str {
        self.popular_sub_topics
            .first()
            .map(String::as_str)
            .unwrap_or(query)
    }
}

/// A highly viewed video example found during market research.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlyViewedVideo {
    /// Video title
    pub title: String,

    /// Platform, e.g. "YouTube", "TikTok"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// View or like figure as reported, e.g. "1.2M views"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,

    /// Direct link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Observations on why it performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Qualitative volume/engagement level reported per platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// High
    High,
    /// Medium
    Medium,
    /// Low
    Low,
    /// Not determinable
    #[default]
    #[serde(other)]
    Unknown,
}

/// Content distribution across one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDistribution {
    /// Platform name, e.g. "Instagram Reels"
    pub platform_name: String,

    /// Volume of content in the niche
    #[serde(default)]
    pub content_volume: Level,

    /// Audience engagement level
    #[serde(default)]
    pub audience_engagement: Level,

    /// Platform-specific observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Market research for a niche across video platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResearch {
    /// The niche that was analyzed
    pub analyzed_niche: String,

    /// Top-performing video examples
    #[serde(default)]
    pub highly_viewed_videos: Vec<HighlyViewedVideo>,

    /// Per-platform distribution analysis
    #[serde(default)]
    pub platform_analysis: Vec<PlatformDistribution>,

    /// Competition, saturation and trend observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_observations: Option<String>,

    /// Search queries or sources consulted
    #[serde(default)]
    pub data_sources_used: Vec<String>,
}

/// A link to a stock-footage search for a b-roll suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrollSearchLink {
    /// Stock site name, e.g. "Pexels"
    pub site_name: String,

    /// Pre-built search URL
    pub url: String,
}

/// A b-roll footage suggestion with where to find it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrollSuggestion {
    /// What the footage should show
    pub description: String,

    /// Stock-site search links
    #[serde(default)]
    pub search_links: Vec<BrollSearchLink>,
}

/// One scene of a short-form storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardScene {
    /// Scene order number
    pub scene_number: u32,

    /// Duration, e.g. "3-5 seconds"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<String>,

    /// What is on screen
    pub visual_description: String,

    /// Overlay text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_screen_text: Option<String>,

    /// Voiceover line for the scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover_script: Option<String>,

    /// Music or sound effect suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_suggestion: Option<String>,

    /// B-roll options for the scene
    #[serde(default)]
    pub broll_suggestions: Vec<BrollSuggestion>,
}

/// One segment of a long-form script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSegment {
    /// Segment title
    pub segment_title: String,

    /// Duration, e.g. "1-2 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<String>,

    /// Visual ideas for the segment
    #[serde(default)]
    pub visual_ideas: String,

    /// Voiceover text
    pub voiceover_script: String,

    /// B-roll options for the segment
    #[serde(default)]
    pub broll_suggestions: Vec<BrollSuggestion>,
}

/// Either a list of strings or a single string.
///
/// Generators answer "a list of suggested elements" inconsistently; both
/// forms appear in real payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    /// Multiple values
    Many(Vec<String>),
    /// A single value
    One(String),
}

impl Default for StringOrList {
    fn default() -> Self {
        StringOrList::Many(Vec::new())
    }
}

/// A thumbnail concept description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailConcept {
    /// Concept order number
    pub concept_number: u32,

    /// Concept description
    pub description: String,

    /// Visual elements to include
    #[serde(default)]
    pub suggested_elements: StringOrList,
}

/// A scene-level prompt suggestion for image/video generation tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePrompt {
    /// Scene number this prompt belongs to, if tied to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_number: Option<u32>,

    /// The scene being described
    pub scene_description: String,

    /// Prompt to feed a generation tool
    pub prompt_suggestion: String,
}

/// Prompt material for downstream AI tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiToolSuggestions {
    /// One text-to-image prompt per thumbnail concept
    #[serde(default)]
    pub thumbnail_prompts: Vec<String>,

    /// Notes on using the voiceover script with TTS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover_notes: Option<String>,

    /// Prompt ideas for key scenes
    #[serde(default)]
    pub visual_prompts_for_scenes: Vec<ScenePrompt>,
}

/// Requested video format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// Short vertical video, roughly 15-60 seconds
    Reels,
    /// Long-form video, roughly 5-15 minutes
    Long,
}

/// Inputs for a video production blueprint.
#[derive(Debug, Clone)]
pub struct BlueprintRequest {
    /// Main topic of the video
    pub topic: String,

    /// Requested format
    pub kind: VideoKind,

    /// Tone, e.g. "informative and entertaining"
    pub tone: String,

    /// Additional focus points
    pub specific_focus: Option<String>,

    /// Niche context from a prior analysis, if available
    pub niche_context: Option<String>,
}

/// A complete video production blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlueprint {
    /// The niche this blueprint was generated for
    pub generated_for_niche: String,

    /// Video format
    pub video_type: VideoKind,

    /// Tone of the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_tone: Option<String>,

    /// SEO-friendly title options
    #[serde(default)]
    pub title_suggestions: Vec<String>,

    /// Description draft with keywords and call to action
    #[serde(default)]
    pub description_draft: String,

    /// Tags and keywords
    #[serde(default)]
    pub tags_keywords: Vec<String>,

    /// Scene-by-scene storyboard (short-form)
    #[serde(default)]
    pub storyboard: Vec<StoryboardScene>,

    /// Segmented script (long-form)
    #[serde(default)]
    pub script_segments: Vec<ScriptSegment>,

    /// Full voiceover script (long-form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_voiceover_script: Option<String>,

    /// Full subtitle script (long-form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_subtitle_script: Option<String>,

    /// Thumbnail concepts
    #[serde(default)]
    pub thumbnail_concepts: Vec<ThumbnailConcept>,

    /// Royalty-free soundtrack suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundtrack_suggestion: Option<String>,

    /// Qualitative assessment of expected engagement
    #[serde(default)]
    pub potential_interaction_assessment: String,

    /// Prompt material for downstream AI tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_tool_suggestions: Option<AiToolSuggestions>,
}
