use serde::Deserialize;

pub mod newsletter;
pub mod preferences;
pub mod recommendation;

pub use newsletter::{NewsletterRequest, NewsletterResponse, NewsletterSubscription};
pub use preferences::{
    BreakFrequency, Distraction, Environment, LearningStyle, MissingField, MotivationFactor,
    MotivationFactors, PreferenceDraft, StudyPreferences, StudyTime,
};
pub use recommendation::{AiRecommendation, Recommendation};

/// Request for model-generated recommendations
///
/// Every field is optional; whatever is missing is described to the model as
/// not specified.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendationRequest {
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub attention_span: Option<u32>,
    #[serde(default)]
    pub study_time: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl From<&StudyPreferences> for AiRecommendationRequest {
    fn from(prefs: &StudyPreferences) -> Self {
        Self {
            learning_style: Some(prefs.learning_style.as_str().to_string()),
            attention_span: Some(prefs.attention_span),
            study_time: Some(prefs.study_time.as_str().to_string()),
            environment: Some(prefs.environment.as_str().to_string()),
            interests: Vec::new(),
        }
    }
}
