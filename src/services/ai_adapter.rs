use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{AiRecommendation, AiRecommendationRequest},
    services::providers::TextGenerator,
};

const NOT_SPECIFIED: &str = "Not specified";

/// Why a model response could not be turned into recommendations
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("No JSON object found in the model response")]
    NoJsonObject,

    #[error("Model response is not valid recommendation JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn or_not_specified(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_SPECIFIED)
}

/// Builds the natural-language instruction sent to the model
pub fn build_prompt(request: &AiRecommendationRequest) -> String {
    let attention_span = request
        .attention_span
        .filter(|minutes| *minutes > 0)
        .map(|minutes| minutes.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut interests = request.interests.join(", ");
    if interests.is_empty() {
        interests = NOT_SPECIFIED.to_string();
    }

    format!(
        r#"
Generate personalized study recommendations for a student with the following preferences:

- Learning Style: {learning_style}
- Attention Span: {attention_span} minutes
- Best Study Time: {study_time}
- Preferred Environment: {environment}
- Areas of Interest: {interests}

Please respond with a JSON object that contains:

1. sessionStructure: Array of 4 strings with recommended study session structure
2. techniques: Array of 4 strings with study techniques that match their learning style
3. environment: Array of 3 strings with environment recommendations
4. motivationalQuote: A single motivational quote tailored to their style
5. aiGeneratedInsights: A paragraph with personalized insights
6. customizedTips: Array of 3 strings with specific tips for their preferences

Format each technique and tip with some basic HTML formatting like <strong></strong> for emphasis.
Keep all responses concise and actionable.
"#,
        learning_style = or_not_specified(request.learning_style.as_deref()),
        attention_span = attention_span,
        study_time = or_not_specified(request.study_time.as_deref()),
        environment = or_not_specified(request.environment.as_deref()),
        interests = interests,
    )
}

/// Extracts and decodes the recommendation object embedded in model output
///
/// The object spans from the first `{` to the last `}`, so surrounding prose
/// and code fences are ignored.
pub fn parse_ai_response(text: &str) -> Result<AiRecommendation, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    Ok(serde_json::from_str(&text[start..=end])?)
}

/// Turns quiz answers into model-generated recommendations
#[derive(Clone)]
pub struct AiAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl AiAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Makes exactly one model call
    ///
    /// Transport failures propagate. Output that cannot be parsed degrades to
    /// [`AiRecommendation::fallback`].
    pub async fn recommend(&self, request: &AiRecommendationRequest) -> AppResult<AiRecommendation> {
        let prompt = build_prompt(request);

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(
                error = %e,
                provider = self.generator.name(),
                "Model invocation failed"
            );
            e
        })?;

        match parse_ai_response(&text) {
            Ok(recommendation) => Ok(recommendation),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.generator.name(),
                    "Falling back to static AI recommendations"
                );
                Ok(AiRecommendation::fallback())
            }
        }
    }
}
