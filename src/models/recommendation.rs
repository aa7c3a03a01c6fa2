use serde::{Deserialize, Serialize};

/// Study plan shown after the quiz is completed
///
/// Technique and environment entries may embed `<strong>` emphasis markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub session_structure: Vec<String>,
    pub techniques: Vec<String>,
    pub environment: Vec<String>,
    pub motivational_quote: String,
}

/// Model-generated study plan with the extra AI-only sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub ai_generated_insights: String,
    pub customized_tips: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AiRecommendation {
    /// Static result served when the model output cannot be decoded
    pub fn fallback() -> Self {
        Self {
            recommendation: Recommendation {
                session_structure: strings(&[
                    "Unable to generate personalized session structure",
                    "Please try again later",
                    "Our AI is currently learning",
                    "Consider using the manual recommendation tool instead",
                ]),
                techniques: strings(&[
                    "Unable to generate personalized techniques",
                    "Please try again later",
                    "Our AI is currently learning",
                    "Consider using the manual recommendation tool instead",
                ]),
                environment: strings(&[
                    "Unable to generate personalized environment recommendations",
                    "Please try again later",
                    "Consider using the manual recommendation tool instead",
                ]),
                motivational_quote:
                    "The best way to predict the future is to create it. - Abraham Lincoln"
                        .to_string(),
            },
            ai_generated_insights: "We're experiencing difficulty generating personalized insights at the moment. Please try again later.".to_string(),
            customized_tips: strings(&[
                "Unable to generate personalized tips",
                "Please try again later",
                "Consider using the manual recommendation tool instead",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_recommendation_wire_shape() {
        let value = serde_json::to_value(AiRecommendation::fallback()).unwrap();

        assert_eq!(value["sessionStructure"].as_array().unwrap().len(), 4);
        assert_eq!(value["techniques"].as_array().unwrap().len(), 4);
        assert_eq!(value["environment"].as_array().unwrap().len(), 3);
        assert_eq!(value["customizedTips"].as_array().unwrap().len(), 3);
        assert!(value["motivationalQuote"].is_string());
        assert!(value["aiGeneratedInsights"].is_string());
        assert!(value.get("recommendation").is_none());
    }
}
