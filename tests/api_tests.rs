use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use study_planner_api::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    models::NewsletterSubscription,
    services::{providers::TextGenerator, LogSubscriptionStore, SubscriptionStore},
};

const MODEL_RESPONSE: &str = r#"Here you go:
{
  "sessionStructure": ["60-minute sessions", "10-minute breaks", "Study after dinner", "Long break after 3 sessions"],
  "techniques": ["<strong>Mind maps</strong>", "<strong>Color coding</strong>", "<strong>Pomodoro</strong>", "<strong>Self-quizzing</strong>"],
  "environment": ["Quiet desk", "Warm lighting", "Phone out of reach"],
  "motivationalQuote": "Small steps every day.",
  "aiGeneratedInsights": "Evening sessions suit your visual style.",
  "customizedTips": ["<strong>Sketch</strong> first", "<strong>Review</strong> weekly", "<strong>Rest</strong> well"]
}"#;

/// Returns a canned reply, or fails like a dropped connection
struct StubGenerator {
    reply: Option<&'static str>,
}

#[async_trait::async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.reply
            .map(str::to_string)
            .ok_or_else(|| AppError::ExternalApi("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

struct FailingStore;

#[async_trait::async_trait]
impl SubscriptionStore for FailingStore {
    async fn record(&self, _subscription: &NewsletterSubscription) -> AppResult<()> {
        Err(AppError::Subscription("store offline".to_string()))
    }
}

fn create_server(reply: Option<&'static str>, store: Arc<dyn SubscriptionStore>) -> TestServer {
    let state = AppState::new(Arc::new(StubGenerator { reply }), store);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_server(Some(MODEL_RESPONSE), Arc::new(LogSubscriptionStore))
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "1f0c7a4e-2b1d-4c1e-9a8b-6f5d4c3b2a10";
    let response = server
        .get("/health")
        .add_header("x-request-id", id)
        .await;
    assert_eq!(response.headers()["x-request-id"], id);
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let server = create_test_server();

    let response = server
        .post("/api/newsletter")
        .json(&json!({
            "email": "a@b.com",
            "agreedToTerms": true
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["subscribed"], true);
    assert_eq!(body["message"], "Successfully subscribed to newsletter");
}

#[tokio::test]
async fn test_newsletter_requires_consent() {
    let server = create_test_server();

    let response = server
        .post("/api/newsletter")
        .json(&json!({
            "email": "a@b.com",
            "agreedToTerms": false
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "You must agree to receive our newsletter");
}

#[tokio::test]
async fn test_newsletter_requires_email() {
    let server = create_test_server();

    let response = server.post("/api/newsletter").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Valid email is required");
}

#[tokio::test]
async fn test_newsletter_accepts_loosely_typed_optional_fields() {
    let server = create_test_server();

    let response = server
        .post("/api/newsletter")
        .json(&json!({
            "email": "a@b.com",
            "name": 5,
            "agreedToTerms": true,
            "resourceInterests": "not-a-list"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["subscribed"], true);
}

#[tokio::test]
async fn test_newsletter_store_failure_is_opaque() {
    let server = create_server(Some(MODEL_RESPONSE), Arc::new(FailingStore));

    let response = server
        .post("/api/newsletter")
        .json(&json!({
            "email": "a@b.com",
            "agreedToTerms": true
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Server error during subscription");
}

#[tokio::test]
async fn test_ai_recommendations_from_model() {
    let server = create_test_server();

    let response = server
        .post("/api/ai-recommendations")
        .json(&json!({
            "learningStyle": "visual",
            "attentionSpan": 60,
            "studyTime": "evening",
            "environment": "quiet",
            "interests": ["education"]
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["motivationalQuote"], "Small steps every day.");
    assert_eq!(body["customizedTips"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_ai_recommendations_fallback_on_unparseable_output() {
    let server = create_server(
        Some("Sorry, I can only answer in prose."),
        Arc::new(LogSubscriptionStore),
    );

    let response = server.post("/api/ai-recommendations").json(&json!({})).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["sessionStructure"][0],
        "Unable to generate personalized session structure"
    );
    assert_eq!(
        body["motivationalQuote"],
        "The best way to predict the future is to create it. - Abraham Lincoln"
    );
}

#[tokio::test]
async fn test_ai_recommendations_transport_failure() {
    let server = create_server(None, Arc::new(LogSubscriptionStore));

    let response = server
        .post("/api/ai-recommendations")
        .json(&json!({ "learningStyle": "auditory" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Failed to generate AI recommendations");
}

#[tokio::test]
async fn test_rule_based_recommendations() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "learningStyle": "visual",
            "attentionSpan": 50,
            "studyTime": "evening",
            "breakFrequency": "moderate",
            "environment": "quiet",
            "motivationFactors": {"rewards": true, "goals": false, "progress": false, "social": false},
            "distraction": "phone"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["sessionStructure"][0], "45-minute focused study sessions");
    assert_eq!(body["sessionStructure"][1], "10-minute breaks between sessions");
    assert_eq!(body["environment"].as_array().unwrap().len(), 4);
    assert!(body["techniques"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t.as_str().unwrap().contains("Reward system")));
}

#[tokio::test]
async fn test_rule_based_recommendations_require_answers() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "attentionSpan": 45,
            "studyTime": "evening"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rule_based_recommendations_unknown_answers() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "learningStyle": "telepathic",
            "attentionSpan": 120,
            "studyTime": "midnight",
            "breakFrequency": "sometimes",
            "environment": "cafe"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["sessionStructure"][0], "90-minute focused study sessions");
    assert_eq!(body["sessionStructure"][1], "15-minute breaks between sessions");
    assert_eq!(body["sessionStructure"].as_array().unwrap().len(), 3);
    assert!(body["environment"][0]
        .as_str()
        .unwrap()
        .contains("Ambient environment"));
}

#[tokio::test]
async fn test_rule_based_recommendations_echo_request_id() {
    let server = create_test_server();
    let id = "7d3e1b2a-5c4f-4a6b-8e9d-0c1b2a3f4e5d";

    let response = server
        .post("/api/recommendations")
        .add_header("x-request-id", id)
        .json(&json!({
            "learningStyle": "reading",
            "attentionSpan": 30,
            "studyTime": "afternoon",
            "environment": "ambient"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers()["x-request-id"], id);
}
