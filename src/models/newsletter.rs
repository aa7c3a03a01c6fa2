use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Raw newsletter sign-up body
///
/// Every field stays untyped. `email` and `agreedToTerms` are checked for
/// presence and truthiness; the optional fields are rendered into the record
/// whatever shape they arrive in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub resource_interests: Option<Value>,
    #[serde(default)]
    pub skill_level: Option<Value>,
    #[serde(default)]
    pub agreed_to_terms: Option<Value>,
}

/// A validated subscription, as handed to the subscription store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub email: String,
    pub name: String,
    pub resource_interests: Vec<String>,
    pub skill_level: String,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NewsletterResponse {
    pub message: String,
    pub subscribed: bool,
}

impl NewsletterResponse {
    pub fn subscribed() -> Self {
        Self {
            message: "Successfully subscribed to newsletter".to_string(),
            subscribed: true,
        }
    }
}

/// JavaScript truthiness, which is what the sign-up form relies on
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a truthy value as text, or `fallback` for falsy and missing ones
fn render_or(value: Option<&Value>, fallback: &str) -> String {
    value
        .filter(|v| is_truthy(v))
        .map(render)
        .unwrap_or_else(|| fallback.to_string())
}

/// A list renders item by item; any other truthy value becomes a single item
fn render_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(render).collect(),
        Some(v) if is_truthy(v) => vec![render(v)],
        _ => Vec::new(),
    }
}

impl NewsletterRequest {
    /// Checks presence of the email and consent, stamping the subscription time
    pub fn validate(self, now: DateTime<Utc>) -> AppResult<NewsletterSubscription> {
        let email = match self.email {
            Some(Value::String(email)) if !email.is_empty() => email,
            _ => {
                return Err(AppError::InvalidInput(
                    "Valid email is required".to_string(),
                ))
            }
        };

        if !self.agreed_to_terms.as_ref().is_some_and(is_truthy) {
            return Err(AppError::InvalidInput(
                "You must agree to receive our newsletter".to_string(),
            ));
        }

        Ok(NewsletterSubscription {
            email,
            name: render_or(self.name.as_ref(), "Not provided"),
            resource_interests: render_list(self.resource_interests.as_ref()),
            skill_level: render_or(self.skill_level.as_ref(), "Not specified"),
            subscribed_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> NewsletterRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_email_rejected() {
        let err = request(json!({"agreedToTerms": true}))
            .validate(Utc::now())
            .unwrap_err();
        assert!(err.to_string().contains("Valid email is required"));
    }

    #[test]
    fn test_non_string_email_rejected() {
        let err = request(json!({"email": 42, "agreedToTerms": true}))
            .validate(Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_consent_required() {
        for consent in [json!(false), json!(0), json!(""), json!(null)] {
            let err = request(json!({"email": "a@b.com", "agreedToTerms": consent}))
                .validate(Utc::now())
                .unwrap_err();
            assert!(err.to_string().contains("must agree"));
        }

        let err = request(json!({"email": "a@b.com"}))
            .validate(Utc::now())
            .unwrap_err();
        assert!(err.to_string().contains("must agree"));
    }

    #[test]
    fn test_truthy_consent_accepted_with_defaults() {
        let now = Utc::now();
        let subscription = request(json!({"email": "a@b.com", "agreedToTerms": "yes"}))
            .validate(now)
            .unwrap();

        assert_eq!(subscription.email, "a@b.com");
        assert_eq!(subscription.name, "Not provided");
        assert_eq!(subscription.skill_level, "Not specified");
        assert!(subscription.resource_interests.is_empty());
        assert_eq!(subscription.subscribed_at, now);
    }

    #[test]
    fn test_optional_fields_kept() {
        let subscription = request(json!({
            "email": "sam@example.com",
            "name": "Sam",
            "resourceInterests": ["flashcards", "time-management"],
            "skillLevel": "beginner",
            "agreedToTerms": true
        }))
        .validate(Utc::now())
        .unwrap();

        assert_eq!(subscription.name, "Sam");
        assert_eq!(subscription.skill_level, "beginner");
        assert_eq!(subscription.resource_interests.len(), 2);
    }

    #[test]
    fn test_loosely_typed_optional_fields_rendered() {
        let subscription = request(json!({
            "email": "sam@example.com",
            "name": 5,
            "resourceInterests": "flashcards",
            "skillLevel": false,
            "agreedToTerms": 1
        }))
        .validate(Utc::now())
        .unwrap();

        assert_eq!(subscription.name, "5");
        assert_eq!(subscription.resource_interests, vec!["flashcards".to_string()]);
        assert_eq!(subscription.skill_level, "Not specified");
    }

    #[test]
    fn test_mixed_interest_list_rendered_per_item() {
        let subscription = request(json!({
            "email": "sam@example.com",
            "name": "",
            "resourceInterests": ["notes", 3, null],
            "agreedToTerms": true
        }))
        .validate(Utc::now())
        .unwrap();

        assert_eq!(subscription.name, "Not provided");
        assert_eq!(subscription.resource_interests, vec!["notes", "3", "null"]);
    }
}
