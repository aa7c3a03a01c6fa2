use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{NewsletterRequest, NewsletterResponse, NewsletterSubscription},
};

/// Destination for validated newsletter subscriptions
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn record(&self, subscription: &NewsletterSubscription) -> AppResult<()>;
}

/// Records subscriptions as structured log lines only
#[derive(Debug, Clone, Default)]
pub struct LogSubscriptionStore;

#[async_trait::async_trait]
impl SubscriptionStore for LogSubscriptionStore {
    async fn record(&self, subscription: &NewsletterSubscription) -> AppResult<()> {
        tracing::info!(
            email = %subscription.email,
            name = %subscription.name,
            resource_interests = ?subscription.resource_interests,
            skill_level = %subscription.skill_level,
            subscribed_at = %subscription.subscribed_at.to_rfc3339(),
            "New newsletter subscription"
        );
        Ok(())
    }
}

/// Validates a sign-up and hands it to the store
pub async fn register(
    store: Arc<dyn SubscriptionStore>,
    request: NewsletterRequest,
) -> AppResult<NewsletterResponse> {
    let subscription = request.validate(Utc::now())?;
    store.record(&subscription).await?;
    Ok(NewsletterResponse::subscribed())
}
