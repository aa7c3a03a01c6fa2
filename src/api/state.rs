use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        providers::{GeminiProvider, TextGenerator},
        AiAdapter, LogSubscriptionStore, SubscriptionStore,
    },
};

/// Shared application state
///
/// Holds only the injected collaborators; nothing in here is mutated by
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub ai_adapter: AiAdapter,
    pub subscriptions: Arc<dyn SubscriptionStore>,
}

impl AppState {
    /// Creates state from explicitly constructed collaborators
    pub fn new(generator: Arc<dyn TextGenerator>, subscriptions: Arc<dyn SubscriptionStore>) -> Self {
        Self {
            ai_adapter: AiAdapter::new(generator),
            subscriptions,
        }
    }

    /// Wires the production collaborators from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let generator = GeminiProvider::from_config(config)?;

        tracing::info!(
            provider = generator.name(),
            model = %config.gemini_model,
            "AI provider configured"
        );

        Ok(Self::new(
            Arc::new(generator),
            Arc::new(LogSubscriptionStore),
        ))
    }
}
