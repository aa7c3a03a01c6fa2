/// Generative-text provider abstraction
///
/// The AI adapter only needs "prompt in, free-form text out". Providers are
/// constructed from configuration at startup and handed to the adapter, so
/// tests can substitute a stub.
use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for hosted generative-text models
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the model's raw text response
    ///
    /// Transport and model-invocation failures are returned as errors; no
    /// retry is attempted.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
