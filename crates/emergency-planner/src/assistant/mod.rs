//! Generative-text passthrough used for free-form plan drafting.

mod gemini;
mod prompt;
pub mod router;

pub use gemini::GeminiClient;
pub use prompt::EmergencyPlanRequest;
pub use router::assistant_router;

use async_trait::async_trait;

/// Anything that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("Missing required fields: location, type, and size are required")]
    MissingPlanFields,
    #[error("text generation is not configured")]
    NotConfigured,
    #[error("text generation failed with status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("text generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("text generation returned no content")]
    EmptyResponse,
}
