use anyhow::Result;
use async_trait::async_trait;

/// A configured model endpoint that can start single-turn prompts.
pub trait Agent: Clone + Send + Sync {
    type PromptBuilder: PromptBuilder;

    fn prompt(&self, input: impl Into<String>) -> Self::PromptBuilder;
}

/// One system instruction plus one user input, sent as a single completion.
#[async_trait]
pub trait PromptBuilder: Send + Sized {
    fn preamble(self, preamble: impl Into<String>) -> Self;

    /// Sampling temperature. Left to the provider default when unset.
    fn temperature(self, temperature: f32) -> Self;

    /// Returns the text of the first choice. A reply with no text is
    /// `AiError::EmptyResponse`.
    async fn send(self) -> Result<String>;
}
