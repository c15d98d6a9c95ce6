use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::error::AiError;
use crate::traits::PromptBuilder;

use super::types::*;
use super::OpenAi;

pub struct OpenAiPromptBuilder {
    agent: OpenAi,
    input: String,
    preamble: Option<String>,
    temperature: Option<f32>,
}

impl OpenAiPromptBuilder {
    pub(crate) fn new(agent: OpenAi, input: String) -> Self {
        Self {
            agent,
            input,
            preamble: None,
            temperature: None,
        }
    }

    /// System message first when set, then the input as the user turn.
    pub(crate) fn build_request(&self) -> ChatRequest {
        let system = self.preamble.as_deref().map(WireMessage::system);
        let user = (!self.input.is_empty()).then(|| WireMessage::user(&self.input));

        let mut request = ChatRequest::new(&self.agent.model).messages(system.into_iter().chain(user));

        if let Some(temp) = self.temperature {
            request = request.temperature(temp);
        }

        request
    }
}

#[async_trait]
impl PromptBuilder for OpenAiPromptBuilder {
    fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    async fn send(self) -> Result<String> {
        let request = self.build_request();
        let response = self.agent.client().chat(&request).await?;

        let text = response.into_text().ok_or(AiError::EmptyResponse)?;
        debug!(model = %self.agent.model, chars = text.len(), "OpenAI chat response");
        Ok(text)
    }
}
