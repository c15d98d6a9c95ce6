use ai_client::{Agent, OpenAi, PromptBuilder};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use legal_help_common::{CaseRequest, Config, LegalHelpError};

use crate::analyzer::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::generator::{build_scenario_prompt, SCENARIO_SYSTEM_PROMPT};

/// Sampling temperature for both scenario generation and critique.
pub const TEMPERATURE: f32 = 0.7;

// --- CaseWriter trait ---

/// Produces case scenarios and critiques. Each call is one model round trip;
/// failures are returned to the caller untouched.
#[async_trait]
pub trait CaseWriter: Send + Sync {
    async fn generate_scenario(&self, request: &CaseRequest) -> Result<String>;
    async fn analyze_solution(&self, scenario: &str, solution: &str) -> Result<String>;
}

pub struct LlmCaseWriter {
    ai: OpenAi,
}

impl LlmCaseWriter {
    pub fn new(ai: OpenAi) -> Self {
        Self { ai }
    }

    /// Build from config. A missing API key still yields a writer; requests
    /// then fail with the provider's authentication error.
    pub fn from_config(config: &Config) -> Self {
        let ai = OpenAi::new(config.api_key.clone().unwrap_or_default(), &config.model);
        let ai = match config.openai_base_url {
            Some(ref url) => ai.with_base_url(url),
            None => ai,
        };
        Self::new(ai)
    }

    pub fn model(&self) -> &str {
        self.ai.model()
    }

    async fn complete(&self, system: &str, prompt: String, what: &str) -> Result<String> {
        let text = self
            .ai
            .prompt(prompt)
            .preamble(system)
            .temperature(TEMPERATURE)
            .send()
            .await?;

        if text.trim().is_empty() {
            return Err(LegalHelpError::Generation(format!("model returned an empty {what}")).into());
        }
        Ok(text)
    }
}

#[async_trait]
impl CaseWriter for LlmCaseWriter {
    async fn generate_scenario(&self, request: &CaseRequest) -> Result<String> {
        info!(
            category = %request.category,
            region = %request.region,
            locality = %request.locality,
            timeline = %request.timeline,
            model = %self.model(),
            "Generating case scenario"
        );
        let scenario = self
            .complete(SCENARIO_SYSTEM_PROMPT, build_scenario_prompt(request), "scenario")
            .await?;
        info!(chars = scenario.len(), "Case scenario generated");
        Ok(scenario)
    }

    async fn analyze_solution(&self, scenario: &str, solution: &str) -> Result<String> {
        info!(
            scenario_chars = scenario.len(),
            solution_chars = solution.len(),
            model = %self.model(),
            "Analyzing solution"
        );
        let feedback = self
            .complete(
                ANALYSIS_SYSTEM_PROMPT,
                build_analysis_prompt(scenario, solution),
                "analysis",
            )
            .await?;
        info!(chars = feedback.len(), "Solution analyzed");
        Ok(feedback)
    }
}
