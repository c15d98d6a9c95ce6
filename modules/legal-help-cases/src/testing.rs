// Test double for the CaseWriter seam.
//
// MockCaseWriter returns canned text (or a canned failure) and records every
// call so tests can assert what the model would have received, or that it
// was never asked at all.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use legal_help_common::CaseRequest;

use crate::writer::CaseWriter;

pub const MOCK_SCENARIO: &str = "Mock scenario: a consumer dispute awaiting your solution.";
pub const MOCK_FEEDBACK: &str = "Mock feedback: strong on facts, weak on remedies.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisCall {
    pub scenario: String,
    pub solution: String,
}

pub struct MockCaseWriter {
    scenario: String,
    feedback: String,
    scenario_failure: Option<String>,
    analysis_failure: Option<String>,
    scenario_requests: Mutex<Vec<CaseRequest>>,
    analysis_calls: Mutex<Vec<AnalysisCall>>,
}

impl Default for MockCaseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCaseWriter {
    pub fn new() -> Self {
        Self {
            scenario: MOCK_SCENARIO.to_string(),
            feedback: MOCK_FEEDBACK.to_string(),
            scenario_failure: None,
            analysis_failure: None,
            scenario_requests: Mutex::new(Vec::new()),
            analysis_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = scenario.into();
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    /// Make every call fail with `message`, after recording it.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.scenario_failure = Some(message.clone());
        self.analysis_failure = Some(message);
        self
    }

    /// Generate scenarios normally but fail every analysis.
    pub fn failing_analysis(mut self, message: impl Into<String>) -> Self {
        self.analysis_failure = Some(message.into());
        self
    }

    pub fn scenario_requests(&self) -> Vec<CaseRequest> {
        self.scenario_requests.lock().unwrap().clone()
    }

    pub fn analysis_calls(&self) -> Vec<AnalysisCall> {
        self.analysis_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaseWriter for MockCaseWriter {
    async fn generate_scenario(&self, request: &CaseRequest) -> Result<String> {
        self.scenario_requests.lock().unwrap().push(request.clone());
        if let Some(ref message) = self.scenario_failure {
            bail!("{message}");
        }
        Ok(self.scenario.clone())
    }

    async fn analyze_solution(&self, scenario: &str, solution: &str) -> Result<String> {
        self.analysis_calls.lock().unwrap().push(AnalysisCall {
            scenario: scenario.to_string(),
            solution: solution.to_string(),
        });
        if let Some(ref message) = self.analysis_failure {
            bail!("{message}");
        }
        Ok(self.feedback.clone())
    }
}
