pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert in critiquing solutions based on Indian Laws and rule";

/// User prompt pairing the scenario with the user's proposed solution.
pub fn build_analysis_prompt(scenario: &str, solution: &str) -> String {
    format!(
        "Scenario: {scenario}\n\
         User Solution: {solution}\n\
         \n\
         Analyze the user's solution. Highlight strong points and identify flaws. Provide constructive feedback to improve their approach."
    )
}
