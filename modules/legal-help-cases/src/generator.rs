use legal_help_common::CaseRequest;

pub const SCENARIO_SYSTEM_PROMPT: &str =
    "You are a helpful assistant for Indian law related and legal case studies.";

/// User prompt asking for a fact pattern set in the requested place and time.
pub fn build_scenario_prompt(request: &CaseRequest) -> String {
    format!(
        "Create a realistic case scenario for a law student or advocate for the specified category and ask the user for their solution.\n\
         Category: {category}\n\
         Place: {locality}, {region}, {country}\n\
         Timeline: {timeline}.",
        category = request.category,
        locality = request.locality,
        region = request.region,
        country = request.country,
        timeline = request.timeline,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_help_common::{HomeForm, Timeline};

    #[test]
    fn prompt_embeds_every_selection() {
        let request = CaseRequest::from_form(&HomeForm {
            region: "Kerala".to_string(),
            locality: "Kochi".to_string(),
            category: "Consumer protection and unfair trade practices".to_string(),
            timeline: "2024-05-01".to_string(),
        })
        .unwrap();

        let prompt = build_scenario_prompt(&request);
        assert!(prompt.starts_with("Create a realistic case scenario"));
        assert!(prompt.contains("Category: Consumer protection and unfair trade practices\n"));
        assert!(prompt.contains("Place: Kochi, Kerala, India\n"));
        assert!(prompt.ends_with("Timeline: 2024-05-01."));
    }

    #[test]
    fn prompt_lines_are_not_indented() {
        let request = CaseRequest {
            category: "Tax law and disputes".to_string(),
            region: "Goa".to_string(),
            locality: "Panaji".to_string(),
            country: "India",
            timeline: Timeline::parse("2023-11-30").unwrap(),
        };
        for line in build_scenario_prompt(&request).lines() {
            assert_eq!(line, line.trim_start());
        }
    }
}
